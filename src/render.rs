//! Render Module
//!
//! 抽出済みTableをMarkdown / HTML文字列へ変換するモジュール。
//! どちらのレンダラーも状態を持たない単一パスの純粋な変換です。

use crate::api::OutputFormat;
use crate::types::Table;

/// 出力フォーマットに応じてTableをレンダリング
pub(crate) fn render(table: &Table, format: OutputFormat) -> String {
    match format {
        OutputFormat::Markdown => render_markdown(table),
        OutputFormat::Html => render_html(table),
    }
}

/// TableをGitHub Flavored Markdownテーブルへ変換
///
/// ヘッダー行、区切り行（列ごとに`|---`）、データ行の順に出力します。
/// 各行は`|`で始まり`|`と改行で終わります。末尾に余分な空行は
/// 付きません。
fn render_markdown(table: &Table) -> String {
    let mut out = String::new();

    // ヘッダー行
    for name in table.columns() {
        out.push('|');
        out.push_str(&escape_markdown_cell(name));
    }
    out.push_str("|\n");

    // 区切り行（列数と同数のセグメント）
    for _ in 0..table.column_count() {
        out.push_str("|---");
    }
    out.push_str("|\n");

    // データ行
    for row in table.rows() {
        for cell in row {
            out.push('|');
            out.push_str(&escape_markdown_cell(cell));
        }
        out.push_str("|\n");
    }

    out
}

/// Markdownセルのエスケープ
///
/// 前後の空白をトリムし、`|`を`&#124;`へ置換します。結果が空の場合は
/// セルが潰れないよう`&nbsp;`を出力します。
fn escape_markdown_cell(text: &str) -> String {
    let trimmed = text.trim().replace('|', "&#124;");
    if trimmed.is_empty() {
        "&nbsp;".to_string()
    } else {
        trimmed
    }
}

/// TableをHTMLテーブルへ変換
///
/// ヘッダーは`<th>`を1行ずつインデント付きで、データ行は`<tr>`と
/// `</tr>`の間にセルタグを連結した1行として出力します。
/// セル内容はトリムのみで、`<` `>` `&`のエスケープは行いません。
fn render_html(table: &Table) -> String {
    let mut out = String::new();
    out.push_str("<table>\n");

    // ヘッダー行
    out.push_str("  <tr>\n");
    for name in table.columns() {
        out.push_str("    <th>");
        out.push_str(name.trim());
        out.push_str("</th>\n");
    }
    out.push_str("  </tr>\n");

    // データ行（1データ行 = 1出力行）
    for row in table.rows() {
        out.push_str("  <tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(cell.trim());
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</table>\n");
    out
}
