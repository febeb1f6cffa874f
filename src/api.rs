//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// 出力フォーマット
///
/// 抽出したテーブルをどの形式でレンダリングするかを指定します。
/// バリアントは網羅的で、`match`による分岐漏れはコンパイルエラーになります。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// GitHub Flavored Markdownテーブル
    ///
    /// セル内の`|`は`&#124;`にエスケープされ、空セルは`&nbsp;`として
    /// 出力されます。
    ///
    /// # 出力例
    ///
    /// ```markdown
    /// |Name|Qty|
    /// |---|---|
    /// |Widget|3|
    /// ```
    Markdown,

    /// HTMLテーブル
    ///
    /// ヘッダーは`<th>`、データセルは`<td>`として出力されます。
    /// セル内容はトリムのみ行い、実体参照へのエスケープは行いません。
    ///
    /// # 出力例
    ///
    /// ```html
    /// <table>
    ///   <tr>
    ///     <th>Name</th>
    ///     <th>Qty</th>
    ///   </tr>
    ///   <tr><td>Widget</td><td>3</td></tr>
    /// </table>
    /// ```
    Html,
}

/// 日付の出力形式
///
/// 日付セルの表示テキストを導出する際の形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式（YYYY-MM-DD）
    ///
    /// 例: `2025-11-20`
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # フォーマット指定子（主要なもの）
    ///
    /// - `%Y`: 4桁の年（例: 2025）
    /// - `%m`: 2桁の月（01-12）
    /// - `%d`: 2桁の日（01-31）
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use tabler::{DateFormat, TablerBuilder};
    ///
    /// # fn main() -> Result<(), tabler::TablerError> {
    /// let tabler = TablerBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y年%m月%d日".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}
