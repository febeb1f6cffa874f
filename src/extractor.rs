//! Extractor Module
//!
//! calamineを使用したワークブック解析と、使用範囲からの矩形テーブル構築を
//! 提供するモジュール。

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};

use crate::builder::ConversionConfig;
use crate::error::TablerError;
use crate::formatter::CellFormatter;
use crate::types::{CellCoord, Table};

/// ワークブックエクストラクター
///
/// calamineのラッパーとして、ワークブックレベルの操作を提供します。
/// ファイルハンドルはこの構造体のライフタイムに束縛され、
/// どの経路で抜けてもドロップ時に解放されます。
pub(crate) struct WorkbookExtractor {
    /// calamineのワークブック（xlsx / xls / ods を自動判別）
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookExtractor {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `path` - ワークブックファイルのパス
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookExtractor)` - ワークブックの読み込みに成功した場合
    /// * `Err(TablerError::Workbook)` - パスが存在しない、または
    ///   スプレッドシートコンテナとして不正な場合
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TablerError> {
        let workbook = open_workbook_auto(path)?;
        Ok(Self { workbook })
    }

    /// 指定された名前のワークシートをTableとして抽出
    ///
    /// ワークブック順にシートを走査し、名前が完全一致（大文字小文字を
    /// 区別）し、かつ使用範囲が空でない最初のシートを採用します。
    /// 名前が一致してもセルを持たないシートはスキップされます。
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 抽出するワークシート名
    /// * `formatter` - セル表示テキストの導出に使用するフォーマッター
    /// * `config` - 変換設定
    ///
    /// # 戻り値
    ///
    /// * `Ok(Some(Table))` - 抽出に成功した場合
    /// * `Ok(None)` - 該当するワークシートが存在しない場合
    /// * `Err(TablerError)` - シートの読み込みに失敗した場合
    pub fn extract(
        &mut self,
        sheet_name: &str,
        formatter: &CellFormatter,
        config: &ConversionConfig,
    ) -> Result<Option<Table>, TablerError> {
        // 名前引きではなくインデックス走査にすることで、同名シートを持つ
        // 不正なファイルでも先勝ちの選択順序が保たれる
        let names = self.workbook.sheet_names().to_vec();
        for (index, name) in names.iter().enumerate() {
            if name != sheet_name {
                continue;
            }

            let range = match self.workbook.worksheet_range_at(index) {
                Some(result) => result?,
                None => continue,
            };

            // セルを1つも持たないシートは「見つからない」扱い
            if range.is_empty() {
                continue;
            }

            return Ok(Some(build_table(&range, formatter, config)));
        }

        Ok(None)
    }
}

/// 使用範囲から矩形のTableを構築
///
/// 先頭行をヘッダーとして消費し、残りをデータ行として取り込みます。
///
/// # ヘッダー行の導出
///
/// 各列の先頭行セルの表示テキストから、改行・復帰文字をそれぞれ
/// アンダースコア1文字に置換して単一行の列名を作ります。結果が空欄
/// （空または空白のみ）の場合は、そのセルのA1形式の番地を代替列名と
/// して使用します。
///
/// # データ行
///
/// 使用範囲の2行目以降の表示テキストをそのまま取り込みます（改行の
/// 置換はヘッダーのみ）。欠けているセルは空文字列で位置的に埋められ、
/// すべての行が列数と同じ長さになります。
fn build_table(
    range: &Range<Data>,
    formatter: &CellFormatter,
    config: &ConversionConfig,
) -> Table {
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let width = range.width();
    let height = range.height();

    let mut columns = Vec::with_capacity(width);
    for col in 0..width {
        let text = cell_text(range, formatter, config, 0, col);
        let collapsed = text.replace('\n', "_").replace('\r', "_");
        if collapsed.trim().is_empty() {
            let coord = CellCoord::new(start_row, start_col + col as u32);
            columns.push(coord.to_a1_notation());
        } else {
            columns.push(collapsed);
        }
    }

    let mut rows = Vec::with_capacity(height.saturating_sub(1));
    for row in 1..height {
        let mut values = Vec::with_capacity(width);
        for col in 0..width {
            values.push(cell_text(range, formatter, config, row, col));
        }
        rows.push(values);
    }

    Table::new(columns, rows)
}

/// 使用範囲内の相対位置のセル表示テキストを取得（欠損セルは空文字列）
fn cell_text(
    range: &Range<Data>,
    formatter: &CellFormatter,
    config: &ConversionConfig,
    row: usize,
    col: usize,
) -> String {
    match range.get((row, col)) {
        Some(cell) => formatter.format_cell(cell, config),
        None => String::new(),
    }
}
