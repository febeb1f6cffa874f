//! Builder Module
//!
//! Fluent Builder APIを提供し、`Tabler`インスタンスを段階的に構築する。

use std::path::Path;

use chrono::format::{Item, StrftimeItems};

use crate::api::{DateFormat, OutputFormat};
use crate::error::TablerError;
use crate::extractor::WorkbookExtractor;
use crate::formatter::CellFormatter;
use crate::render;
use crate::types::Table;

/// 変換処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ConversionConfig {
    /// 出力フォーマット
    pub output_format: OutputFormat,

    /// 日付形式
    pub date_format: DateFormat,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Markdown,
            date_format: DateFormat::Iso8601,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Tabler`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust
/// use tabler::{OutputFormat, TablerBuilder};
///
/// # fn main() -> Result<(), tabler::TablerError> {
/// let tabler = TablerBuilder::new()
///     .with_output_format(OutputFormat::Html)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TablerBuilder {
    /// 内部設定（構築中）
    config: ConversionConfig,
}

impl Default for TablerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TablerBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - 出力フォーマット: Markdown
    /// - 日付形式: ISO 8601 (YYYY-MM-DD)
    pub fn new() -> Self {
        Self {
            config: ConversionConfig::default(),
        }
    }

    /// 出力フォーマットを指定する
    ///
    /// # 引数
    ///
    /// * `format: OutputFormat`: 出力フォーマット（Markdown, HTML）
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// 日付の出力形式を指定する
    ///
    /// # 引数
    ///
    /// * `format: DateFormat`: 日付形式
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use tabler::{DateFormat, TablerBuilder};
    ///
    /// // ISO 8601形式（デフォルト）
    /// let builder = TablerBuilder::new()
    ///     .with_date_format(DateFormat::Iso8601);
    ///
    /// // カスタム形式
    /// let builder = TablerBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()));
    /// ```
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// 設定を検証し、`Tabler`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Tabler)`: 設定が有効な場合
    /// * `Err(TablerError::Config)`: カスタム日付形式が不正な書式文字列の場合
    pub fn build(self) -> Result<Tabler, TablerError> {
        // カスタム日付形式の検証
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            let has_invalid_item =
                StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error));
            if has_invalid_item {
                return Err(TablerError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        Ok(Tabler::new(self.config))
    }
}

/// 変換処理のファサード
///
/// ワークシートの抽出とレンダリングのメインエントリーポイントです。
/// `TablerBuilder`を使用して構築された設定に基づいて処理を実行します。
/// クリップボードへの書き込みは呼び出し側（ドライバー）の責務であり、
/// このファサードは文字列を返すだけです。
///
/// # 使用例
///
/// ```rust,no_run
/// use tabler::TablerBuilder;
///
/// # fn main() -> Result<(), tabler::TablerError> {
/// let tabler = TablerBuilder::new().build()?;
/// let markdown = tabler.convert("inventory.xlsx", "Sheet1")?;
/// println!("{}", markdown);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Tabler {
    /// 変換設定
    config: ConversionConfig,

    /// セルフォーマッター
    formatter: CellFormatter,
}

impl Tabler {
    pub(crate) fn new(config: ConversionConfig) -> Self {
        Self {
            formatter: CellFormatter::new(),
            config,
        }
    }

    /// ワークブックから指定された名前のワークシートをTableとして抽出
    ///
    /// ワークブックはこの呼び出しの間だけ開かれ、戻る前に必ず閉じられます。
    ///
    /// # 引数
    ///
    /// * `path` - ワークブックファイルのパス
    /// * `sheet_name` - 抽出するワークシート名（大文字小文字を区別する完全一致）
    ///
    /// # 戻り値
    ///
    /// * `Ok(Some(Table))` - 抽出に成功した場合
    /// * `Ok(None)` - 名前が一致し使用範囲を持つワークシートが存在しない場合
    /// * `Err(TablerError::Workbook)` - ファイルが開けない、または不正な場合
    pub fn extract<P: AsRef<Path>>(
        &self,
        path: P,
        sheet_name: &str,
    ) -> Result<Option<Table>, TablerError> {
        let mut extractor = WorkbookExtractor::open(path)?;
        extractor.extract(sheet_name, &self.formatter, &self.config)
    }

    /// Tableを設定された出力フォーマットでレンダリング
    pub fn render(&self, table: &Table) -> String {
        render::render(table, self.config.output_format)
    }

    /// 抽出とレンダリングをまとめて実行
    ///
    /// ワークシートが見つからない場合は`TablerError::SheetNotFound`を
    /// 返します。見つからない状態が後段へ流れ込むことはありません。
    ///
    /// # 引数
    ///
    /// * `path` - ワークブックファイルのパス
    /// * `sheet_name` - 抽出するワークシート名
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - レンダリング済みのテーブル文字列
    /// * `Err(TablerError)` - 抽出に失敗した場合
    pub fn convert<P: AsRef<Path>>(
        &self,
        path: P,
        sheet_name: &str,
    ) -> Result<String, TablerError> {
        let table = self
            .extract(path, sheet_name)?
            .ok_or_else(|| TablerError::SheetNotFound {
                name: sheet_name.to_string(),
            })?;
        Ok(self.render(&table))
    }
}
