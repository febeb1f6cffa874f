//! Formatter Module
//!
//! セル値の表示テキスト導出を提供するモジュール。
//! calamineの型付きセル値を、ユーザーがシート上で目にする文字列へ変換します。

use calamine::{CellErrorType, Data, DataType, ExcelDateTime};
use chrono::NaiveTime;

use crate::api::DateFormat;
use crate::builder::ConversionConfig;

/// セルフォーマッター
///
/// セル値の表示テキスト導出のファサードとして機能します。
#[derive(Debug)]
pub(crate) struct CellFormatter {
    /// 日付フォーマッター
    date_formatter: DateFormatter,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new() -> Self {
        Self {
            date_formatter: DateFormatter,
        }
    }

    /// セル値を表示テキストへ変換
    ///
    /// # 引数
    ///
    /// * `cell` - calamineから取得したセル値
    /// * `config` - 変換設定（日付形式）
    ///
    /// # 戻り値
    ///
    /// 表示テキスト。空セルは空文字列になります。
    pub fn format_cell(&self, cell: &Data, config: &ConversionConfig) -> String {
        match cell {
            Data::Empty => String::new(),

            Data::String(s) => s.clone(),

            Data::Int(i) => i.to_string(),

            // 数値書式文字列はcalamineから取得できないため、
            // 最短の往復可能表現へフォールバックする
            Data::Float(f) => f.to_string(),

            Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),

            Data::Error(e) => error_literal(e).to_string(),

            Data::DateTime(dt) => self.date_formatter.format(cell, dt, config),

            // ODSなどが持つISO形式の日付・期間はそのまま表示テキストになる
            Data::DateTimeIso(s) => s.clone(),
            Data::DurationIso(s) => s.clone(),
        }
    }
}

impl Default for CellFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値を文字列に変換します。
/// エポック処理（1900/1904年システム、うるう年バグ）はcalamineの
/// chrono変換に委譲します。
#[derive(Debug)]
struct DateFormatter;

impl DateFormatter {
    /// 日付・時刻・期間セルをフォーマット
    ///
    /// # 引数
    ///
    /// * `cell` - セル値（chrono変換用）
    /// * `excel_dt` - シリアル値（変換不能時のフォールバック用）
    /// * `config` - 変換設定
    ///
    /// # 変換規則
    ///
    /// - 期間セル: `h:mm:ss`（Excelの経過時間表示）
    /// - 時刻成分を持たない日付: 設定された`DateFormat`
    /// - 時刻成分を持つ日付: `Iso8601`では`%Y-%m-%d %H:%M:%S`、
    ///   `Custom`ではフォーマット文字列をそのまま適用
    fn format(&self, cell: &Data, excel_dt: &ExcelDateTime, config: &ConversionConfig) -> String {
        if excel_dt.is_duration() {
            match cell.as_duration() {
                Some(duration) => format_duration(duration),
                None => excel_dt.as_f64().to_string(),
            }
        } else {
            match cell.as_datetime() {
                Some(dt) => match &config.date_format {
                    DateFormat::Custom(format_str) => dt.format(format_str).to_string(),
                    DateFormat::Iso8601 => {
                        if dt.time() == NaiveTime::MIN {
                            dt.format("%Y-%m-%d").to_string()
                        } else {
                            dt.format("%Y-%m-%d %H:%M:%S").to_string()
                        }
                    }
                },
                // シリアル値がchronoの表現範囲外の場合
                None => excel_dt.as_f64().to_string(),
            }
        }
    }
}

/// 期間を`h:mm:ss`形式にフォーマット
fn format_duration(duration: chrono::Duration) -> String {
    let secs = duration.num_seconds();
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Excelのエラーセルが表示するリテラル
fn error_literal(error: &CellErrorType) -> &'static str {
    match error {
        CellErrorType::Div0 => "#DIV/0!",
        CellErrorType::NA => "#N/A",
        CellErrorType::Name => "#NAME?",
        CellErrorType::Null => "#NULL!",
        CellErrorType::Num => "#NUM!",
        CellErrorType::Ref => "#REF!",
        CellErrorType::Value => "#VALUE!",
        CellErrorType::GettingData => "#DATA!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::ExcelDateTimeType;

    fn serial_datetime(value: f64) -> Data {
        Data::DateTime(ExcelDateTime::new(
            value,
            ExcelDateTimeType::DateTime,
            false,
        ))
    }

    fn create_test_config() -> ConversionConfig {
        ConversionConfig::default()
    }

    fn create_test_config_with_date_format(date_format: DateFormat) -> ConversionConfig {
        ConversionConfig {
            date_format,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_cell_empty() {
        let formatter = CellFormatter::new();
        let config = create_test_config();

        assert_eq!(formatter.format_cell(&Data::Empty, &config), "");
    }

    #[test]
    fn test_format_cell_string() {
        let formatter = CellFormatter::new();
        let config = create_test_config();

        let result = formatter.format_cell(&Data::String("test|value".to_string()), &config);
        // 文字列セルはそのまま。エスケープはレンダラーの責務
        assert_eq!(result, "test|value");
    }

    #[test]
    fn test_format_cell_numbers() {
        let formatter = CellFormatter::new();
        let config = create_test_config();

        assert_eq!(formatter.format_cell(&Data::Int(42), &config), "42");
        assert_eq!(formatter.format_cell(&Data::Float(123.45), &config), "123.45");
        // 整数値のfloatは小数点なしで表示される
        assert_eq!(formatter.format_cell(&Data::Float(42.0), &config), "42");
        assert_eq!(formatter.format_cell(&Data::Float(-0.5), &config), "-0.5");
    }

    #[test]
    fn test_format_cell_bool() {
        let formatter = CellFormatter::new();
        let config = create_test_config();

        assert_eq!(formatter.format_cell(&Data::Bool(true), &config), "TRUE");
        assert_eq!(formatter.format_cell(&Data::Bool(false), &config), "FALSE");
    }

    #[test]
    fn test_format_cell_error() {
        let formatter = CellFormatter::new();
        let config = create_test_config();

        let result = formatter.format_cell(&Data::Error(CellErrorType::Div0), &config);
        assert_eq!(result, "#DIV/0!");

        let result = formatter.format_cell(&Data::Error(CellErrorType::NA), &config);
        assert_eq!(result, "#N/A");
    }

    #[test]
    fn test_format_cell_datetime_iso_passthrough() {
        let formatter = CellFormatter::new();
        let config = create_test_config();

        let result = formatter.format_cell(
            &Data::DateTimeIso("2025-11-20T09:30:00".to_string()),
            &config,
        );
        assert_eq!(result, "2025-11-20T09:30:00");
    }

    #[test]
    fn test_format_cell_date_iso8601() {
        let formatter = CellFormatter::new();
        let config = create_test_config_with_date_format(DateFormat::Iso8601);

        // シリアル値45658 = 2025-01-01（1900年エポック）
        let cell = serial_datetime(45658.0);
        assert_eq!(formatter.format_cell(&cell, &config), "2025-01-01");
    }

    #[test]
    fn test_format_cell_datetime_with_time() {
        let formatter = CellFormatter::new();
        let config = create_test_config_with_date_format(DateFormat::Iso8601);

        // 45658.5 = 2025-01-01 12:00:00
        let cell = serial_datetime(45658.5);
        assert_eq!(formatter.format_cell(&cell, &config), "2025-01-01 12:00:00");
    }

    #[test]
    fn test_format_cell_date_custom() {
        let formatter = CellFormatter::new();
        let config =
            create_test_config_with_date_format(DateFormat::Custom("%Y/%m/%d".to_string()));

        let cell = serial_datetime(45658.0);
        assert_eq!(formatter.format_cell(&cell, &config), "2025/01/01");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(chrono::Duration::seconds(0)), "0:00:00");
        assert_eq!(format_duration(chrono::Duration::seconds(75)), "0:01:15");
        // 24時間を超える経過時間は時間部がそのまま伸びる
        assert_eq!(format_duration(chrono::Duration::seconds(90_000)), "25:00:00");
    }
}
