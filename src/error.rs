//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// tablerクレート全体で使用するエラー型
///
/// ワークブックの読み込み、ワークシートの抽出、クリップボードへの
/// 書き込み中に発生するすべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Workbook`: ワークブックの読み込み・解析に失敗したエラー（calamine由来）
/// - `SheetNotFound`: 指定された名前のワークシートが存在しない、
///   またはセルを1つも持たないエラー
/// - `Config`: 設定の検証に失敗したエラー（無効な日付形式など）
/// - `Clipboard`: システムクリップボードへの書き込みに失敗したエラー
#[derive(Error, Debug)]
pub enum TablerError {
    /// ワークブックの読み込み・解析中に発生したエラー
    ///
    /// ファイルが存在しない、読み取り権限がない、またはスプレッドシート
    /// コンテナとして不正な場合に発生します。
    ///
    /// `#[from]`属性により、`calamine::Error`から自動的に変換されます。
    #[error("Failed to open workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// 指定された名前のワークシートが見つからなかったエラー
    ///
    /// 名前の一致は大文字小文字を区別する完全一致です。名前が一致しても
    /// セルを1つも持たないワークシートは「見つからない」として扱われます。
    /// このエラーが返った場合、クリップボードには何も書き込まれません。
    #[error("Worksheet '{name}' not found (or contains no cells)")]
    SheetNotFound {
        /// 要求されたワークシート名
        name: String,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `TablerBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、カスタム日付形式が不正な場合などです。
    #[error("Configuration error: {0}")]
    Config(String),

    /// システムクリップボードへの書き込みに失敗したエラー
    ///
    /// `#[from]`属性により、`arboard::Error`から自動的に変換されます。
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workbook_error() {
        let parse_err = calamine::Error::Msg("Invalid file format");
        let error: TablerError = parse_err.into();

        match error {
            TablerError::Workbook(e) => match e {
                calamine::Error::Msg(msg) => assert_eq!(msg, "Invalid file format"),
                _ => panic!("Expected Msg variant"),
            },
            _ => panic!("Expected Workbook error"),
        }
    }

    #[test]
    fn test_workbook_error_display() {
        let parse_err = calamine::Error::Msg("Corrupted file");
        let error: TablerError = parse_err.into();

        let error_msg = error.to_string();
        assert!(error_msg.contains("Failed to open workbook"));
        assert!(error_msg.contains("Corrupted file"));
    }

    #[test]
    fn test_sheet_not_found_display() {
        let error = TablerError::SheetNotFound {
            name: "Sheet2".to_string(),
        };

        let error_msg = error.to_string();
        assert!(error_msg.contains("Sheet2"));
        assert!(error_msg.contains("not found"));
    }

    #[test]
    fn test_config_error_display() {
        let error = TablerError::Config("Invalid date format: 'xyz'".to_string());
        let error_msg = error.to_string();

        assert!(error_msg.contains("Configuration error"));
        assert!(error_msg.contains("Invalid date format: 'xyz'"));
    }

    // エラー変換のテスト（?演算子の動作確認）
    #[test]
    fn test_error_conversion_with_question_mark() {
        fn open_operation() -> Result<(), TablerError> {
            let failed: Result<(), calamine::Error> = Err(calamine::Error::Msg("no such file"));
            failed?;
            Ok(())
        }

        let result = open_operation();
        assert!(matches!(result, Err(TablerError::Workbook(_))));
    }
}
