//! Clipboard Module
//!
//! システムクリップボードへの書き込みを提供するモジュール。
//! コアの変換処理はこのモジュールに依存せず、ドライバーだけが使用します。

use arboard::Clipboard;

use crate::error::TablerError;

/// テキストをシステムクリップボードへ書き込む
///
/// # 引数
///
/// * `text` - 書き込むテキスト（レンダリング済みのテーブル文字列）
///
/// # 戻り値
///
/// * `Ok(())` - 書き込みに成功した場合
/// * `Err(TablerError::Clipboard)` - クリップボードが利用できない場合
///   （ヘッドレス環境など）
///
/// # 注意
///
/// X11環境ではクリップボードの内容は提供元プロセスが保持するため、
/// 書き込み直後にプロセスが終了するとペーストできない場合があります。
pub fn copy_to_clipboard(text: &str) -> Result<(), TablerError> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
