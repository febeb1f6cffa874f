//! tabler CLI
//!
//! 指定したワークシートをMarkdown / HTMLテーブルへ変換し、
//! システムクリップボードへコピーするコマンドラインツール。
//!
//! ```text
//! tabler (md|html) <file-path> <worksheet-name>
//! ```
//!
//! 成功時は標準出力に何も出力しません。結果はクリップボードだけに
//! 書き込まれます。

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tabler::{copy_to_clipboard, OutputFormat, TablerBuilder, TablerError};

#[derive(Parser)]
#[command(name = "tabler")]
#[command(about = "Copy an Excel worksheet to the clipboard as a Markdown or HTML table")]
#[command(version)]
struct Cli {
    /// 出力フォーマット
    #[arg(value_enum)]
    format: Format,

    /// ワークブックファイルのパス
    file: PathBuf,

    /// 抽出するワークシート名（大文字小文字を区別する完全一致）
    worksheet: String,
}

/// CLIの出力フォーマットキー（`md` / `html`、大文字小文字を区別）
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// GitHub Flavored Markdown
    Md,
    /// HTMLテーブル
    Html,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Md => OutputFormat::Markdown,
            Format::Html => OutputFormat::Html,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        handle_error(error);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), TablerError> {
    let tabler = TablerBuilder::new()
        .with_output_format(cli.format.into())
        .build()?;

    let rendered = tabler.convert(&cli.file, &cli.worksheet)?;
    copy_to_clipboard(&rendered)?;

    Ok(())
}

fn handle_error(error: TablerError) {
    match error {
        TablerError::Workbook(parse_err) => {
            eprintln!("Workbook Error: {}", parse_err);
            eprintln!("Please check that the file exists and is a valid spreadsheet.");
        }
        TablerError::SheetNotFound { name } => {
            eprintln!(
                "Worksheet Error: no worksheet named '{}' with any cells was found.",
                name
            );
            eprintln!("Nothing was copied to the clipboard.");
        }
        TablerError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
        }
        TablerError::Clipboard(clip_err) => {
            eprintln!("Clipboard Error: {}", clip_err);
            eprintln!("The rendered table could not be placed on the system clipboard.");
        }
    }
}
