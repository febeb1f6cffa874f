//! tabler - Copy an Excel worksheet as a Markdown or HTML table
//!
//! This crate extracts a single named worksheet from a workbook file and
//! renders it as a GitHub-flavored Markdown or HTML table, ready to be
//! placed on the system clipboard.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabler::{copy_to_clipboard, TablerBuilder};
//!
//! fn main() -> Result<(), tabler::TablerError> {
//!     // Create a converter with default settings (Markdown output)
//!     let tabler = TablerBuilder::new().build()?;
//!
//!     // Extract the worksheet and render it
//!     let markdown = tabler.convert("inventory.xlsx", "Sheet1")?;
//!
//!     // Place the result on the system clipboard
//!     copy_to_clipboard(&markdown)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # HTML Output
//!
//! ```rust,no_run
//! use tabler::{OutputFormat, TablerBuilder};
//!
//! # fn main() -> Result<(), tabler::TablerError> {
//! let tabler = TablerBuilder::new()
//!     .with_output_format(OutputFormat::Html)
//!     .build()?;
//! let html = tabler.convert("inventory.xlsx", "Prices")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Missing Worksheets
//!
//! A worksheet that does not exist, or exists but contains no cells, is
//! reported as [`TablerError::SheetNotFound`] by [`Tabler::convert`].
//! [`Tabler::extract`] exposes the same condition as `Ok(None)` for callers
//! that want to handle it themselves.

mod api;
mod builder;
mod clipboard;
mod error;
mod extractor;
mod formatter;
mod render;
mod types;

// 公開API
pub use api::{DateFormat, OutputFormat};
pub use builder::{Tabler, TablerBuilder};
pub use clipboard::copy_to_clipboard;
pub use error::TablerError;
pub use types::Table;
