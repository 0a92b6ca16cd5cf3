#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # paperfetch formatter
//!
//! Output for filtered papers:
//!
//! - **Console table**: a colored comfy-table listing with optional summary and
//!   answer sections for enriched papers
//! - **CSV export**: a fixed six-column layout, plus a reader that loads the
//!   rows back

pub mod csv_export;
pub mod table;

// Re-export main types for convenience
pub use csv_export::{CSV_HEADER, CsvRow, ExportError, read_csv, write_csv, write_csv_file};
pub use table::{NO_PAPERS_MESSAGE, TABLE_TITLE, render_enrichments, render_table};
