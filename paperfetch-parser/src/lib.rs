#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # paperfetch parser
//!
//! MEDLINE record parsing and the heuristics layered on top of it.
//!
//! This crate is pure and synchronous: it turns the text returned by PubMed's
//! EFetch endpoint (`rettype=medline&retmode=text`) into [`Paper`] values,
//! classifies each affiliation as academic or non-academic, resolves a
//! corresponding-author email and filters a corpus down to papers with at least
//! one company affiliation. It has no network dependencies.
//!
//! ```
//! use paperfetch_parser::{filter_non_academic, parse_records};
//!
//! let raw = "PMID- 12345678\nTI  - mRNA vaccine study\nAU  - Doe J\nAD  - Pfizer Inc., NY, USA\n";
//! let papers = parse_records(raw).unwrap();
//! let company_papers = filter_non_academic(&papers);
//! assert_eq!(company_papers.len(), 1);
//! assert!(company_papers[0].company_affiliations.contains("Pfizer Inc., NY, USA"));
//! ```

pub mod classify;
pub mod error;
pub mod filter;
pub mod medline;
pub mod models;
pub mod text;

// Re-export main types for convenience
pub use classify::{NON_ACADEMIC_KEYWORDS, is_non_academic};
pub use error::{ParseError, Result};
pub use filter::filter_non_academic;
pub use medline::{FieldValue, MedlineRecord, paper_from_record, parse_medline_records, parse_records};
pub use models::{EnrichedPaper, Enrichment, NOT_AVAILABLE, Paper, UNKNOWN, UNTITLED};
pub use text::{extract_email, extract_email_from_parts, find_email, normalize};
