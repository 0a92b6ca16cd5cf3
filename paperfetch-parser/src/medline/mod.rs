//! MEDLINE (`rettype=medline`) text format
//!
//! Parsing happens in two steps. [`parse_medline_records`] splits the raw text
//! into tag/value [`MedlineRecord`]s, and [`paper_from_record`] turns one record
//! into a [`Paper`](crate::models::Paper) by applying normalization,
//! affiliation classification and email resolution. [`parse_records`] runs both.

pub mod paper;
pub mod record;
pub mod tags;

pub use paper::{paper_from_record, parse_records};
pub use record::{FieldValue, MedlineRecord, parse_medline_records};
