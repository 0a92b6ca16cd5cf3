//! CSV export of filtered papers
//!
//! The layout is fixed to six columns:
//!
//! ```text
//! PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),Corresponding Author Email
//! ```
//!
//! Author and affiliation sets are joined with `", "`. [`read_csv`] loads rows
//! back and [`CsvRow`] splits the joined columns again. Members that themselves
//! contain `", "` (most affiliation addresses) come back as several members.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use paperfetch_parser::Paper;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Column names, in order
pub const CSV_HEADER: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

const LIST_SEPARATOR: &str = ", ";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// One CSV row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Non-academic authors joined with `", "`
    #[serde(rename = "Non-academic Author(s)")]
    pub authors: String,
    /// Company affiliations joined with `", "`
    #[serde(rename = "Company Affiliation(s)")]
    pub affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl CsvRow {
    pub fn non_academic_authors(&self) -> BTreeSet<String> {
        split_list(&self.authors)
    }

    pub fn company_affiliations(&self) -> BTreeSet<String> {
        split_list(&self.affiliations)
    }
}

impl From<&Paper> for CsvRow {
    fn from(paper: &Paper) -> Self {
        Self {
            pubmed_id: paper.id.clone(),
            title: paper.title.clone(),
            publication_date: paper.publication_date.clone(),
            authors: join_list(&paper.non_academic_authors),
            affiliations: join_list(&paper.company_affiliations),
            corresponding_email: paper.corresponding_email.clone(),
        }
    }
}

fn join_list(values: &BTreeSet<String>) -> String {
    values
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

fn split_list(joined: &str) -> BTreeSet<String> {
    if joined.is_empty() {
        return BTreeSet::new();
    }
    joined.split(LIST_SEPARATOR).map(str::to_string).collect()
}

/// Write the header and one row per paper to `writer`
///
/// The header is written even when there are no papers.
pub fn write_csv<'a, I, W>(papers: I, writer: W) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Paper>,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for paper in papers {
        wtr.serialize(CsvRow::from(paper))?;
        rows += 1;
    }

    wtr.flush()?;
    debug!(rows, "Wrote CSV rows");
    Ok(rows)
}

/// Create (or truncate) `path` and write the papers to it
pub fn write_csv_file<'a, I, P>(papers: I, path: P) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a Paper>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path)?;
    let rows = write_csv(papers, file)?;
    info!(rows, path = %path.display(), "Saved CSV");
    Ok(rows)
}

/// Load rows written by [`write_csv`]
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<CsvRow>, ExportError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let rows = rdr
        .deserialize()
        .collect::<Result<Vec<CsvRow>, csv::Error>>()?;
    Ok(rows)
}
