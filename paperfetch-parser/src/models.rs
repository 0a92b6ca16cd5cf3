use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Placeholder for a value that could not be found (e.g. no email in the record)
pub const NOT_AVAILABLE: &str = "N/A";

/// Placeholder for a missing identifier or publication date
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for a missing title
pub const UNTITLED: &str = "No Title";

/// A paper parsed from one MEDLINE record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// PubMed ID, or [`UNKNOWN`] when the record has no `PMID` field
    pub id: String,
    /// Whitespace-normalized title, or [`UNTITLED`]
    pub title: String,
    /// Publication date exactly as given in the `DP` field, or [`UNKNOWN`]
    pub publication_date: String,
    /// Whitespace-normalized abstract, possibly empty
    pub abstract_text: String,
    /// Authors in record order
    pub authors: Vec<String>,
    /// Every author of a record that has at least one non-academic affiliation
    pub non_academic_authors: BTreeSet<String>,
    /// Affiliations classified as non-academic
    pub company_affiliations: BTreeSet<String>,
    /// Corresponding author email, or [`NOT_AVAILABLE`]
    pub corresponding_email: String,
}

impl Paper {
    /// Whether at least one affiliation on this paper was classified non-academic
    pub fn has_company_affiliation(&self) -> bool {
        !self.company_affiliations.is_empty()
    }
}

/// Text generated for a paper by the language model
///
/// Both fields stay `None` when enrichment is disabled or the generation call
/// fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrichment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// A paper together with its display-only enrichment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedPaper {
    #[serde(flatten)]
    pub paper: Paper,
    #[serde(flatten)]
    pub enrichment: Enrichment,
}

impl EnrichedPaper {
    /// Wrap a paper without any generated text
    pub fn plain(paper: Paper) -> Self {
        Self {
            paper,
            enrichment: Enrichment::default(),
        }
    }
}

impl From<Paper> for EnrichedPaper {
    fn from(paper: Paper) -> Self {
        Self::plain(paper)
    }
}
