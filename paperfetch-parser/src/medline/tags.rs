//! MEDLINE field tags read by the parser

/// PubMed unique identifier
pub const PMID: &str = "PMID";
/// Title
pub const TITLE: &str = "TI";
/// Date of publication
pub const PUBLICATION_DATE: &str = "DP";
/// Abstract
pub const ABSTRACT: &str = "AB";
/// Author (one line per author)
pub const AUTHOR: &str = "AU";
/// Affiliation (may appear once or once per author)
pub const AFFILIATION: &str = "AD";
/// Corresponding author email
pub const EMAIL: &str = "EM";
/// Investigator / registry text, scanned for emails as a fallback
pub const INVESTIGATOR: &str = "IR";
