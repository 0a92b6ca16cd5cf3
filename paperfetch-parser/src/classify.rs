//! Keyword heuristic for academic vs. non-academic affiliations
//!
//! The keyword list is deliberately coarse. Words such as "institute" and
//! "research" appear in many academic affiliations, and short keywords such as
//! "inc" match inside unrelated words ("Princeton"). Changing the list changes
//! which papers survive filtering, so treat any edit as a policy change.

/// Substrings that mark an affiliation as non-academic (matched case-insensitively)
pub const NON_ACADEMIC_KEYWORDS: &[&str] = &[
    "pharma",
    "pharmaceutical",
    "biotech",
    "inc",
    "ltd",
    "gmbh",
    "llc",
    "corp",
    "company",
    "industries",
    "research",
    "solutions",
    "biosciences",
    "laboratories",
    "clinic",
    "medtech",
    "institute",
    "diagnostic",
    "therapeutics",
    "medical center",
];

/// Return the first keyword from [`NON_ACADEMIC_KEYWORDS`] found in `affiliation`
pub fn matched_keyword(affiliation: &str) -> Option<&'static str> {
    let lower = affiliation.to_lowercase();
    NON_ACADEMIC_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lower.contains(keyword))
}

/// Check whether an affiliation likely belongs to a non-academic organisation
///
/// # Example
///
/// ```
/// use paperfetch_parser::is_non_academic;
///
/// assert!(is_non_academic("Pfizer Inc., New York, USA"));
/// assert!(!is_non_academic("University of California, Berkeley, USA"));
/// ```
pub fn is_non_academic(affiliation: &str) -> bool {
    matched_keyword(affiliation).is_some()
}
