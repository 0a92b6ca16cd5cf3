use crate::models::Paper;

/// Keep papers with at least one non-academic affiliation
///
/// The relative order of the input is preserved and the input is left untouched.
pub fn filter_non_academic(papers: &[Paper]) -> Vec<Paper> {
    papers
        .iter()
        .filter(|paper| paper.has_company_affiliation())
        .cloned()
        .collect()
}
