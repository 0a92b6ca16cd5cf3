//! Conversion of MEDLINE records into [`Paper`]s

use std::collections::BTreeSet;

use tracing::debug;

use crate::classify::matched_keyword;
use crate::error::Result;
use crate::medline::record::{MedlineRecord, parse_medline_records};
use crate::medline::tags;
use crate::models::{Paper, UNKNOWN, UNTITLED};
use crate::text::{extract_email_from_parts, normalize};

/// Parse raw MEDLINE text into papers, one per record, in input order
///
/// # Errors
///
/// Returns a [`ParseError`](crate::error::ParseError) when the text does not
/// follow the MEDLINE line grammar. Missing fields never cause an error; they
/// take their default values instead.
///
/// # Example
///
/// ```
/// use paperfetch_parser::parse_records;
///
/// let raw = "PMID- 22222222\nTI  - Vaccine Efficacy Results\nDP  - 2024 Feb\nAB  - Email: support@vaccinebio.com\nAU  - John Smith\nAD  - VaccineBio Inc., California\n";
/// let papers = parse_records(raw).unwrap();
/// assert_eq!(papers[0].corresponding_email, "support@vaccinebio.com");
/// assert!(papers[0].non_academic_authors.contains("John Smith"));
/// ```
pub fn parse_records(raw: &str) -> Result<Vec<Paper>> {
    let records = parse_medline_records(raw)?;
    let papers: Vec<Paper> = records.iter().map(paper_from_record).collect();

    debug!(
        papers = papers.len(),
        with_company = papers.iter().filter(|p| p.has_company_affiliation()).count(),
        "Parsed MEDLINE records"
    );

    Ok(papers)
}

/// Build a [`Paper`] from a single MEDLINE record
///
/// Every affiliation is classified on its own. When any of them is non-academic,
/// all authors of the record are counted as non-academic authors, since MEDLINE
/// does not reliably tie affiliations to individual authors.
pub fn paper_from_record(record: &MedlineRecord) -> Paper {
    let id = record
        .text(tags::PMID)
        .filter(|pmid| !pmid.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let title = record
        .text(tags::TITLE)
        .map(|title| normalize(&title))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| UNTITLED.to_string());

    let publication_date = record
        .text(tags::PUBLICATION_DATE)
        .filter(|date| !date.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let raw_abstract = record.text(tags::ABSTRACT);
    let abstract_text = raw_abstract.as_deref().map(normalize).unwrap_or_default();

    let authors = record.values(tags::AUTHOR);
    let affiliations = record.values(tags::AFFILIATION);

    let mut non_academic_authors = BTreeSet::new();
    let mut company_affiliations = BTreeSet::new();

    for affiliation in &affiliations {
        if let Some(keyword) = matched_keyword(affiliation) {
            debug!(pmid = %id, keyword, affiliation = %affiliation, "Non-academic affiliation");
            company_affiliations.insert(affiliation.clone());
            non_academic_authors.extend(authors.iter().cloned());
        }
    }

    let corresponding_email = explicit_email(record).unwrap_or_else(|| {
        let fallback = affiliations
            .iter()
            .cloned()
            .chain(record.values(tags::INVESTIGATOR))
            .chain(raw_abstract);
        extract_email_from_parts(fallback)
    });

    Paper {
        id,
        title,
        publication_date,
        abstract_text,
        authors,
        non_academic_authors,
        company_affiliations,
        corresponding_email,
    }
}

/// First non-empty value of the `EM` field
fn explicit_email(record: &MedlineRecord) -> Option<String> {
    record.get(tags::EMAIL).and_then(|field| {
        field
            .values()
            .into_iter()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(str::to_string)
    })
}
