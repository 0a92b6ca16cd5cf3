//! MEDLINE parsing tests against an EFetch-style fixture
//!
//! The fixture mirrors the layout of `efetch.fcgi?db=pubmed&rettype=medline&retmode=text`
//! output: a leading blank line, four-column tags, wrapped continuation lines and
//! one affiliation line per author.

use paperfetch_parser::{NOT_AVAILABLE, ParseError, Paper, UNKNOWN, parse_records};
use rstest::rstest;
use tracing_test::traced_test;

const THREE_RECORDS: &str = include_str!("../test_data/medline/three_records.txt");

fn parse_fixture() -> Vec<Paper> {
    parse_records(THREE_RECORDS).expect("fixture should parse")
}

#[test]
#[traced_test]
fn test_fixture_yields_one_paper_per_record_in_order() {
    let papers = parse_fixture();
    let ids: Vec<&str> = papers.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["38012345", "38023456", "38034567"]);
}

#[test]
fn test_wrapped_title_and_abstract_are_normalized() {
    let papers = parse_fixture();
    assert_eq!(
        papers[0].title,
        "Durability of mRNA vaccine-induced antibody responses in older adults: a prospective cohort study."
    );
    assert!(papers[0].abstract_text.starts_with("Background: Waning immunity"));
    assert!(!papers[0].abstract_text.contains("  "));
    assert!(!papers[0].abstract_text.contains('\n'));
}

#[test]
fn test_company_record() {
    let paper = &parse_fixture()[0];

    assert_eq!(paper.publication_date, "2024 Jan");
    assert_eq!(paper.authors, vec!["Rivera A", "Okafor C", "Lindqvist K"]);

    // Only the Moderna affiliation matches a keyword
    assert_eq!(paper.company_affiliations.len(), 1);
    assert!(
        paper
            .company_affiliations
            .contains("Moderna Therapeutics, Cambridge, MA, USA.")
    );

    // Every author of the record is attributed, not only the Moderna author
    assert_eq!(paper.non_academic_authors.len(), 3);

    // No EM field and no address in the affiliations: the abstract supplies it
    assert_eq!(paper.corresponding_email, "clinical.team@modernatx.com");
}

#[test]
fn test_institute_keyword_flags_academic_research_institute() {
    let paper = &parse_fixture()[1];
    assert_eq!(
        paper.company_affiliations.iter().collect::<Vec<_>>(),
        vec!["Howard Hughes Medical Institute, Chevy Chase, MD, USA."]
    );
    assert_eq!(paper.corresponding_email, NOT_AVAILABLE);
    assert_eq!(paper.publication_date, "2023 Nov 30");
}

#[test]
fn test_academic_record_with_explicit_email() {
    let paper = &parse_fixture()[2];
    assert!(paper.company_affiliations.is_empty());
    assert!(paper.non_academic_authors.is_empty());
    assert_eq!(paper.corresponding_email, "omar.haddad@oncology.ox.ac.uk");
    assert_eq!(paper.abstract_text, "");
}

#[test]
fn test_sentinel_for_missing_identifier() {
    let papers = parse_records("TI  - Orphan record\nAU  - Anonymous\n").unwrap();
    assert_eq!(papers[0].id, UNKNOWN);
}

#[rstest]
#[case::html_error_page("<html><body>Service unavailable</body></html>")]
#[case::lowercase_tag("pmid- 123")]
#[case::missing_dash("PMID 123")]
fn test_malformed_payloads_are_rejected(#[case] raw: &str) {
    let err = parse_records(raw).unwrap_err();
    assert!(matches!(err, ParseError::MalformedLine { line: 1, .. }), "{err}");
}

#[test]
fn test_empty_payload_has_no_papers() {
    assert!(parse_records("\n\n").unwrap().is_empty());
}
