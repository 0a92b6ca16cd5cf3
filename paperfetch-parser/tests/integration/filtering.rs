//! Corpus filtering over parsed MEDLINE text

use paperfetch_parser::{filter_non_academic, parse_records};

const MIXED_CORPUS: &str = "
PMID- 12345678
TI  - COVID-19 mRNA Vaccine Study
DP  - 2024 Jan
AB  - This paper investigates...
AU  - Jane Doe
AD  - Pfizer Inc., NY, USA
EM  - jane.doe@pfizer.com

PMID- 33333333
TI  - Immune Response Study
DP  - 2023 Mar
AB  - No email here
AU  - Alice Johnson
AD  - University of Cambridge, UK

PMID- 44444444
TI  - T-cell memory in mice
DP  - 2022 Aug
AU  - Bob Stone
AD  - Department of Immunology, University of Toronto, Canada
";

#[test]
fn test_filter_returns_the_single_company_record() {
    let papers = parse_records(MIXED_CORPUS).unwrap();
    assert_eq!(papers.len(), 3);

    let filtered = filter_non_academic(&papers);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0], papers[0]);
    assert_eq!(filtered[0].id, "12345678");
}

#[test]
fn test_filter_is_stable_and_leaves_input_untouched() {
    let corpus = format!(
        "{MIXED_CORPUS}\nPMID- 55555555\nAD  - Roche Diagnostics GmbH, Penzberg, Germany\n"
    );
    let papers = parse_records(&corpus).unwrap();
    let before = papers.clone();

    let filtered = filter_non_academic(&papers);
    let ids: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["12345678", "55555555"]);
    assert_eq!(papers, before);
}

#[test]
fn test_nothing_survives_an_academic_corpus() {
    let papers = parse_records(
        "PMID- 1\nAD  - University of Tokyo\n\nPMID- 2\nAD  - ETH Zurich, Switzerland\n",
    )
    .unwrap();
    assert!(filter_non_academic(&papers).is_empty());
}
