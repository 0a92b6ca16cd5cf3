//! Console rendering of filtered papers

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ColumnConstraint, ContentArrangement, Table, Width};
use paperfetch_parser::{EnrichedPaper, NOT_AVAILABLE};

/// Heading printed above the results table
pub const TABLE_TITLE: &str = "Filtered PubMed Papers";

/// Printed instead of a table when there is nothing to show
pub const NO_PAPERS_MESSAGE: &str = "No non-academic papers found.";

const TITLE_MAX_CHARS: usize = 1000;
const TITLE_MAX_WIDTH: u16 = 60;
const COMPANIES_MAX_WIDTH: u16 = 30;

/// Render papers as a table with PMID, title, companies and email columns
///
/// Titles are cut to their first 1000 characters. A paper without company
/// affiliations shows `N/A` in the companies column.
pub fn render_table(papers: &[EnrichedPaper]) -> String {
    if papers.is_empty() {
        return NO_PAPERS_MESSAGE.to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["PMID", "Title", "Companies", "Email"]);

    for enriched in papers {
        let paper = &enriched.paper;
        let title: String = paper.title.chars().take(TITLE_MAX_CHARS).collect();
        let companies = if paper.company_affiliations.is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            paper
                .company_affiliations
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };

        table.add_row(vec![
            Cell::new(&paper.id).fg(Color::Cyan),
            Cell::new(title),
            Cell::new(companies).fg(Color::Magenta),
            Cell::new(&paper.corresponding_email).fg(Color::Green),
        ]);
    }

    if let Some(column) = table.column_mut(0) {
        column.set_constraint(ColumnConstraint::ContentWidth);
    }
    if let Some(column) = table.column_mut(1) {
        column.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(TITLE_MAX_WIDTH)));
    }
    if let Some(column) = table.column_mut(2) {
        column.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(
            COMPANIES_MAX_WIDTH,
        )));
    }

    format!("{TABLE_TITLE}\n{table}")
}

/// Render the summary and answer sections for enriched papers
///
/// Papers without generated text contribute nothing; the result is empty when
/// no paper was enriched.
pub fn render_enrichments(papers: &[EnrichedPaper]) -> String {
    let mut sections = Vec::new();

    for enriched in papers {
        let enrichment = &enriched.enrichment;

        if let Some(summary) = enrichment.summary.as_deref().filter(|s| !s.is_empty()) {
            sections.push(format!(
                "── Summary for {} ──\n{summary}",
                enriched.paper.id
            ));
        }
        if let Some(answer) = enrichment.answer.as_deref().filter(|a| !a.is_empty()) {
            sections.push(format!("Answer to your question: {answer}"));
        }
    }

    sections.join("\n\n")
}
