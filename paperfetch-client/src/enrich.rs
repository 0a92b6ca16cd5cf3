use paperfetch_parser::{EnrichedPaper, Enrichment, Paper};
use tracing::{debug, instrument};

use crate::ollama::OllamaClient;

/// Text handed to the model when answering a question about a paper
pub fn paper_content(paper: &Paper) -> String {
    format!("{}\n\n{}", paper.title, paper.abstract_text)
}

/// Attach a generated summary, and an answer when `question` is given
///
/// Generation failures leave the corresponding field `None`; the paper itself
/// is passed through unchanged.
#[instrument(skip(paper, client, question), fields(pmid = %paper.id))]
pub async fn enrich_paper(
    paper: Paper,
    client: &OllamaClient,
    question: Option<&str>,
) -> EnrichedPaper {
    let summary = client
        .summarize_paper(&paper.title, &paper.abstract_text)
        .await;

    let answer = match question {
        Some(question) => client.ask_question(&paper_content(&paper), question).await,
        None => None,
    };

    debug!(
        has_summary = summary.is_some(),
        has_answer = answer.is_some(),
        "Enriched paper"
    );

    EnrichedPaper {
        paper,
        enrichment: Enrichment { summary, answer },
    }
}

/// Enrich papers one after another, keeping their order
pub async fn enrich_papers(
    papers: Vec<Paper>,
    client: &OllamaClient,
    question: Option<&str>,
) -> Vec<EnrichedPaper> {
    let mut enriched = Vec::with_capacity(papers.len());
    for paper in papers {
        enriched.push(enrich_paper(paper, client, question).await);
    }
    enriched
}
