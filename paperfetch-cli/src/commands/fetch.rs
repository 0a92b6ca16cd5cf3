use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use paperfetch_client::config::{DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL};
use paperfetch_client::{MAX_RETRIEVABLE, OllamaClient, PubMedClient, enrich_paper};
use paperfetch_formatter::{render_enrichments, render_table, write_csv_file};
use paperfetch_parser::{EnrichedPaper, Paper, filter_non_academic};
use tracing::{debug, error, info};

use super::create_ollama_client;

/// Ids requested from ESearch per paper the user asked for
const SEARCH_OVERFETCH: usize = 5;

#[derive(Args, Debug)]
pub struct Fetch {
    /// PubMed search query
    #[arg(value_name = "QUERY")]
    query: String,

    /// Save results to this CSV file instead of printing a table
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Maximum number of papers to show
    #[arg(short, long, default_value_t = 20)]
    limit: usize,

    /// Summarize each paper with a local Ollama model
    #[arg(long)]
    use_ollama: bool,

    /// Ask a question about each paper (requires --use-ollama)
    #[arg(long, value_name = "QUESTION", requires = "use_ollama")]
    ask: Option<String>,

    /// Ollama base URL
    #[arg(long, env = "OLLAMA_URL", default_value = DEFAULT_OLLAMA_URL)]
    ollama_url: String,

    /// Ollama model name
    #[arg(long, env = "OLLAMA_MODEL", default_value = DEFAULT_OLLAMA_MODEL)]
    ollama_model: String,

    /// Ollama request timeout in seconds
    #[arg(long, default_value_t = 90)]
    ollama_timeout: u64,
}

impl Fetch {
    /// Ollama client when enrichment was requested
    pub fn ollama_client(&self) -> Result<Option<OllamaClient>> {
        if !self.use_ollama {
            return Ok(None);
        }
        create_ollama_client(&self.ollama_url, &self.ollama_model, self.ollama_timeout).map(Some)
    }

    /// Search, fetch, filter, optionally enrich, then print or save
    pub async fn execute<W: Write>(
        &self,
        pubmed: &PubMedClient,
        ollama: Option<&OllamaClient>,
        out: &mut W,
    ) -> Result<()> {
        let search_limit = self
            .limit
            .saturating_mul(SEARCH_OVERFETCH)
            .min(MAX_RETRIEVABLE);

        let ids = match pubmed.search_articles(&self.query, search_limit).await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "PubMed search failed");
                Vec::new()
            }
        };

        if ids.is_empty() {
            writeln!(out, "No results found.")?;
            return Ok(());
        }

        let papers = pubmed
            .fetch_papers(&ids)
            .await
            .context("Failed to fetch papers")?;
        let mut filtered = filter_non_academic(&papers);
        info!(
            fetched = papers.len(),
            non_academic = filtered.len(),
            "Filtered papers"
        );

        if filtered.is_empty() {
            writeln!(out, "No matching non-academic papers after filtering.")?;
            return Ok(());
        }

        filtered.truncate(self.limit);

        let enriched = match ollama {
            Some(client) => self.enrich(filtered, client).await?,
            None => filtered.into_iter().map(EnrichedPaper::from).collect(),
        };

        match &self.file {
            Some(path) => {
                write_csv_file(enriched.iter().map(|e| &e.paper), path)
                    .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
                writeln!(out, "Results saved to {}", path.display())?;
            }
            None => {
                writeln!(out, "{}", render_table(&enriched))?;
                let sections = render_enrichments(&enriched);
                if !sections.is_empty() {
                    writeln!(out, "\n{sections}")?;
                }
            }
        }

        Ok(())
    }

    async fn enrich(
        &self,
        papers: Vec<Paper>,
        client: &OllamaClient,
    ) -> Result<Vec<EnrichedPaper>> {
        let pb = ProgressBar::new(papers.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} papers ({msg})")
                .context("Failed to set progress bar style")?
                .progress_chars("#>-"),
        );

        let mut enriched = Vec::with_capacity(papers.len());
        for paper in papers {
            pb.set_message(format!("Summarizing {}", paper.id));
            debug!(pmid = %paper.id, "Enriching paper");
            enriched.push(enrich_paper(paper, client, self.ask.as_deref()).await);
            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(enriched)
    }
}
