use std::io;

use anyhow::Result;
use clap::Parser;
use paperfetch_client::config::DEFAULT_TOOL;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "paperfetch",
    version,
    about = "Find PubMed papers with authors from pharmaceutical or biotech companies",
    long_about = "Searches PubMed, keeps the papers with at least one non-academic (company) \
                  affiliation and prints them as a table or saves them as CSV. Papers can \
                  optionally be summarized by a local Ollama model."
)]
struct Cli {
    #[command(flatten)]
    fetch: commands::fetch::Fetch,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = DEFAULT_TOOL)]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with indicatif layer for progress bars
    let filter = if cli.debug { "debug" } else { "info" };

    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let pubmed =
        commands::create_pubmed_client(cli.api_key.as_deref(), cli.email.as_deref(), &cli.tool)?;
    let ollama = cli.fetch.ollama_client()?;

    let mut stdout = io::stdout();
    cli.fetch.execute(&pubmed, ollama.as_ref(), &mut stdout).await
}
