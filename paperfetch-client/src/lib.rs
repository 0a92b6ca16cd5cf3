#![deny(
    clippy::panic,
    clippy::absolute_paths,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # paperfetch client
//!
//! Async clients used by paperfetch:
//!
//! - [`PubMedClient`] searches PubMed through ESearch and downloads MEDLINE
//!   text through EFetch, in batches of [`FETCH_BATCH_SIZE`] ids with a fixed
//!   pacing delay between batches.
//! - [`OllamaClient`] talks to a local Ollama service to summarize papers and
//!   answer questions about them; [`enrich_papers`] applies it to a list.
//!
//! ```no_run
//! use paperfetch_client::{ClientConfig, PubMedClient};
//! use paperfetch_parser::filter_non_academic;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new().with_email("researcher@university.edu");
//!     let client = PubMedClient::with_config(config)?;
//!
//!     let ids = client.search_articles("mRNA vaccine", 50).await?;
//!     let papers = client.fetch_papers(&ids).await?;
//!     let company_papers = filter_non_academic(&papers);
//!     println!("{} of {} papers have company affiliations", company_papers.len(), papers.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod enrich;
pub mod error;
pub mod ollama;
pub mod pacing;
pub mod pubmed;

// Re-export main types for convenience
pub use config::{ClientConfig, GenerationConfig};
pub use enrich::{enrich_paper, enrich_papers};
pub use error::{PaperFetchError, Result};
pub use ollama::OllamaClient;
pub use pacing::Pacer;
pub use pubmed::{FETCH_BATCH_SIZE, MAX_RETRIEVABLE, PubMedClient};
