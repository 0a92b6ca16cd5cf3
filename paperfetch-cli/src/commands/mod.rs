pub mod fetch;

use anyhow::{Context, Result};
use paperfetch_client::{ClientConfig, GenerationConfig, OllamaClient, PubMedClient};
use tracing::warn;

pub fn create_pubmed_client(
    api_key: Option<&str>,
    email: Option<&str>,
    tool: &str,
) -> Result<PubMedClient> {
    let mut config = ClientConfig::new().with_tool(tool);

    if let Some(key) = api_key {
        config = config.with_api_key(key);
    }

    match email {
        Some(email) => config = config.with_email(email),
        None => warn!("No contact email set (--email or NCBI_EMAIL); NCBI may throttle anonymous clients"),
    }

    PubMedClient::with_config(config).context("Failed to create PubMed client")
}

pub fn create_ollama_client(
    base_url: &str,
    model: &str,
    timeout_seconds: u64,
) -> Result<OllamaClient> {
    let config = GenerationConfig::new()
        .with_base_url(base_url)
        .with_model(model)
        .with_timeout_seconds(timeout_seconds);

    OllamaClient::with_config(config).context("Failed to create Ollama client")
}
