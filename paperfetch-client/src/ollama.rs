//! Client for a local Ollama text-generation service
//!
//! Generation is best effort: [`OllamaClient::summarize_paper`] and
//! [`OllamaClient::ask_question`] log failures and return `None` so that a
//! missing or slow model never aborts a run.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::GenerationConfig;
use crate::error::{PaperFetchError, Result};

const SUMMARIZE_TASK: &str = "Summarize";
const QUESTION_TASK: &str = "Q&A";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

/// Prompt asking for a three-bullet summary of a paper
pub fn summary_prompt(title: &str, abstract_text: &str) -> String {
    format!(
        "Summarize the following research paper in 3 bullet points.\n\nTitle: {title}\n\nAbstract: {abstract_text}\n\nSummary:\n"
    )
}

/// Prompt asking a free-form question about a paper
pub fn question_prompt(content: &str, question: &str) -> String {
    format!("Paper Content:\n\n{content}\n\nQuestion: {question}\n\nAnswer:")
}

#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    config: GenerationConfig,
}

impl OllamaClient {
    /// # Errors
    ///
    /// * `PaperFetchError::RequestError` - If the HTTP client cannot be built
    pub fn with_config(config: GenerationConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Send one non-streaming generation request and return the trimmed text
    ///
    /// # Errors
    ///
    /// * `PaperFetchError::RequestError` - Transport failure or timeout
    /// * `PaperFetchError::ApiError` - Non-success status from the service
    /// * `PaperFetchError::JsonError` - Body is not a generation response
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.config.generate_url())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PaperFetchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let generated: GenerateResponse = serde_json::from_str(&body)?;
        debug!(response_len = generated.response.len(), "Generation completed");

        Ok(generated.response.trim().to_string())
    }

    /// Three-bullet summary of a paper, `None` if generation fails
    pub async fn summarize_paper(&self, title: &str, abstract_text: &str) -> Option<String> {
        self.generate_for(SUMMARIZE_TASK, &summary_prompt(title, abstract_text))
            .await
    }

    /// Answer to `question` about `content`, `None` if generation fails
    pub async fn ask_question(&self, content: &str, question: &str) -> Option<String> {
        self.generate_for(QUESTION_TASK, &question_prompt(content, question))
            .await
    }

    async fn generate_for(&self, task: &str, prompt: &str) -> Option<String> {
        match self.generate(prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(task, error = %e, "Ollama generation failed");
                None
            }
        }
    }
}
