use paperfetch_parser::{Paper, parse_records};
use reqwest::{Client, Response};
use tracing::{debug, info, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{PaperFetchError, Result};
use crate::pacing::Pacer;
use crate::pubmed::responses::ESearchResult;

/// Number of ids sent in one EFetch request
pub const FETCH_BATCH_SIZE: usize = 10;

/// Largest `retmax` ESearch honours
pub const MAX_RETRIEVABLE: usize = 9999;

/// Client for the PubMed E-utilities (ESearch and EFetch)
#[derive(Clone)]
pub struct PubMedClient {
    client: Client,
    base_url: String,
    config: ClientConfig,
}

impl PubMedClient {
    /// Create a new PubMed client with custom configuration
    ///
    /// # Errors
    ///
    /// * `PaperFetchError::RequestError` - If the HTTP client cannot be built
    ///
    /// # Example
    ///
    /// ```
    /// use paperfetch_client::{ClientConfig, PubMedClient};
    ///
    /// let config = ClientConfig::new()
    ///     .with_email("researcher@university.edu")
    ///     .with_tool("paperfetch");
    ///
    /// let client = PubMedClient::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(config.timeout)
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create a PubMed client around an existing HTTP client
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        let base_url = config.effective_base_url().to_string();
        Self {
            client,
            base_url,
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search PubMed and return matching PMIDs in relevance order
    ///
    /// # Arguments
    ///
    /// * `query` - Search query string, sent verbatim (URL-encoded)
    /// * `limit` - Maximum number of ids to return (`retmax`)
    ///
    /// # Errors
    ///
    /// * `PaperFetchError::SearchLimitExceeded` - If `limit` is above [`MAX_RETRIEVABLE`]
    /// * `PaperFetchError::ApiError` - On a non-success status or an `ERROR` field in the body
    /// * `PaperFetchError::RequestError` - If the HTTP request fails
    /// * `PaperFetchError::JsonError` - If the body is not ESearch JSON
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paperfetch_client::{ClientConfig, PubMedClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::with_config(ClientConfig::new())?;
    ///     let pmids = client.search_articles("crispr therapy", 100).await?;
    ///     println!("Found {} articles", pmids.len());
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self), fields(query = %query, limit = limit))]
    pub async fn search_articles(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        if limit > MAX_RETRIEVABLE {
            return Err(PaperFetchError::SearchLimitExceeded {
                requested: limit,
                maximum: MAX_RETRIEVABLE,
            });
        }

        if query.trim().is_empty() {
            debug!("Empty query provided, returning empty results");
            return Ok(Vec::new());
        }

        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retmode=json",
            self.base_url,
            urlencoding::encode(query),
            limit
        );

        debug!("Making ESearch API request");
        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        // NCBI sometimes answers 200 OK with an ERROR field
        if let Some(error_msg) = &search_result.esearchresult.error {
            return Err(PaperFetchError::ApiError {
                status: 200,
                message: format!("NCBI ESearch API error: {error_msg}"),
            });
        }

        let ids = search_result.esearchresult.idlist;
        info!(
            results_found = ids.len(),
            total_count = search_result.esearchresult.count.as_deref().unwrap_or("0"),
            query_translation = search_result
                .esearchresult
                .querytranslation
                .as_deref()
                .unwrap_or(""),
            "Search completed"
        );
        Ok(ids)
    }

    /// Fetch raw MEDLINE text for `ids` in a single EFetch request
    ///
    /// # Errors
    ///
    /// * `PaperFetchError::InvalidPmid` - If an id is not a decimal number
    /// * `PaperFetchError::ApiError` - On a non-success status
    /// * `PaperFetchError::RequestError` - If the HTTP request fails
    #[instrument(skip(self, ids), fields(batch_size = ids.len()))]
    pub async fn fetch_medline<S: AsRef<str>>(&self, ids: &[S]) -> Result<String> {
        if ids.is_empty() {
            return Ok(String::new());
        }
        validate_ids(ids)?;

        let id_list = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&rettype=medline&retmode=text",
            self.base_url, id_list
        );

        debug!("Making EFetch API request");
        let response = self.make_request(&url).await?;
        Ok(response.text().await?)
    }

    /// Fetch and parse papers for `ids`, [`FETCH_BATCH_SIZE`] ids per request
    ///
    /// Batches are requested one after another with `config.batch_delay`
    /// between consecutive requests. A batch whose request fails, or whose body
    /// is not valid MEDLINE text, is logged and skipped, so the result may hold
    /// fewer papers than ids. Papers keep the order EFetch returns them in.
    ///
    /// # Errors
    ///
    /// * `PaperFetchError::InvalidPmid` - If any id is not a decimal number (checked before any request)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use paperfetch_client::{ClientConfig, PubMedClient};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PubMedClient::with_config(ClientConfig::new())?;
    ///     let papers = client.fetch_papers(&["31978945", "33515491"]).await?;
    ///     for paper in &papers {
    ///         println!("{}: {}", paper.id, paper.title);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    #[instrument(skip(self, ids), fields(ids_count = ids.len()))]
    pub async fn fetch_papers<S: AsRef<str>>(&self, ids: &[S]) -> Result<Vec<Paper>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        validate_ids(ids)?;

        let mut pacer = Pacer::new(self.config.batch_delay);
        let mut papers = Vec::with_capacity(ids.len());

        for (batch_index, batch) in ids.chunks(FETCH_BATCH_SIZE).enumerate() {
            pacer.wait().await;

            let raw = match self.fetch_medline(batch).await {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(
                        batch = batch_index,
                        batch_size = batch.len(),
                        error = %e,
                        "EFetch request failed, skipping batch"
                    );
                    continue;
                }
            };

            let parsed = match parse_records(&raw) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!(
                        batch = batch_index,
                        batch_size = batch.len(),
                        error = %e,
                        "EFetch batch is not valid MEDLINE, skipping batch"
                    );
                    continue;
                }
            };
            debug!(batch = batch_index, parsed = parsed.len(), "Parsed EFetch batch");
            papers.extend(parsed);
        }

        info!(requested = ids.len(), parsed = papers.len(), "Fetch completed");
        Ok(papers)
    }

    async fn make_request(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(PaperFetchError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

fn validate_ids<S: AsRef<str>>(ids: &[S]) -> Result<()> {
    match ids
        .iter()
        .map(AsRef::as_ref)
        .find(|id| id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()))
    {
        Some(bad) => Err(PaperFetchError::InvalidPmid {
            pmid: bad.to_string(),
        }),
        None => Ok(()),
    }
}
