//! Integration tests for the Ollama client and paper enrichment
//!
//! The generate endpoint is served by wiremock; prompts are matched on the
//! JSON request body.

use paperfetch_client::ollama::{question_prompt, summary_prompt};
use paperfetch_client::{GenerationConfig, OllamaClient, PaperFetchError, enrich_papers};
use paperfetch_parser::parse_records;
use serde_json::json;
use tracing_test::traced_test;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TWO_PAPERS: &str = "PMID- 41000001
TI  - Lipid nanoparticle delivery of base editors
AB  - Base editors were delivered to hepatocytes.
AU  - Chen L
AD  - Beam Therapeutics, Cambridge, MA, USA.

PMID- 41000002
TI  - Off-target profiling of prime editing
AB  - Genome-wide profiling found few off-target edits.
AU  - Patel R
AD  - Prime Medicine Inc., Cambridge, MA, USA.
";

fn create_mock_client(mock_server: &MockServer) -> OllamaClient {
    let config = GenerationConfig::new()
        .with_base_url(mock_server.uri())
        .with_model("test-model")
        .with_timeout_seconds(5);
    OllamaClient::with_config(config).unwrap()
}

fn generated(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "test-model",
        "response": text,
        "done": true
    }))
}

#[tokio::test]
async fn test_generate_posts_non_streaming_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "model": "test-model",
            "prompt": "Say hello",
            "stream": false
        })))
        .respond_with(generated("  Hello!\n"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    assert_eq!(client.generate("Say hello").await.unwrap(), "Hello!");
}

#[tokio::test]
async fn test_generate_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(404).set_body_string("model 'test-model' not found"))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let err = client.generate("anything").await.unwrap_err();
    match err {
        PaperFetchError::ApiError { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("not found"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
#[traced_test]
async fn test_summary_failure_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    assert_eq!(client.summarize_paper("Title", "Abstract").await, None);
    assert!(logs_contain("Ollama generation failed"));
    assert!(logs_contain("Summarize"));
}

#[tokio::test]
async fn test_unreachable_service_yields_none() {
    // Nothing listens on the discard port
    let config = GenerationConfig::new()
        .with_base_url("http://127.0.0.1:9")
        .with_timeout_seconds(2);
    let client = OllamaClient::with_config(config).unwrap();

    assert_eq!(client.ask_question("content", "question?").await, None);
}

#[tokio::test]
async fn test_enrich_papers_with_summary_and_answer() {
    let mock_server = MockServer::start().await;
    let papers = parse_records(TWO_PAPERS).unwrap();

    for paper in &papers {
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(json!({
                "prompt": summary_prompt(&paper.title, &paper.abstract_text)
            })))
            .respond_with(generated(&format!("- summary of {}", paper.id)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let content = format!("{}\n\n{}", paper.title, paper.abstract_text);
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_partial_json(json!({
                "prompt": question_prompt(&content, "Which company is involved?")
            })))
            .respond_with(generated(&format!("answer for {}", paper.id)))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = create_mock_client(&mock_server);
    let enriched = enrich_papers(papers, &client, Some("Which company is involved?")).await;

    assert_eq!(enriched.len(), 2);
    assert_eq!(enriched[0].paper.id, "41000001");
    assert_eq!(
        enriched[0].enrichment.summary.as_deref(),
        Some("- summary of 41000001")
    );
    assert_eq!(
        enriched[1].enrichment.answer.as_deref(),
        Some("answer for 41000002")
    );
}

#[tokio::test]
async fn test_enrich_without_question_only_summarizes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(generated("- a summary"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = create_mock_client(&mock_server);
    let papers = parse_records(TWO_PAPERS).unwrap();
    let enriched = enrich_papers(papers, &client, None).await;

    assert!(enriched.iter().all(|e| e.enrichment.answer.is_none()));
    assert!(
        enriched
            .iter()
            .all(|e| e.enrichment.summary.as_deref() == Some("- a summary"))
    );
}
