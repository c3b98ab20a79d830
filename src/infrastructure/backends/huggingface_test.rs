use anyhow::Result;
use mockito::Matcher;
use serde_json::json;
use test_utils::generated_text_fixture;
use test_utils::inference_error_fixture;

use super::HuggingFace;
use crate::domain::models::Backend;
use crate::domain::models::GenerationOutcome;
use crate::domain::models::GenerationPrompt;
use crate::domain::models::Language;

fn prompt() -> GenerationPrompt {
    return GenerationPrompt::new(
        "Write a factorial function",
        Language::Python,
        "tiiuae/falcon-7b-instruct",
    );
}

#[tokio::test]
async fn it_gets_completions() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/tiiuae/falcon-7b-instruct")
        .match_header("authorization", "Bearer abc")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "inputs": "Write a factorial function in Python"
        })))
        .with_status(200)
        .with_body(generated_text_fixture("def factorial(n): ..."))
        .create_async()
        .await;

    let backend = HuggingFace::new(&server.url(), "abc");
    let res = backend.get_completion(&prompt()).await?;

    mock.assert_async().await;
    assert_eq!(
        res,
        GenerationOutcome::Generated("def factorial(n): ...".to_string())
    );

    return Ok(());
}

#[tokio::test]
async fn it_targets_the_selected_model() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/bigcode/starcoder")
        .with_status(200)
        .with_body(generated_text_fixture("console.log(1);"))
        .create_async()
        .await;

    let backend = HuggingFace::new(&format!("{}/", server.url()), "abc");
    let res = backend
        .get_completion(&GenerationPrompt::new(
            "Log one",
            Language::JavaScript,
            "bigcode/starcoder",
        ))
        .await?;

    mock.assert_async().await;
    assert_eq!(
        res,
        GenerationOutcome::Generated("console.log(1);".to_string())
    );

    return Ok(());
}

#[tokio::test]
async fn it_reads_errors_from_non_success_responses() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/tiiuae/falcon-7b-instruct")
        .with_status(503)
        .with_body(inference_error_fixture("Model is currently loading"))
        .create_async()
        .await;

    let backend = HuggingFace::new(&server.url(), "");
    let res = backend.get_completion(&prompt()).await?;

    mock.assert_async().await;
    assert_eq!(
        res,
        GenerationOutcome::RemoteError("Model is currently loading".to_string())
    );

    return Ok(());
}

#[tokio::test]
async fn it_reports_missing_text() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/tiiuae/falcon-7b-instruct")
        .with_status(200)
        .with_body("[{\"summary_text\": \"not what we asked for\"}]")
        .create_async()
        .await;

    let backend = HuggingFace::new(&server.url(), "abc");
    let res = backend.get_completion(&prompt()).await?;

    mock.assert_async().await;
    assert_eq!(res, GenerationOutcome::Missing);

    return Ok(());
}

#[tokio::test]
async fn it_fails_on_non_json_bodies() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/tiiuae/falcon-7b-instruct")
        .with_status(502)
        .with_body("<html>Bad Gateway</html>")
        .create_async()
        .await;

    let backend = HuggingFace::new(&server.url(), "abc");
    let res = backend.get_completion(&prompt()).await;

    mock.assert_async().await;
    assert!(res.is_err());

    return Ok(());
}

#[tokio::test]
async fn it_fails_when_unreachable() {
    let backend = HuggingFace::new("http://127.0.0.1:1", "abc");
    let res = backend.get_completion(&prompt()).await;

    assert!(res.is_err());
}
