use anyhow::Result;
use test_utils::generated_text_fixture;

use super::build;
use super::generate_once;
use crate::domain::models::BackendBox;
use crate::domain::models::Language;
use crate::domain::models::VALIDATION_MESSAGE;
use crate::infrastructure::backends::huggingface::HuggingFace;

#[test]
fn it_builds_a_valid_command() {
    build().debug_assert();
}

#[test]
fn it_rejects_unknown_languages() {
    let res = build().try_get_matches_from(vec!["codemind", "--language", "cobol"]);
    assert!(res.is_err());
}

#[test]
fn it_accepts_known_models() -> Result<()> {
    let matches =
        build().try_get_matches_from(vec!["codemind", "generate", "hi", "-m", "bigcode/starcoder"])?;
    let (name, generate_matches) = matches.subcommand().unwrap();

    assert_eq!(name, "generate");
    assert_eq!(
        generate_matches.get_one::<String>("model"),
        Some(&"bigcode/starcoder".to_string())
    );

    return Ok(());
}

#[tokio::test]
async fn it_generates_once() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/bigcode/starcoder")
        .with_status(200)
        .with_body(generated_text_fixture("X"))
        .create_async()
        .await;

    let backend: BackendBox = Box::new(HuggingFace::new(&server.url(), "abc"));
    let output = generate_once(&backend, " hi ", Language::Html, "bigcode/starcoder").await?;

    mock.assert_async().await;
    assert_eq!(output, "X");

    return Ok(());
}

#[tokio::test]
async fn it_never_calls_out_for_blank_prompts() -> Result<()> {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let backend: BackendBox = Box::new(HuggingFace::new(&server.url(), "abc"));
    let res = generate_once(&backend, "   ", Language::Python, "bigcode/starcoder").await;

    mock.assert_async().await;
    assert_eq!(res.unwrap_err().to_string(), VALIDATION_MESSAGE);

    return Ok(());
}
