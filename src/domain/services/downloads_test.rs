use anyhow::Result;
use test_utils::multiline_output_fixture;

use super::Downloads;
use crate::domain::models::Language;

#[tokio::test]
async fn it_saves_output_named_by_language() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let downloads = Downloads::new(dir.path().to_path_buf());

    let saved = downloads
        .save(Language::Python, multiline_output_fixture())
        .await?;

    let file_path = dir.path().join("python_codemind_code.txt");
    assert_eq!(saved, Some(file_path.clone()));
    assert_eq!(
        std::fs::read_to_string(file_path)?,
        multiline_output_fixture()
    );

    return Ok(());
}

#[tokio::test]
async fn it_creates_missing_directories() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let downloads = Downloads::new(dir.path().join("nested/downloads"));

    let saved = downloads.save(Language::Html, "<p>hi</p>").await?;

    assert!(saved.is_some());
    assert!(dir
        .path()
        .join("nested/downloads/html_codemind_code.txt")
        .exists());

    return Ok(());
}

#[tokio::test]
async fn it_skips_empty_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let downloads = Downloads::new(dir.path().join("unused"));

    let saved = downloads.save(Language::Java, "").await?;

    assert_eq!(saved, None);
    assert!(!dir.path().join("unused").exists());

    return Ok(());
}
