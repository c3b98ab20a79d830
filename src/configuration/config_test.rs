use std::env;
use std::path;

use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() -> Result<()> {
    let res = Config::serialize_default(cli::build());
    let doc = res.parse::<toml_edit::Document>()?;

    assert_eq!(doc.get("language").and_then(|e| return e.as_str()), Some("python"));
    assert_eq!(
        doc.get("model").and_then(|e| return e.as_str()),
        Some("tiiuae/falcon-7b-instruct")
    );
    assert!(doc.get("api-key").is_none());
    assert!(doc.get("config-file").is_none());
    assert!(res.contains("# api-key = \"\""));
    assert!(res.contains("[possible values: python, javascript, java, cpp, html]"));

    return Ok(());
}

#[test]
fn it_uses_kebab_case_keys() {
    assert_eq!(ConfigKey::ApiKey.to_string(), "api-key");
    assert_eq!(ConfigKey::InferenceURL.to_string(), "inference-url");
    assert_eq!(ConfigKey::PreferencesFile.to_string(), "preferences-file");
}

#[test]
fn it_defaults_to_the_hosted_inference_api() {
    assert_eq!(
        Config::default(ConfigKey::InferenceURL),
        "https://api-inference.huggingface.co"
    );
    assert_eq!(Config::default(ConfigKey::Model), "tiiuae/falcon-7b-instruct");
    assert!(Config::default(ConfigKey::ApiKey).is_empty());
}

#[tokio::test]
async fn it_loads_and_validates_config_files() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["codemind", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::DownloadDir), "./downloads");
    assert_eq!(
        Config::get(ConfigKey::InferenceURL),
        "https://api-inference.huggingface.co"
    );
    assert_eq!(Config::get(ConfigKey::Model), "tiiuae/falcon-7b-instruct");

    // Both loads share the global config, so they run in one test.
    let matches =
        cli::build().try_get_matches_from(vec!["codemind", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());

    return Ok(());
}

#[test]
fn it_honours_the_log_dir_override() {
    env::set_var("CODEMIND_LOG_DIR", "/var/log/codemind-test");
    assert_eq!(
        Config::log_dir(),
        path::PathBuf::from("/var/log/codemind-test")
    );

    env::remove_var("CODEMIND_LOG_DIR");
    assert!(Config::log_dir().ends_with("codemind"));
}
