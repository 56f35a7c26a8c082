use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    let doc = toml_res.unwrap();
    assert_eq!(doc["language"].as_str(), Some("en"));
    assert_eq!(doc["model"].as_str(), Some("models/gemini-3-flash-preview"));
    assert_eq!(doc["request-timeout"].as_integer(), Some(30000));
    // Empty defaults stay commented out.
    assert!(res.contains("# gemini-token = \"\""));
    assert!(!res.contains("config-file"));
}

#[test]
fn it_defaults_the_grounding_language() {
    assert_eq!(Config::default(ConfigKey::Language), "en");
    assert_eq!(
        Config::default(ConfigKey::GeminiURL),
        "https://generativelanguage.googleapis.com"
    );
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["folio", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["folio", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
