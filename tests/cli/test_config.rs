//! Tests for the show-config CLI command

use autocomplete::cli::commands::config::{execute, ConfigArgs};
use autocomplete::cli::OutputFormat;
use autocomplete::core::config::Config;
use autocomplete::core::services::Services;
use std::sync::Arc;

#[tokio::test]
async fn test_show_config_human() {
    let services = Arc::new(Services::new(Config::default()));
    let result = execute(ConfigArgs { toml: false }, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_show_config_json() {
    let services = Arc::new(Services::new(Config::default()));
    let result = execute(ConfigArgs { toml: false }, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_show_config_toml_round_trips() {
    let services = Arc::new(Services::new(Config::default()));
    let result = execute(ConfigArgs { toml: true }, &services, OutputFormat::Human).await;
    assert!(result.is_ok());

    let rendered = toml::to_string_pretty(services.config.as_ref()).unwrap();
    let parsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed.listen_addr(), services.config.listen_addr());
    assert_eq!(parsed.query.default_top, 25);
}
