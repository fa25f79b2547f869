use serial_test::serial;
use std::{fs, path::PathBuf};
use tempfile::TempDir;
use tweetscrape_common::LogFormat;
use tweetscrape_config::{TweetscrapeConfigLoader, DEFAULT_SCRAPECREATORS_BASE_URL};

/// Helper to write a YAML file in a temp dir and return its path.
fn write_yaml(tmp: &TempDir, name: &str, yaml: &str) -> PathBuf {
    let p = tmp.path().join(name);
    fs::write(&p, yaml).expect("write yaml");
    p
}

#[test]
#[serial]
fn test_config_load_with_env_expansion() {
    let tmp = TempDir::new().unwrap();
    let file_yaml = r#"
version: "1"
scrapecreators:
  api_key: "${TS_TEST_SCRAPE_KEY}"
  base_url: "http://127.0.0.1:9999"
demo:
  tweet_url: "https://x.com/someone/status/42"
logging:
  format: json
  filter: debug
  dir: /tmp/tweetscrape-logs
"#;
    let p = write_yaml(&tmp, "tweetscrape.yaml", file_yaml);

    let config = temp_env::with_var("TS_TEST_SCRAPE_KEY", Some("from-env"), || {
        TweetscrapeConfigLoader::new()
            .with_file(&p)
            .load()
            .expect("load config")
    });

    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.scrapecreators.api_key.as_deref(), Some("from-env"));
    assert_eq!(config.scrapecreators.base_url, "http://127.0.0.1:9999");
    assert_eq!(
        config.demo.tweet_url.as_deref(),
        Some("https://x.com/someone/status/42")
    );
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.logging.filter, "debug");
    assert_eq!(
        config.logging.dir,
        Some(PathBuf::from("/tmp/tweetscrape-logs"))
    );
}

#[test]
#[serial]
fn missing_optional_file_yields_defaults() {
    let tmp = TempDir::new().unwrap();
    let config = TweetscrapeConfigLoader::new()
        .with_optional_file(tmp.path().join("absent.yaml"))
        .load()
        .expect("defaults");

    assert!(config.scrapecreators.api_key.is_none());
    assert_eq!(config.scrapecreators.base_url, DEFAULT_SCRAPECREATORS_BASE_URL);
    assert!(config.demo.tweet_url.is_none());
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(!config.logging.stderr);
}

#[test]
#[serial]
fn missing_required_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = TweetscrapeConfigLoader::new()
        .with_file(tmp.path().join("absent.yaml"))
        .load();
    assert!(result.is_err());
}

#[test]
#[serial]
fn env_overrides_file_values() {
    let tmp = TempDir::new().unwrap();
    let p = write_yaml(
        &tmp,
        "tweetscrape.yaml",
        "scrapecreators:\n  api_key: \"from-file\"\n",
    );

    let config = temp_env::with_var(
        "TWEETSCRAPE__SCRAPECREATORS__API_KEY",
        Some("from-override"),
        || {
            TweetscrapeConfigLoader::new()
                .with_file(&p)
                .load()
                .expect("load config")
        },
    );

    assert_eq!(
        config.scrapecreators.api_key.as_deref(),
        Some("from-override")
    );
}
