//! Loader for tweetscrape configuration with YAML + environment overlays.
//!
//! Every section is optional. Environment overrides use the `TWEETSCRAPE__`
//! prefix with `__` between path segments, e.g.
//! `TWEETSCRAPE__SCRAPECREATORS__API_KEY`. String values go through `${VAR}`
//! expansion after all sources are merged.
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;

pub const DEFAULT_SCRAPECREATORS_BASE_URL: &str = "https://api.scrapecreators.com";

#[derive(Debug, Default, Deserialize)]
pub struct TweetscrapeConfig {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub scrapecreators: ScrapeCreatorsConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeCreatorsConfig {
    /// Blank keys and unresolved `${VAR}` references are rejected at fetch time,
    /// like the placeholder.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ScrapeCreatorsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub tweet_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: tweetscrape_common::LogFormat,
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default)]
    pub stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: tweetscrape_common::LogFormat::default(),
            filter: default_filter(),
            dir: None,
            stderr: false,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_SCRAPECREATORS_BASE_URL.into()
}
fn default_filter() -> String {
    "info".into()
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) => {
            if s.contains('$') {
                let mut cur = std::mem::take(s);
                for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                    let expanded = match shellexpand::env(&cur) {
                        Ok(cow) => cow.into_owned(),
                        Err(_) => cur.clone(),
                    };
                    if expanded == cur {
                        break;
                    }
                    cur = expanded;
                }
                *s = cur;
            }
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder hides the `config` crate wiring (YAML + env overrides).
pub struct TweetscrapeConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl Default for TweetscrapeConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl TweetscrapeConfigLoader {
    /// Start with `TWEETSCRAPE__` env overrides and no files.
    ///
    /// ```
    /// use tweetscrape_config::{TweetscrapeConfigLoader, DEFAULT_SCRAPECREATORS_BASE_URL};
    ///
    /// let config = TweetscrapeConfigLoader::new()
    ///     .with_yaml_str("version: '1'")
    ///     .load()
    ///     .expect("valid config");
    ///
    /// assert_eq!(config.version.as_deref(), Some("1"));
    /// assert_eq!(config.scrapecreators.base_url, DEFAULT_SCRAPECREATORS_BASE_URL);
    /// assert!(config.demo.tweet_url.is_none());
    /// ```
    pub fn new() -> Self {
        let builder = Config::builder().add_source(
            Environment::with_prefix("TWEETSCRAPE")
                .prefix_separator("__")
                .separator("__"),
        );
        Self { builder }
    }

    /// Attach a YAML/TOML/JSON file; the `config` crate infers format by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self
    }

    /// Like [`Self::with_file`], but a missing file is skipped.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self
    }

    /// Allow tests/CLI to merge inline YAML snippets.
    ///
    /// ```
    /// use tweetscrape_config::TweetscrapeConfigLoader;
    ///
    /// let cfg = TweetscrapeConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// scrapecreators:
    ///   api_key: "example"
    /// demo:
    ///   tweet_url: "https://x.com/someone/status/1"
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.scrapecreators.api_key.as_deref(), Some("example"));
    /// assert_eq!(cfg.demo.tweet_url.as_deref(), Some("https://x.com/someone/status/1"));
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, config::FileFormat::Yaml));
        self
    }

    /// Consume the builder and deserialize the merged sources into strongly typed config.
    pub fn load(self) -> Result<TweetscrapeConfig, ConfigError> {
        let cfg = self.builder.build()?;

        let mut v: Value = cfg.try_deserialize()?;
        expand_env_in_value(&mut v);

        let typed: TweetscrapeConfig =
            serde_json::from_value(v).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        Ok(typed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn expands_simple_string() {
        temp_env::with_var("TS_FOO", Some("bar"), || {
            let mut v = json!("prefix-${TS_FOO}-suffix");
            expand_env_in_value(&mut v);
            assert_eq!(v, json!("prefix-bar-suffix"));
        });
    }

    #[test]
    fn expands_in_array_and_object() {
        temp_env::with_vars([("TS_CITY", Some("Winston")), ("TS_STATE", Some("NC"))], || {
            let mut v = json!([
                "hello-$TS_CITY",
                { "loc": "${TS_CITY}-${TS_STATE}" },
                42,
                true,
                null
            ]);
            expand_env_in_value(&mut v);
            assert_eq!(
                v,
                json!(["hello-Winston", { "loc": "Winston-NC" }, 42, true, null])
            );
        });
    }

    #[test]
    fn expands_recursively_across_env_values() {
        temp_env::with_vars(
            [
                ("TS_BAZ", Some("qux")),
                ("TS_BAR", Some("mid-${TS_BAZ}")),
                ("TS_FOO", Some("start-${TS_BAR}-end")),
            ],
            || {
                let mut v = json!("X=${TS_FOO}");
                expand_env_in_value(&mut v);
                assert_eq!(v, json!("X=start-mid-qux-end"));
            },
        );
    }

    #[test]
    fn stops_on_cycles() {
        temp_env::with_vars([("TS_A", Some("${TS_B}")), ("TS_B", Some("${TS_A}"))], || {
            let mut v = json!("x=${TS_A}-y");
            expand_env_in_value(&mut v);
            let s = v.as_str().unwrap();
            assert!(s.starts_with("x=") && s.ends_with("-y"));
            assert!(s.contains("${"));
        });
    }

    #[test]
    fn unknown_vars_are_left_as_is() {
        let mut v = json!("key-${TS_DOES_NOT_EXIST}");
        expand_env_in_value(&mut v);
        assert_eq!(v, json!("key-${TS_DOES_NOT_EXIST}"));
    }

    #[test]
    fn logging_section_parses_format() {
        let cfg = TweetscrapeConfigLoader::new()
            .with_yaml_str("logging:\n  format: json\n  stderr: true\n")
            .load()
            .unwrap();
        assert_eq!(cfg.logging.format, tweetscrape_common::LogFormat::Json);
        assert!(cfg.logging.stderr);
        assert_eq!(cfg.logging.filter, "info");
    }
}
