use clap::Parser;
use std::path::PathBuf;
use tweetscrape_common::LogConfig;
use tweetscrape_config::TweetscrapeConfig;
use tweetscrape_social::scrapecreators::{DEMO_TWEET_URL, PLACEHOLDER_API_KEY, TweetQuery};

/// Explain how the extension scrapes tweets, then run the same ScrapeCreators call.
#[derive(Parser, Debug)]
#[command(name = "tweetscrape", version, about, long_about = None)]
pub struct Cli {
    /// ScrapeCreators API key (falls back to config, then the demo placeholder)
    #[arg(long, env = "SCRAPECREATORS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Full URL of the tweet to fetch
    #[arg(long = "url")]
    pub tweet_url: Option<String>,

    /// Optional YAML config file
    #[arg(long, default_value = "tweetscrape.yaml")]
    pub config: PathBuf,

    /// Skip the explanation text
    #[arg(long)]
    pub no_explain: bool,

    /// Print a short author/text/engagement summary after the JSON
    #[arg(long)]
    pub summary: bool,

    /// Mirror logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Flag beats config, config beats the built-in demo values.
pub fn resolve_query(cli: &Cli, cfg: &TweetscrapeConfig) -> TweetQuery {
    let api_key = cli
        .api_key
        .clone()
        .or_else(|| cfg.scrapecreators.api_key.clone())
        .unwrap_or_else(|| PLACEHOLDER_API_KEY.to_string());
    let tweet_url = cli
        .tweet_url
        .clone()
        .or_else(|| cfg.demo.tweet_url.clone())
        .unwrap_or_else(|| DEMO_TWEET_URL.to_string());
    TweetQuery::new(api_key, tweet_url)
}

pub fn log_config(cli: &Cli, cfg: &TweetscrapeConfig) -> LogConfig {
    LogConfig {
        log_dir: cfg.logging.dir.clone(),
        emit_stderr: cli.verbose || cfg.logging.stderr,
        format: cfg.logging.format,
        default_filter: cfg.logging.filter.clone(),
        ..LogConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweetscrape_config::TweetscrapeConfigLoader;

    fn parse(args: &[&str]) -> Cli {
        temp_env::with_var("SCRAPECREATORS_API_KEY", None::<&str>, || {
            Cli::try_parse_from(args).expect("valid args")
        })
    }

    fn config(yaml: &str) -> TweetscrapeConfig {
        TweetscrapeConfigLoader::new()
            .with_yaml_str(yaml)
            .load()
            .expect("valid yaml")
    }

    #[test]
    fn no_arguments_fall_back_to_demo_values() {
        let cli = parse(&["tweetscrape"]);
        assert!(!cli.no_explain);
        assert_eq!(cli.config, PathBuf::from("tweetscrape.yaml"));

        let query = resolve_query(&cli, &TweetscrapeConfig::default());
        assert_eq!(query.api_key, PLACEHOLDER_API_KEY);
        assert_eq!(query.tweet_url, DEMO_TWEET_URL);
        assert!(!query.has_usable_key());
    }

    #[test]
    fn config_values_fill_in_missing_flags() {
        let cli = parse(&["tweetscrape"]);
        let cfg = config("scrapecreators:\n  api_key: cfg-key\ndemo:\n  tweet_url: https://x.com/c/status/9\n");

        let query = resolve_query(&cli, &cfg);
        assert_eq!(query.api_key, "cfg-key");
        assert_eq!(query.tweet_url, "https://x.com/c/status/9");
    }

    #[test]
    fn flags_win_over_config() {
        let cli = parse(&[
            "tweetscrape",
            "--api-key",
            "flag-key",
            "--url",
            "https://x.com/f/status/1",
        ]);
        let cfg = config("scrapecreators:\n  api_key: cfg-key\ndemo:\n  tweet_url: https://x.com/c/status/9\n");

        let query = resolve_query(&cli, &cfg);
        assert_eq!(query.api_key, "flag-key");
        assert_eq!(query.tweet_url, "https://x.com/f/status/1");
    }

    #[test]
    fn unresolved_config_key_counts_as_missing() {
        let cli = parse(&["tweetscrape"]);
        let cfg = temp_env::with_var("SCRAPECREATORS_API_KEY", None::<&str>, || {
            config("scrapecreators:\n  api_key: \"${SCRAPECREATORS_API_KEY}\"\n")
        });

        let query = resolve_query(&cli, &cfg);
        assert_eq!(query.api_key, "${SCRAPECREATORS_API_KEY}");
        assert!(!query.has_usable_key());
    }

    #[test]
    fn api_key_can_come_from_the_environment() {
        let cli = temp_env::with_var("SCRAPECREATORS_API_KEY", Some("env-key"), || {
            Cli::try_parse_from(["tweetscrape"]).expect("valid args")
        });
        assert_eq!(cli.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn verbose_flag_mirrors_logs_to_stderr() {
        let cli = parse(&["tweetscrape", "-v", "--summary", "--no-explain"]);
        assert!(cli.summary);
        assert!(cli.no_explain);

        let log = log_config(&cli, &TweetscrapeConfig::default());
        assert!(log.emit_stderr);
        assert_eq!(log.app_name, "tweetscrape");
        assert_eq!(log.default_filter, "info");
    }
}
