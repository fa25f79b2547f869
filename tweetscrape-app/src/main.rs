use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tweetscrape_common::init_logging;
use tweetscrape_config::{TweetscrapeConfig, TweetscrapeConfigLoader};
use tweetscrape_social::scrapecreators::{
    ReportOpts, ScrapeCreatorsApi, run_demo, write_explanation,
};

mod cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // 1) Load config (env wins over file; a missing file is fine)
    let cfg: TweetscrapeConfig = TweetscrapeConfigLoader::new()
        .with_optional_file(&cli.config)
        .load()
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // 2) Logging never blocks the demo
    match init_logging(cli::log_config(&cli, &cfg)) {
        Ok(path) => tracing::debug!(log_path=%path.display(), "logging.ready"),
        Err(err) => eprintln!("warning: logging disabled: {err:#}"),
    }

    let stdout = std::io::stdout();
    run(&cli, &cfg, &mut stdout.lock()).await
}

/// Explanation first, then the demonstration fetch. Every fetch outcome is
/// printed to `out` and ends in `Ok`.
async fn run<W: Write>(cli: &cli::Cli, cfg: &TweetscrapeConfig, out: &mut W) -> Result<()> {
    if !cli.no_explain {
        write_explanation(out)?;
        out.flush()?;
    }

    let api = ScrapeCreatorsApi::with_base_url(&cfg.scrapecreators.base_url)
        .with_context(|| format!("invalid base url: {}", cfg.scrapecreators.base_url))?;
    let query = cli::resolve_query(cli, cfg);
    tracing::debug!(?query, "demo.query");

    run_demo(
        &api,
        &query,
        out,
        ReportOpts {
            summary: cli.summary,
        },
    )
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tweetscrape_social::scrapecreators::{EXPLANATION, PLACEHOLDER_API_KEY};

    fn parse(args: &[&str]) -> cli::Cli {
        temp_env::with_var("SCRAPECREATORS_API_KEY", None::<&str>, || {
            cli::Cli::try_parse_from(args).expect("valid args")
        })
    }

    async fn render(args: &[&str], cfg: &TweetscrapeConfig) -> String {
        let cli = parse(args);
        let mut buf = Vec::new();
        run(&cli, cfg, &mut buf).await.expect("demo run succeeds");
        String::from_utf8(buf).unwrap()
    }

    #[tokio::test]
    async fn bare_run_prints_explanation_then_guidance() {
        let text = render(&["tweetscrape"], &TweetscrapeConfig::default()).await;

        let explained = text.find(EXPLANATION.trim()).expect("explanation printed");
        let guided = text.find("Please replace").expect("guidance printed");
        assert!(explained < guided);
        assert!(text.contains(PLACEHOLDER_API_KEY));
        assert!(!text.contains("--- Scraping Tweet ---"));
        assert!(!text.contains("Error"));
    }

    #[tokio::test]
    async fn no_explain_prints_only_guidance() {
        let text = render(&["tweetscrape", "--no-explain"], &TweetscrapeConfig::default()).await;

        assert!(!text.contains(EXPLANATION.trim()));
        assert!(text.trim_start().starts_with("*** Please replace"));
    }

    #[tokio::test]
    async fn fetch_failures_still_finish_cleanly() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let mut cfg = TweetscrapeConfig::default();
        cfg.scrapecreators.base_url = format!("http://127.0.0.1:{port}");

        let text = render(&["tweetscrape", "--no-explain", "--api-key", "sk-test"], &cfg).await;

        assert!(text.contains("--- Scraping Tweet ---"));
        assert!(text.contains("An other error occurred: "));
    }
}
