//! Turns a fetch outcome into the text the demo prints.
//!
//! Every failure class ends here as plain output; nothing is re-raised.
use crate::scrapecreators::client::ScrapeCreatorsApi;
use crate::scrapecreators::error::FetchError;
use crate::scrapecreators::extract::TweetSummary;
use crate::scrapecreators::types::{PLACEHOLDER_API_KEY, TweetQuery, TweetRecord};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOpts {
    /// Append a short author/text/engagement summary after the JSON.
    pub summary: bool,
}

pub fn write_guidance<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "*** Please replace '{PLACEHOLDER_API_KEY}' with your actual key to run this demo. ***"
    )?;
    writeln!(out, "*** Pass --api-key or set SCRAPECREATORS_API_KEY. ***")
}

pub fn write_banner<W: Write>(out: &mut W, tweet_url: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Scraping Tweet ---")?;
    writeln!(out, "URL: {tweet_url}")
}

/// Print the outcome of one fetch.
pub fn report_fetch<W: Write>(
    out: &mut W,
    result: &Result<TweetRecord, FetchError>,
    opts: ReportOpts,
) -> io::Result<()> {
    match result {
        Ok(record) => {
            writeln!(out)?;
            writeln!(out, "Success! Scraped data received.")?;
            let pretty = serde_json::to_string_pretty(record).map_err(io::Error::other)?;
            writeln!(out, "{pretty}")?;
            if opts.summary {
                write_summary(out, &TweetSummary::from_record(record))?;
            }
            Ok(())
        }
        Err(FetchError::InvalidCredential) => write_guidance(out),
        Err(err @ FetchError::Http { status, body }) => {
            writeln!(out)?;
            writeln!(out, "HTTP Error occurred: {status}")?;
            if let Some(hint) = err.hint() {
                writeln!(out, "Hint: {hint}")?;
            }
            writeln!(out, "Status Code: {status}")?;
            writeln!(out, "Response Body: {body}")
        }
        Err(FetchError::Transport { message }) => {
            writeln!(out)?;
            writeln!(out, "An other error occurred: {message}")
        }
    }
}

fn write_summary<W: Write>(out: &mut W, summary: &TweetSummary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Summary ---")?;
    if summary.is_empty() {
        return writeln!(out, "(no recognisable tweet fields)");
    }
    let author = summary.author.as_deref().unwrap_or("Unknown");
    let text = summary.text.as_deref().unwrap_or("No text available");
    writeln!(out, "Author: @{author}")?;
    writeln!(out, "Tweet: {text}")?;
    writeln!(
        out,
        "Engagement: {} likes, {} retweets",
        summary.likes.unwrap_or(0),
        summary.retweets.unwrap_or(0)
    )
}

/// Fetch `query` and print the whole exchange to `out`.
///
/// The banner is skipped when the key is unusable: only the guidance shows.
pub async fn run_demo<W: Write>(
    api: &ScrapeCreatorsApi,
    query: &TweetQuery,
    out: &mut W,
    opts: ReportOpts,
) -> io::Result<()> {
    if query.has_usable_key() {
        write_banner(out, &query.tweet_url)?;
        out.flush()?;
    }
    let result = api.fetch_tweet_data(query).await;
    report_fetch(out, &result, opts)?;
    out.flush()
}
