//! ScrapeCreators integration: the tweet fetcher and everything the demo
//! prints around it.
//!
//! [`client`] owns the wire contract, [`report`] renders outcomes, [`explain`]
//! holds the static prose and [`extract`] offers read-only views over URLs
//! and records.
pub mod client;
pub mod error;
pub mod explain;
pub mod extract;
pub mod report;
pub mod types;

pub use client::ScrapeCreatorsApi;
pub use error::FetchError;
pub use explain::{EXPLANATION, write_explanation};
pub use extract::TweetSummary;
pub use report::{ReportOpts, report_fetch, run_demo};
pub use types::{DEMO_TWEET_URL, PLACEHOLDER_API_KEY, TweetQuery, TweetRecord};
