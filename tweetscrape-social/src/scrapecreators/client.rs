//! Thin wrapper around the ScrapeCreators tweet endpoint.
//!
//! One call, one GET. The credential check happens before anything touches
//! the network; every other failure comes back as a [`FetchError`].
use crate::scrapecreators::error::FetchError;
use crate::scrapecreators::extract::status_id;
use crate::scrapecreators::types::{TweetQuery, TweetRecord};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use std::borrow::Cow;
use std::time::Instant;
use tweetscrape_http::{Auth, HttpClient, HttpError, RequestOpts};

pub const SCRAPECREATORS_BASE_URL: &str = "https://api.scrapecreators.com";
pub const TWEET_PATH: &str = "v1/twitter/tweet";
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone, Debug)]
pub struct ScrapeCreatorsApi {
    http: HttpClient,
}

impl ScrapeCreatorsApi {
    pub fn new() -> Result<Self, HttpError> {
        Self::with_base_url(SCRAPECREATORS_BASE_URL)
    }

    /// Point the client somewhere else (a mock server, a proxy).
    pub fn with_base_url(base: &str) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(base)?,
        })
    }

    /// Fetch the record for `query.tweet_url`.
    ///
    /// ```no_run
    /// use tweetscrape_social::scrapecreators::{ScrapeCreatorsApi, TweetQuery};
    ///
    /// # async fn demo() -> anyhow::Result<()> {
    /// let api = ScrapeCreatorsApi::new()?;
    /// let query = TweetQuery::new("sk-...", "https://x.com/someone/status/1");
    /// let record = api.fetch_tweet_data(&query).await?;
    /// println!("{}", serde_json::to_string_pretty(&record)?);
    /// # Ok(()) }
    /// ```
    pub async fn fetch_tweet_data(&self, query: &TweetQuery) -> Result<TweetRecord, FetchError> {
        if !query.has_usable_key() {
            tracing::info!(
                target: "scrapecreators",
                "scrapecreators.fetch.skipped_invalid_credential"
            );
            return Err(FetchError::InvalidCredential);
        }

        // Sent as-is either way; the warning only helps spot typos.
        if status_id(&query.tweet_url).is_none() {
            tracing::warn!(
                target: "scrapecreators",
                tweet_url=%query.tweet_url,
                "scrapecreators.fetch.url_not_a_status"
            );
        }

        let auth = Auth::header(API_KEY_HEADER, &query.api_key)?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let params: Vec<(&str, Cow<'_, str>)> = vec![
            ("url", Cow::Borrowed(query.tweet_url.as_str())),
            ("trim", Cow::Borrowed("true")),
        ];

        tracing::info!(
            target: "scrapecreators",
            tweet_url=%query.tweet_url,
            "scrapecreators.fetch.start"
        );
        let started = Instant::now();

        let result = self
            .http
            .get_json::<TweetRecord>(
                TWEET_PATH,
                RequestOpts {
                    auth: Some(auth),
                    headers: Some(headers),
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await
            .map_err(FetchError::from);

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(
                target: "scrapecreators",
                elapsed_ms,
                "scrapecreators.fetch.ok"
            ),
            Err(err) => tracing::warn!(
                target: "scrapecreators",
                elapsed_ms,
                error=%err,
                "scrapecreators.fetch.failed"
            ),
        }
        result
    }
}
