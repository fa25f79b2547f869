use std::fmt;

/// Dummy key shipped in the demo; treated the same as an empty key.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_SCRAPECREATORS_API_KEY";

/// Tweet used by the demonstration fetch when nothing else is configured.
pub const DEMO_TWEET_URL: &str = "https://x.com/MartiniGuyYT/status/1944682007054750160";

/// Whatever the service returned, forwarded verbatim.
pub type TweetRecord = serde_json::Value;

/// One fetch request: the caller's credential plus the tweet to look up.
#[derive(Clone, PartialEq, Eq)]
pub struct TweetQuery {
    pub api_key: String,
    pub tweet_url: String,
}

impl TweetQuery {
    pub fn new(api_key: impl Into<String>, tweet_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            tweet_url: tweet_url.into(),
        }
    }

    /// False for empty/blank keys, for [`PLACEHOLDER_API_KEY`], and for keys
    /// still holding a `${VAR}` reference that config expansion left unresolved.
    pub fn has_usable_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != PLACEHOLDER_API_KEY && !key.contains("${")
    }
}

// Keep the key out of logs and panic messages.
impl fmt::Debug for TweetQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TweetQuery")
            .field("api_key", &"<redacted>")
            .field("tweet_url", &self.tweet_url)
            .finish()
    }
}
