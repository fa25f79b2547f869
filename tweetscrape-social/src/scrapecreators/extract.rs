//! Read-only helpers over tweet URLs and returned records.
//!
//! Nothing here validates a record. The summary walks a few well-known JSON
//! pointers and gives up quietly when the shape does not match.
use serde_json::Value;
use url::Url;

/// Pull the numeric id out of `https://x.com/<handle>/status/<id>`.
///
/// ```
/// use tweetscrape_social::scrapecreators::extract::status_id;
///
/// assert_eq!(status_id("https://x.com/a/status/123?s=20").as_deref(), Some("123"));
/// assert_eq!(status_id("https://x.com/a"), None);
/// ```
pub fn status_id(tweet_url: &str) -> Option<String> {
    let url = Url::parse(tweet_url).ok()?;
    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();
    let pos = segments.iter().position(|s| *s == "status" || *s == "statuses")?;
    let id = segments.get(pos + 1)?;
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Some((*id).to_string())
    } else {
        None
    }
}

/// The handful of fields a reply prompt cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TweetSummary {
    pub text: Option<String>,
    pub author: Option<String>,
    pub likes: Option<u64>,
    pub retweets: Option<u64>,
}

const TEXT_POINTERS: &[&str] = &[
    "/legacy/full_text",
    "/note_tweet/note_tweet_results/result/text",
    "/full_text",
    "/text",
];

const AUTHOR_POINTERS: &[&str] = &[
    "/core/user_results/result/legacy/screen_name",
    "/core/user_results/result/core/screen_name",
    "/user/screen_name",
];

const LIKE_POINTERS: &[&str] = &["/legacy/favorite_count", "/favorite_count"];

const RETWEET_POINTERS: &[&str] = &["/legacy/retweet_count", "/retweet_count"];

impl TweetSummary {
    pub fn from_record(record: &Value) -> Self {
        Self {
            text: first_str(record, TEXT_POINTERS),
            author: first_str(record, AUTHOR_POINTERS),
            likes: first_u64(record, LIKE_POINTERS),
            retweets: first_u64(record, RETWEET_POINTERS),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn first_str(v: &Value, pointers: &[&str]) -> Option<String> {
    pointers
        .iter()
        .filter_map(|p| v.pointer(p))
        .filter_map(Value::as_str)
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn first_u64(v: &Value, pointers: &[&str]) -> Option<u64> {
    pointers
        .iter()
        .filter_map(|p| v.pointer(p))
        .find_map(|n| n.as_u64().or_else(|| n.as_str().and_then(|s| s.parse().ok())))
}
