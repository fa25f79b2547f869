//! Fixed prose describing how the browser extension gets its tweet data.
use std::io::{self, Write};

pub const EXPLANATION: &str = r#"
--------------------------------------------------------------------------------
How the "Twitter Reply Guy" browser extension fetches tweets
--------------------------------------------------------------------------------

The extension never scrapes Twitter/X itself. It asks a third-party service,
ScrapeCreators, for the tweet data.

1.  Trigger: clicking the "AI Reply" button on a tweet makes the content
    script capture that tweet's URL.

2.  Message passing: the content script sends a 'fetchTweetData' message to
    the background service worker carrying the tweet URL and the user's
    ScrapeCreators API key.

3.  Background call: the service worker's fetchTweetData function owns the
    actual API call.

4.  HTTP request: it issues a GET against
        https://api.scrapecreators.com/v1/twitter/tweet

5.  Parameters and headers:
        - the tweet URL goes in the `url` query parameter (plus `trim=true`)
        - the API key goes in the `x-api-key` request header

6.  Response: ScrapeCreators scrapes the tweet and answers with a JSON
    document holding the text, author details, engagement counts (likes,
    retweets) and more.

7.  Data usage: that JSON is handed to the Gemini API to draft a reply.

This program performs the same request as step 4 and prints what comes back.
"#;

/// Write [`EXPLANATION`] to `out`.
pub fn write_explanation<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{EXPLANATION}")
}
