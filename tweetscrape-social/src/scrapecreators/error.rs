use thiserror::Error;
use tweetscrape_http::HttpError;

/// Everything that can go wrong with a single tweet fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Key missing or still the placeholder; no request was sent.
    #[error("ScrapeCreators API key is missing or still the placeholder")]
    InvalidCredential,

    /// The service answered with a 4xx/5xx status.
    #[error("ScrapeCreators API error ({status}): {body}")]
    Http { status: u16, body: String },

    /// Anything else between building the request and decoding the body.
    #[error("{message}")]
    Transport { message: String },
}

impl FetchError {
    /// Friendlier explanation for the statuses the extension calls out.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FetchError::Http { status: 401, .. } => Some("Invalid ScrapeCreators API key"),
            FetchError::Http { status: 403, .. } => {
                Some("API key lacks permissions or rate limited")
            }
            FetchError::Http { status: 404, .. } => Some("Tweet not found or URL invalid"),
            _ => None,
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Api { status, body, .. }
                if status.is_client_error() || status.is_server_error() =>
            {
                FetchError::Http {
                    status: status.as_u16(),
                    body,
                }
            }
            other => FetchError::Transport {
                message: other.to_string(),
            },
        }
    }
}
