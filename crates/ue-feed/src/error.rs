use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network error: {0}")]
    Network(String),

    #[error("backend returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("malformed response: {0}")]
    Parse(String),

    #[error("no data for {0}")]
    Missing(String),
}

pub type FeedResult<T> = Result<T, FeedError>;

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FeedError::Parse(err.to_string())
        } else {
            FeedError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Parse(err.to_string())
    }
}
