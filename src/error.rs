#[derive(Debug, thiserror::Error)]
pub enum SkinBaronError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected data shape: {0}")]
    DataShape(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, SkinBaronError>;
