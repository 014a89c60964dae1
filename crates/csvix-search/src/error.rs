use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{operation} failed for index '{index}': HTTP {status}: {body}")]
    UnexpectedStatus {
        operation: &'static str,
        index: String,
        status: u16,
        body: String,
    },

    #[error("bulk load rejected {failed} document(s); first error: {first_error}")]
    BulkRejected { failed: usize, first_error: String },

    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;
