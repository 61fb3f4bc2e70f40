use thiserror::Error;

pub type Result<T> = std::result::Result<T, SerpApiError>;

#[derive(Error, Debug)]
pub enum SerpApiError {
    /// SerpApi answered but flagged the search itself as failed.
    #[error("SerpApi error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SerpApi returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed SerpApi response: {0}")]
    MalformedResponse(String),
}

/// Coarse classification of a [`SerpApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Api,
    Transport,
    Malformed,
}

impl SerpApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SerpApiError::Api(_) => ErrorKind::Api,
            SerpApiError::Http(_) | SerpApiError::Status { .. } => ErrorKind::Transport,
            SerpApiError::MalformedResponse(_) => ErrorKind::Malformed,
        }
    }
}
