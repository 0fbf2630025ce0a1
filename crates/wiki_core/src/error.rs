use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Upstream responded with status {0}")]
    UpstreamStatus(u16),

    #[error("Upstream did not answer within {0:?}")]
    UpstreamTimeout(Duration),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid dataset: {0}")]
    Dataset(String),
}

impl Error {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// True for failures caused by the external summary service rather than
    /// by the caller or the local dataset.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamStatus(_) | Self::UpstreamTimeout(_) | Self::Http(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
