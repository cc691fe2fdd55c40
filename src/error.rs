use reqwest::StatusCode;
use thiserror::Error;

/// Failure to retrieve or read a current weather response.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Transport failure: connection, timeout or body read.
    #[error("{0}")]
    Request(reqwest::Error),

    #[error("Request failed with status: {0}")]
    Status(StatusCode),

    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ForecastError {
    /// Wraps a transport error, dropping the request URL since it carries the API key.
    pub fn request(err: reqwest::Error) -> Self {
        ForecastError::Request(err.without_url())
    }
}
