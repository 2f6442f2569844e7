//! Error handling for the food API

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or an undecodable response body
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// An update was submitted before any food was selected for editing
    #[error("No food selected for editing")]
    NothingSelected,
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }
}
