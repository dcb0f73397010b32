//! Error types for the API client.

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required path or query parameter was not set.
    #[error("missing required parameter `{name}`")]
    MissingParameter { name: String },
    /// The request could not be sent or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status that the caller did not ignore.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body does not match the expected JSON or CSV shape.
    #[error("failed to decode response: {message}")]
    Decode { message: String },
    /// A CSV data row does not have as many fields as the header row.
    #[error("invalid CSV row {row}: expected {expected} fields, got {actual}")]
    Format {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The caller's cancellation token fired before the call completed.
    #[error("request cancelled")]
    Cancelled,
    /// The per-call or client-wide timeout elapsed.
    #[error("request deadline exceeded")]
    DeadlineExceeded,
    /// The configured base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn decode(message: impl std::fmt::Display) -> Self {
        Error::Decode {
            message: message.to_string(),
        }
    }

    pub(crate) fn missing(name: &str) -> Self {
        Error::MissingParameter {
            name: name.to_string(),
        }
    }
}
