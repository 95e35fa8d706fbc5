use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library.
///
/// Every failure is returned verbatim to the immediate caller; the client
/// never retries, recovers, or swallows an error internally.
#[derive(Debug)]
pub enum AppError {
    /// Invalid client configuration, e.g. a base URL without a trailing slash
    Config(String),
    /// A path or base URL could not be parsed
    Url(url::ParseError),
    /// The outgoing request could not be constructed
    Request(reqwest::Error),
    /// A request body could not be serialized to JSON
    Json(serde_json::Error),
    /// A network-level failure while executing a request
    Transport(reqwest::Error),
    /// The request exceeded the client-wide timeout ceiling
    Timeout,
    /// The server answered with a status code other than 200
    Unexpected(StatusCode),
    /// The `X-Total-Count` header was present but not numeric
    InvalidTotalCount(String),
    /// A response body could not be decoded into the destination type
    Deserialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "invalid configuration: {msg}"),
            AppError::Url(err) => write!(f, "invalid url: {err}"),
            AppError::Request(err) => write!(f, "request construction error: {err}"),
            AppError::Json(err) => write!(f, "json serialization error: {err}"),
            AppError::Transport(err) => write!(f, "transport error: {err}"),
            AppError::Timeout => write!(f, "request timed out"),
            AppError::Unexpected(status) => {
                write!(f, "unexpected response code: {}", status.as_u16())
            }
            AppError::InvalidTotalCount(value) => {
                write!(f, "invalid total count header: {value}")
            }
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Url(err) => Some(err),
            AppError::Request(err) | AppError::Transport(err) => Some(err),
            AppError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout
        } else if err.is_builder() {
            AppError::Request(err)
        } else {
            AppError::Transport(err)
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::Url(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}
