//! Error types for authgate

use thiserror::Error;

/// Result type alias for authgate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Problems talking to the authority over HTTP
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status; carries the raw response body
    #[error("Authority responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid authority response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to authority".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Failures of the session protocol itself.
///
/// Every variant is recoverable: the login flow turns them into an error
/// message, the route guard turns them into a redirect to the login page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Login rejected: {0}")]
    CredentialRejected(String),

    #[error("Login failed: {0}")]
    TransportFailure(String),

    #[error("Malformed session: {0}")]
    MalformedSession(String),

    #[error("Authority unreachable: {0}")]
    AuthorityUnreachable(String),

    #[error("Session invalid: {0}")]
    SessionInvalid(String),

    #[error("Authority refused the session without giving a reason")]
    AmbiguousValidation,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
