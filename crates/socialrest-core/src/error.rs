//! Shared error type across socialrest crates.

use thiserror::Error;

/// Stable error kind codes (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A protected request was attempted without a session token.
    MissingCredential,
    /// Network unreachable or malformed response.
    Transport,
    /// Non-2xx HTTP status.
    HttpStatus,
    /// Invalid config or unknown action.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::MissingCredential => "MISSING_CREDENTIAL",
            ErrorKind::Transport => "TRANSPORT_ERROR",
            ErrorKind::HttpStatus => "HTTP_STATUS_ERROR",
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SocialRestError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum SocialRestError {
    #[error("Authorization token is missing. Please log in.")]
    MissingCredential,
    #[error("{0}")]
    Transport(String),
    /// `body` already carries the reason-phrase fallback when the server sent nothing.
    #[error("HTTP Error: {status} - {body}")]
    HttpStatus { status: u16, body: String },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SocialRestError {
    /// Map the error to its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SocialRestError::MissingCredential => ErrorKind::MissingCredential,
            SocialRestError::Transport(_) => ErrorKind::Transport,
            SocialRestError::HttpStatus { .. } => ErrorKind::HttpStatus,
            SocialRestError::BadRequest(_) => ErrorKind::BadRequest,
            SocialRestError::UnsupportedVersion => ErrorKind::UnsupportedVersion,
            SocialRestError::Internal(_) => ErrorKind::Internal,
        }
    }
}
