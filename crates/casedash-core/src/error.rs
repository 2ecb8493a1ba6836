//! Shared error type across casedash crates.

use thiserror::Error;

/// Caller-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// A target value outside the accepted range.
    InvalidTarget,
    /// Invalid input / malformed config.
    BadRequest,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidTarget => "INVALID_TARGET",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CaseDashError>;

/// Unified error type used by core and surface.
#[derive(Debug, Error)]
pub enum CaseDashError {
    /// `value` is the rejected input as written (negative, fractional, ...).
    #[error("invalid target for metric {name:?}: {value}")]
    InvalidTarget { name: String, value: String },
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl CaseDashError {
    /// Map internal error to a stable caller-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            CaseDashError::InvalidTarget { .. } => ClientCode::InvalidTarget,
            CaseDashError::BadRequest(_) => ClientCode::BadRequest,
            CaseDashError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            CaseDashError::Internal(_) => ClientCode::Internal,
        }
    }
}
