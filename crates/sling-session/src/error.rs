//! # Session Error Types
//!
//! Errors raised by the runtime layer, and the serializable error the
//! command functions hand to the presentation layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Presentation layer             Rust                                    │
//! │  ──────────────────             ────                                    │
//! │                                                                         │
//! │  selectOption('fabric', 'plaid')                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::select_option  ->  Result<T, ApiError>                │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  SelectionStore ── CoreError::InvalidSelection ──► ApiError ────►│  │
//! │  │                                                                  │  │
//! │  │  Config load ───── SessionError::ConfigLoadFailed ─► ApiError ──►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "INVALID_SELECTION",                                         │
//! │    "message": "Invalid fabric selection: 'plaid' is not in the ..." }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use sling_core::{CoreError, ValidationError};

// =============================================================================
// Session Error
// =============================================================================

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Failures while loading configuration or mounting a session.
#[derive(Debug, Error)]
pub enum SessionError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid customizer configuration.
    #[error("Invalid customizer configuration: {0}")]
    InvalidConfig(String),

    /// Invalid preview URL.
    #[error("Invalid preview URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Runtime Errors
    // =========================================================================
    /// Mounting needs a tokio runtime to run dismiss timers on.
    #[error("No tokio runtime available to run dismiss timers")]
    NoRuntime,

    /// Error from sling-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::Core(CoreError::from(err))
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for SessionError {
    fn from(err: toml::de::Error) -> Self {
        SessionError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for SessionError {
    fn from(err: toml::ser::Error) -> Self {
        SessionError::ConfigSaveFailed(err.to_string())
    }
}

impl From<url::ParseError> for SessionError {
    fn from(err: url::ParseError) -> Self {
        SessionError::InvalidUrl(err.to_string())
    }
}

// =============================================================================
// API Error
// =============================================================================

/// Error returned from command functions.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_SELECTION",
///   "message": "Invalid strap selection: 'chain' is not in the catalog"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// An option id outside its catalog.
    InvalidSelection,

    /// Input or configuration validation failed.
    ValidationError,

    /// A share link that could not be decoded.
    InvalidShareLink,

    /// Anything else.
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::InvalidSelection { .. } => ErrorCode::InvalidSelection,
            CoreError::InvalidShareLink(_) => ErrorCode::InvalidShareLink,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts session errors to API errors.
impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Core(core) => ApiError::from(core),
            SessionError::InvalidConfig(_) | SessionError::InvalidUrl(_) => {
                ApiError::validation(err.to_string())
            }
            other => {
                tracing::error!("Session error: {}", other);
                ApiError::internal(other.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sling_core::Axis;

    #[test]
    fn test_invalid_selection_maps_to_code() {
        let err = ApiError::from(CoreError::invalid_selection(Axis::Strap, "chain"));
        assert_eq!(err.code, ErrorCode::InvalidSelection);
        assert_eq!(
            err.message,
            "Invalid strap selection: 'chain' is not in the catalog"
        );
    }

    #[test]
    fn test_api_error_json_shape() {
        let err = ApiError::from(CoreError::InvalidShareLink("missing 'config' parameter".into()));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_SHARE_LINK");
        assert_eq!(json["message"], "Invalid share link: missing 'config' parameter");
    }

    #[test]
    fn test_session_error_mapping() {
        let err = ApiError::from(SessionError::InvalidConfig("bad".into()));
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = ApiError::from(SessionError::NoRuntime);
        assert_eq!(err.code, ErrorCode::Internal);

        let err = ApiError::from(SessionError::from(ValidationError::Required {
            field: "name".into(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
