//! UI Errors
//!
//! Failures that end up in front of the user as a notification.

use crate::notify::Severity;

/// Common result type for UI operations
pub type UiResult<T> = Result<T, UiError>;

#[derive(Debug, Clone, PartialEq)]
pub enum UiError {
    /// Fetch rejected, bad payload, or `success: false` from the server
    Network(String),
    /// Required input missing
    Validation(String),
}

impl UiError {
    pub fn network(msg: impl Into<String>) -> Self {
        UiError::Network(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        UiError::Validation(msg.into())
    }

    /// Text shown in the notification
    pub fn message(&self) -> &str {
        match self {
            UiError::Network(msg) | UiError::Validation(msg) => msg,
        }
    }

    /// Network failures are dangers, missing input is a warning
    pub fn severity(&self) -> Severity {
        match self {
            UiError::Network(_) => Severity::Danger,
            UiError::Validation(_) => Severity::Warning,
        }
    }
}

impl std::fmt::Display for UiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiError::Network(msg) => write!(f, "Network error: {}", msg),
            UiError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}

impl From<serde_json::Error> for UiError {
    fn from(e: serde_json::Error) -> Self {
        UiError::Network(format!("Unexpected response: {}", e))
    }
}
