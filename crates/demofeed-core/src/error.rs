//! Error types for the feedback capture domain.

use thiserror::Error;

/// A shared error type for the demofeed crates.
///
/// Capturing an item without an active session is not an error; that case
/// is reported as `None` by [`crate::feedback::FeedbackStore::add_feedback_item`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedbackError {
    /// A session was started while another one is still open
    #[error("Session already active: '{session_id}' for customer '{customer}'")]
    SessionAlreadyActive { session_id: String, customer: String },

    /// A session outcome change that the lifecycle does not allow
    #[error("Invalid session transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Input rejected before touching any state
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML"
        message: String,
    },

    /// Export document written by a newer or unknown schema
    #[error("Unsupported export schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (archive and config files)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl FeedbackError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a SessionAlreadyActive error
    pub fn session_already_active(
        session_id: impl Into<String>,
        customer: impl Into<String>,
    ) -> Self {
        Self::SessionAlreadyActive {
            session_id: session_id.into(),
            customer: customer.into(),
        }
    }

    /// Creates an InvalidTransition error
    pub fn invalid_transition(from: impl ToString, to: impl ToString) -> Self {
        Self::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    pub fn is_session_already_active(&self) -> bool {
        matches!(self, Self::SessionAlreadyActive { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse failure of imported or configured text
    pub fn is_serialization(&self) -> bool {
        matches!(
            self,
            Self::Serialization { .. } | Self::UnsupportedSchemaVersion(_)
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FeedbackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FeedbackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FeedbackError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, FeedbackError>`.
pub type Result<T> = std::result::Result<T, FeedbackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_converts_to_serialization() {
        let err: FeedbackError = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err().into();
        assert!(err.is_serialization());
        assert!(err.to_string().starts_with("Serialization error: JSON"));
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = FeedbackError::invalid_transition("in-progress", "in-progress");
        assert_eq!(
            err.to_string(),
            "Invalid session transition: in-progress -> in-progress"
        );
    }
}
