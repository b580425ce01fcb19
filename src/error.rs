//! Error handling for the copse library
//!
//! Container operations distinguish three failure classes: invalid
//! parameters (rejected at construction), corrupted cross-structure state
//! (a programmer error surfaced by composite containers), and absent
//! lookups. Only the first two are errors; an absent key or value is
//! reported as `None` and never constructs a [`CopseError`].

use thiserror::Error;

/// Main error type for the copse library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CopseError {
    /// Invalid parameter passed to a constructor or operation
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the rejected parameter
        message: String,
    },

    /// Configuration validation failure
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// Internal invariant violated across composed structures
    #[error("Corrupted state: {message}")]
    CorruptedState {
        /// Description of the detected inconsistency
        message: String,
    },
}

impl CopseError {
    /// Create an invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a corrupted state error
    pub fn corrupted_state<S: Into<String>>(message: S) -> Self {
        Self::CorruptedState {
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => "parameter",
            Self::Configuration { .. } => "config",
            Self::CorruptedState { .. } => "corruption",
        }
    }

    /// Check if this error indicates a recoverable condition
    ///
    /// Parameter and configuration errors are recoverable by the caller
    /// fixing the inputs; corrupted state is not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidParameter { .. } => true,
            Self::Configuration { .. } => true,
            Self::CorruptedState { .. } => false,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CopseError>;
