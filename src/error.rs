//! Error types for schema outlining

use thiserror::Error;

/// Result type for outline operations
pub type Result<T> = std::result::Result<T, OutlineError>;

/// Outline errors
#[derive(Error, Debug)]
pub enum OutlineError {
    #[error("Unrecognized schema shape at {path}: {reason}")]
    UnrecognizedShape { path: String, reason: String },

    #[error("Unsupported schema construct at {path}: {construct}")]
    UnsupportedConstruct { path: String, construct: String },

    #[error("Schema nesting exceeds depth limit of {limit} at {path}")]
    DepthLimitExceeded { path: String, limit: usize },

    #[error("Invalid collection set: {0}")]
    InvalidCollection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}

impl OutlineError {
    pub(crate) fn unrecognized(path: &str, reason: impl Into<String>) -> Self {
        Self::UnrecognizedShape {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(path: &str, construct: impl Into<String>) -> Self {
        Self::UnsupportedConstruct {
            path: path.to_string(),
            construct: construct.into(),
        }
    }

    /// Whether this error means a node could not be classified
    pub fn is_classification_error(&self) -> bool {
        matches!(
            self,
            Self::UnrecognizedShape { .. } | Self::UnsupportedConstruct { .. }
        )
    }
}
