//! Error types for morph-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from morph-core
    #[error(transparent)]
    Core(#[from] morph_core::Error),

    /// Error from morph-path
    #[error(transparent)]
    Path(#[from] morph_path::PathError),

    /// JSON rendering error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML rendering error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
