//! Error types for morph-core

use std::path::PathBuf;

/// Result type for morph-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or morphing a config
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    /// The config root, or the `start_from` target, is not a mapping
    #[error("Expected a mapping at {at}, found {found}")]
    NotAMapping { at: String, found: &'static str },

    /// Keys left over after binding, reported when extra keys are denied
    #[error("Some keys are not used by any schema: {}", .keys.join(", "))]
    UnusedKeys { keys: Vec<String> },

    #[error("Failed to deserialize config at {at}: {source}")]
    Deserialize {
        at: String,
        #[source]
        source: serde_json::Error,
    },

    /// Path error from morph-path
    #[error(transparent)]
    Path(#[from] morph_path::PathError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
