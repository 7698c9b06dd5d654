use std::io;

use thiserror::Error;

/// Library-wide error type for roleprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// User-facing input validation failure.
    #[error("{0}")]
    Validation(String),

    /// No prompt has been generated yet.
    #[error("No prompt in history. Run 'roleprompt build' first.")]
    EmptyHistory,

    /// History entry index out of range (1-based).
    #[error("History entry {0} not found")]
    HistoryEntryNotFound(usize),

    /// Named favorite does not exist.
    #[error("Favorite '{0}' not found")]
    FavoriteNotFound(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Failed to encode the store blob or a JSON export.
    #[error("Failed to encode JSON: {0}")]
    JsonEncode(#[from] serde_json::Error),

    /// Failed to encode a YAML export.
    #[error("Failed to encode YAML: {0}")]
    YamlEncode(#[from] serde_yaml::Error),

    /// TOML parsing error in the config file.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
