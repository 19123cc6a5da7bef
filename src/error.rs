//! Error handling module for the launcher
//!
//! Centralized error taxonomy using thiserror. Library operations return
//! these types; the binary wraps them with anyhow context at the boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the launcher
#[derive(Error, Debug)]
pub enum LauncherError {
    /// A selection id that is not a selectable catalog item
    #[error("Unknown catalog item: {0}")]
    UnknownItem(String),

    /// Two selectable catalog entries resolved to the same id
    #[error("Duplicate catalog item id '{id}' (entries {first} and {second})")]
    DuplicateItem {
        id: String,
        first: usize,
        second: usize,
    },

    /// Nothing selected when an install script was requested
    #[error("No items were selected for installation")]
    EmptySelection,

    /// The install module directory could not be read
    #[error("Cannot read module directory {path}: {source}")]
    ModuleDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating or writing the temporary install script failed
    #[error("Failed to write install script: {0}")]
    ScriptWrite(String),

    /// The configured terminal emulator is not installed
    #[error("Could not find '{program}'. Please ensure it is installed and in your PATH")]
    TerminalNotFound { program: String },

    /// Spawning the terminal failed for another reason
    #[error("Failed to launch installer script: {0}")]
    Launch(String),

    /// Configuration errors (loading, parsing, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors not covered by a more specific variant
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, LauncherError>;

// Convenient error constructors
impl LauncherError {
    /// Create an unknown-item error
    pub fn unknown_item(id: impl Into<String>) -> Self {
        Self::UnknownItem(id.into())
    }

    /// Create a script write error
    pub fn script_write(msg: impl Into<String>) -> Self {
        Self::ScriptWrite(msg.into())
    }

    /// Create a launch error
    pub fn launch(msg: impl Into<String>) -> Self {
        Self::Launch(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for conditions the user should simply be told about
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::EmptySelection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LauncherError::unknown_item("install_nothing");
        assert_eq!(err.to_string(), "Unknown catalog item: install_nothing");

        let err = LauncherError::TerminalNotFound {
            program: "kitty".to_string(),
        };
        assert!(err.to_string().contains("'kitty'"));
        assert!(err.to_string().contains("PATH"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LauncherError = io_err.into();
        assert!(matches!(err, LauncherError::Io(_)));
    }

    #[test]
    fn test_informational_errors() {
        assert!(LauncherError::EmptySelection.is_informational());
        assert!(!LauncherError::launch("boom").is_informational());
        assert!(!LauncherError::script_write("disk full").is_informational());
    }

    #[test]
    fn test_duplicate_item_display() {
        let err = LauncherError::DuplicateItem {
            id: "install_jq".to_string(),
            first: 3,
            second: 9,
        };
        assert_eq!(
            err.to_string(),
            "Duplicate catalog item id 'install_jq' (entries 3 and 9)"
        );
    }
}
