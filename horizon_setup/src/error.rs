//! Setup errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Setup result type.
pub type Result<T> = std::result::Result<T, SetupError>;

/// A setup step failed.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write console output: {0}")]
    Console(#[source] io::Error),
}

impl SetupError {
    /// Path the failing step was working on, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SetupError::CreateDirectory { path, .. }
            | SetupError::Serialize { path, .. }
            | SetupError::WriteFile { path, .. } => Some(path),
            SetupError::Console(_) => None,
        }
    }
}
