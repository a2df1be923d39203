use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a plotting run.
#[derive(Debug, Error)]
pub enum MapError {
    /// The path does not exist or cannot be opened for reading.
    #[error("cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but does not match the expected layout.
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Propagated unchanged from the drawing backend.
    #[error("render failed: {0}")]
    Render(String),
}

impl MapError {
    pub fn parse(path: &std::path::Path, line: u64, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            line,
            reason: reason.into(),
        }
    }

    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}
