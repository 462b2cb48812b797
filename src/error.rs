use std::path::PathBuf;

use thiserror::Error;

/// Everything that can escape a menu action.
///
/// Bad user input never shows up here; the prompts in [`crate::safe_input`]
/// keep asking until they get something valid.
#[derive(Debug, Error)]
pub enum ListError {
    /// A list file could not be read or written.
    #[error("{}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A 1-based position outside the list.
    #[error("position {position} is outside the list (1-{len})")]
    Position { position: usize, len: usize },

    #[error("invalid input pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Writing to or reading from the terminal failed.
    #[error("console error: {0}")]
    Console(#[from] std::io::Error),

    /// Standard input was closed.
    #[error("end of input")]
    EndOfInput,
}

impl ListError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> ListError {
        ListError::File {
            path: path.into(),
            source,
        }
    }

    /// Whether the menu loop can report this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ListError::File { .. } | ListError::Position { .. })
    }
}
