//! Error taxonomy for note and todo operations

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user by note and todo operations.
///
/// Every variant is terminal for the operation that produced it.
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Daily notes path is not set!")]
    MissingFolder,

    #[error("Daily note template is not set!")]
    MissingTemplate,

    #[error("No workspace folder is open; cannot save todos")]
    NoWorkspace,

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot open {}: {source}", .path.display())]
    EditorOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read answer: {0}")]
    Prompt(#[source] io::Error),

    #[error("Invalid settings file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl NoteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        NoteError::Io { path: path.into(), source }
    }

    /// True when the viewer failed because the file does not exist
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            NoteError::EditorOpen { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_detection() {
        let err = NoteError::EditorOpen {
            path: PathBuf::from("/notes/01-02-2024.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.is_missing_file());

        let err = NoteError::EditorOpen {
            path: PathBuf::from("/notes/01-02-2024.md"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_missing_file());
        assert!(!NoteError::MissingFolder.is_missing_file());
    }

    #[test]
    fn test_messages() {
        assert_eq!(NoteError::MissingFolder.to_string(), "Daily notes path is not set!");
        assert_eq!(NoteError::MissingTemplate.to_string(), "Daily note template is not set!");
    }
}
