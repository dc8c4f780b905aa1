use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a typed path string into a note location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path has no usable segments")]
    EmptyPath,
    #[error("invalid name: {0:?}")]
    InvalidName(String),
}

#[derive(Debug, Error)]
pub enum NotesError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("not a note file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    Runtime(String),
}

impl From<tempfile::PersistError> for NotesError {
    fn from(err: tempfile::PersistError) -> Self {
        NotesError::Io(err.error)
    }
}

impl From<tokio::task::JoinError> for NotesError {
    fn from(err: tokio::task::JoinError) -> Self {
        NotesError::Runtime(err.to_string())
    }
}

pub type NotesResult<T> = Result<T, NotesError>;
