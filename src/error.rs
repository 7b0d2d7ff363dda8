use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotesError {
    #[error(transparent)]
    Search(#[from] crate::search::SearchFailure),

    #[error(transparent)]
    Note(#[from] crate::domain::NoteError),

    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type NotesResult<T> = Result<T, NotesError>;
