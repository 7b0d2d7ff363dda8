use crate::search::{SearchResultItem, contains_filename_match};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum NoteError {
    #[error("invalid path")]
    InvalidPath,
    #[error("invalid title")]
    InvalidTitle,
    #[error("no note file extension configured")]
    NoExtension,
    #[error("note already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
    #[error(transparent)]
    FileError(std::io::Error),
}

/// Turns a search query into a title that is safe to use as a file name.
///
/// Keeps ASCII letters, digits, spaces, `_` and `-`, collapses runs of
/// spaces and trims both ends. The result may be empty.
pub fn note_title_from_query(query: &str) -> String {
    let kept: String = query
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// File name for a note created from `query`, using the first extension.
///
/// `None` if the query has no usable title characters or no extension is
/// configured.
pub fn new_note_filename<E: AsRef<str>>(query: &str, extensions: &[E]) -> Option<String> {
    let title = note_title_from_query(query);
    let ext = extensions.first()?;
    if title.is_empty() {
        return None;
    }
    Some(format!("{}.{}", title, ext.as_ref()))
}

/// Whether `query` can become a new note: it yields a title and no search
/// result already carries that name with one of `extensions`.
pub fn can_create_note<E: AsRef<str>>(
    query: &str,
    results: &[SearchResultItem],
    extensions: &[E],
) -> bool {
    let title = note_title_from_query(query);
    !title.is_empty() && !contains_filename_match(results, &title, extensions)
}

/// A note that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub path: PathBuf,
}

impl NewNote {
    /// Derives the note's title and path inside `notes_dir` from a query.
    ///
    /// Returns `InvalidTitle` when nothing usable is left of the query and
    /// `NoExtension` when `extensions` is empty.
    pub fn from_query<E: AsRef<str>>(
        query: &str,
        notes_dir: &Path,
        extensions: &[E],
    ) -> Result<NewNote, NoteError> {
        let ext = extensions.first().ok_or(NoteError::NoExtension)?;
        let title = note_title_from_query(query);
        if title.is_empty() {
            return Err(NoteError::InvalidTitle);
        }

        let path = notes_dir.join(format!("{}.{}", title, ext.as_ref()));
        Ok(NewNote { title, path })
    }

    /// Creates the note as an empty file.
    pub fn create_empty(&self) -> Result<(), NoteError> {
        Self::write_exclusive(&self.path, b"")
    }

    /// Creates the note holding `text` followed by a newline.
    pub fn create_with_text(&self, text: &str) -> Result<(), NoteError> {
        let mut data = String::with_capacity(text.len() + 1);
        data.push_str(text);
        data.push('\n');
        Self::write_exclusive(&self.path, data.as_bytes())
    }

    /// Writes `data` to a temporary file next to `path`, then moves it into
    /// place only if nothing exists there yet.
    ///
    /// An existing note is never overwritten; that case is `AlreadyExists`.
    fn write_exclusive(path: &Path, data: &[u8]) -> Result<(), NoteError> {
        let dir = path.parent().ok_or(NoteError::InvalidPath)?;
        let mut tmp = NamedTempFile::new_in(dir).map_err(NoteError::FileError)?;
        tmp.write_all(data).map_err(NoteError::FileError)?;
        tmp.persist_noclobber(path).map_err(|e| match e.error.kind() {
            ErrorKind::AlreadyExists => NoteError::AlreadyExists(path.to_path_buf()),
            _ => NoteError::FileError(e.error),
        })?;

        info!(path = %path.display(), "created note");
        Ok(())
    }
}
