use crate::search::failure::SearchFailure;
use std::path::{Component, Path};
use tokio_util::sync::CancellationToken;
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// Decides which files count as notes, by file-name suffix.
///
/// A name matches when it ends with `.<ext>` (ignoring case) for one of the
/// configured extensions. A bare `.txt` counts as a note too.
#[derive(Debug, Clone)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Self {
        let suffixes = extensions
            .iter()
            .map(|ext| format!(".{}", ext.as_ref().to_lowercase()))
            .collect();
        Self { suffixes }
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn matches(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }
}

/// One note file found by [`walk_notes`].
pub(crate) struct NoteEntry<'a> {
    pub entry: &'a DirEntry,
    /// Path relative to the walk root, `/` separated.
    pub relative: String,
}

impl NoteEntry<'_> {
    pub fn path(&self) -> &Path {
        self.entry.path()
    }

    pub fn file_name(&self) -> String {
        self.entry.file_name().to_string_lossy().into_owned()
    }
}

/// Walks `root` down to `max_depth` levels (1 lists only `root` itself) and
/// hands every regular file accepted by `filter` to `visit`.
///
/// Any walk error fails the whole scan with `user_message`; a fired `cancel`
/// token stops it with a `Cancelled` failure. Entries are visited in file-name
/// order within each directory. Symlinks are not followed.
pub(crate) fn walk_notes<F>(
    root: &Path,
    max_depth: usize,
    filter: &ExtensionFilter,
    cancel: &CancellationToken,
    user_message: &str,
    mut visit: F,
) -> Result<(), SearchFailure>
where
    F: FnMut(NoteEntry<'_>) -> Result<(), SearchFailure>,
{
    for entry in WalkDir::new(root).max_depth(max_depth).sort_by_file_name() {
        if cancel.is_cancelled() {
            return Err(SearchFailure::cancelled());
        }

        let entry = entry.map_err(|e| SearchFailure::scan_failed(user_message, e))?;

        if entry.depth() == 0 {
            if !entry.file_type().is_dir() {
                return Err(SearchFailure::scan_failed(
                    user_message,
                    format!("{} is not a directory", root.display()),
                ));
            }
            continue;
        }

        if !entry.file_type().is_file() {
            continue;
        }

        if !filter.matches(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let relative = relative_path(root, entry.path());
        trace!(path = %relative, "note file");
        visit(NoteEntry {
            entry: &entry,
            relative,
        })?;
    }

    Ok(())
}

fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_match_ignores_case() {
        let filter = ExtensionFilter::new(&["txt", "MD"]);
        assert!(filter.matches("notes.TXT"));
        assert!(filter.matches("readme.md"));
        assert!(!filter.matches("image.gif"));
        assert!(!filter.matches("txt"));
    }

    #[test]
    fn bare_extension_is_a_note() {
        let filter = ExtensionFilter::new(&["txt"]);
        assert!(filter.matches(".txt"));
        assert!(filter.matches("a.txt"));
        assert!(!filter.matches("atxt"));
    }

    #[test]
    fn empty_filter_matches_nothing() {
        let filter = ExtensionFilter::new::<&str>(&[]);
        assert!(filter.is_empty());
        assert!(!filter.matches("a.txt"));
    }
}
