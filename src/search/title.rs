//! Title matcher: finds notes whose file name contains every query term.

use crate::search::failure::SearchFailure;
use crate::search::filter::{ExtensionFilter, walk_notes};
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const SCAN_MESSAGE: &str = "Could not search for note files";

/// True when `file_name` contains each of `terms` as a substring, ignoring
/// case. Terms are matched independently, so their order does not matter.
pub fn name_contains_all<T: AsRef<str>>(file_name: &str, terms: &[T]) -> bool {
    let name = file_name.to_lowercase();
    terms
        .iter()
        .all(|term| name.contains(&term.as_ref().to_lowercase()))
}

/// Scans `root` for notes whose file name matches every term.
///
/// Only the final path component is compared. The returned relative paths
/// carry no meaningful order.
pub fn find_title_matches<E: AsRef<str>, T: AsRef<str>>(
    root: &Path,
    extensions: &[E],
    terms: &[T],
    cancel: &CancellationToken,
) -> Result<Vec<String>, SearchFailure> {
    let filter = ExtensionFilter::new(extensions);
    debug!(root = %root.display(), terms = terms.len(), "scanning note titles");

    let mut matches = Vec::new();
    walk_notes(root, usize::MAX, &filter, cancel, SCAN_MESSAGE, |note| {
        if name_contains_all(&note.file_name(), terms) {
            matches.push(note.relative);
        }
        Ok(())
    })?;

    debug!(count = matches.len(), "title scan finished");
    Ok(matches)
}
