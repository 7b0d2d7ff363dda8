use crate::search::failure::SearchFailure;
use crate::search::filter::{ExtensionFilter, walk_notes};
use std::cmp::Reverse;
use std::path::Path;
use std::time::SystemTime;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const SCAN_MESSAGE: &str = "Could not get a directory listing";

/// Lists the notes directly inside `root`, most recently modified first.
///
/// Subdirectories and hidden files (names starting with `.`) are skipped.
/// Notes with the same modification time are ordered by name.
pub fn list_recent<E: AsRef<str>>(
    root: &Path,
    extensions: &[E],
    cancel: &CancellationToken,
) -> Result<Vec<String>, SearchFailure> {
    let filter = ExtensionFilter::new(extensions);

    let mut notes: Vec<(SystemTime, String)> = Vec::new();
    walk_notes(root, 1, &filter, cancel, SCAN_MESSAGE, |note| {
        if note.file_name().starts_with('.') {
            return Ok(());
        }
        let meta = note
            .entry
            .metadata()
            .map_err(|e| SearchFailure::scan_failed(SCAN_MESSAGE, e))?;
        let modified = meta
            .modified()
            .map_err(|e| SearchFailure::scan_failed(SCAN_MESSAGE, e))?;
        notes.push((modified, note.relative));
        Ok(())
    })?;

    notes.sort_by(|a, b| Reverse(a.0).cmp(&Reverse(b.0)).then_with(|| a.1.cmp(&b.1)));
    debug!(count = notes.len(), "listed recent notes");

    Ok(notes.into_iter().map(|(_, path)| path).collect())
}
