//! Text matcher: finds notes whose body has a line containing every query
//! term, in order.

use crate::search::failure::SearchFailure;
use crate::search::filter::{ExtensionFilter, walk_notes};
use regex::{Regex, RegexBuilder};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::debug;

const SCAN_MESSAGE: &str = "Could not search through note contents";

/// A note whose body matched, with the first matching line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentMatch {
    pub path: String,
    pub line: String,
}

/// Builds the case-insensitive line pattern: escaped terms joined by `.+?`.
///
/// Each term must appear in the order given, with at least one character
/// between consecutive terms.
pub fn line_pattern<S: AsRef<str>>(terms: &[S]) -> Result<Regex, regex::Error> {
    let pattern = terms
        .iter()
        .map(|t| regex::escape(t.as_ref()))
        .collect::<Vec<_>>()
        .join(".+?");
    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// Scans `root` for notes with a line matching `terms`.
///
/// Returns at most one match per file, in walk order. Paths are relative to
/// `root`. Files are read line by line and reading stops at the first hit.
pub fn find_content_matches<E: AsRef<str>, T: AsRef<str>>(
    root: &Path,
    extensions: &[E],
    terms: &[T],
    cancel: &CancellationToken,
) -> Result<Vec<ContentMatch>, SearchFailure> {
    let filter = ExtensionFilter::new(extensions);
    let pattern = line_pattern(terms).map_err(|e| SearchFailure::scan_failed(SCAN_MESSAGE, e))?;

    debug!(root = %root.display(), pattern = %pattern, "scanning note contents");

    let mut matches = Vec::new();
    walk_notes(root, usize::MAX, &filter, cancel, SCAN_MESSAGE, |note| {
        if let Some(line) = first_matching_line(note.path(), &pattern, cancel)? {
            matches.push(ContentMatch {
                path: note.relative,
                line,
            });
        }
        Ok(())
    })?;

    debug!(count = matches.len(), "content scan finished");
    Ok(matches)
}

/// Reads `path` line by line and returns the first line `pattern` matches.
///
/// Lines end at `\n` only; a trailing `\r` is removed from the returned line.
pub fn first_matching_line(
    path: &Path,
    pattern: &Regex,
    cancel: &CancellationToken,
) -> Result<Option<String>, SearchFailure> {
    let file = File::open(path).map_err(|e| read_failure(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    loop {
        if cancel.is_cancelled() {
            return Err(SearchFailure::cancelled());
        }

        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| read_failure(path, e))?;
        if read == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        let line = String::from_utf8_lossy(&buf);
        if pattern.is_match(&line) {
            return Ok(Some(line.into_owned()));
        }
    }
}

fn read_failure(path: &Path, err: std::io::Error) -> SearchFailure {
    SearchFailure::scan_failed(SCAN_MESSAGE, format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_must_keep_their_order() {
        let pattern = line_pattern(&["who", "snake"]).unwrap();
        assert!(pattern.is_match("Who ordered snakes?"));
        assert!(!pattern.is_match("snakes, who ordered them"));
    }

    #[test]
    fn query_characters_are_literal() {
        let pattern = line_pattern(&["c++"]).unwrap();
        assert!(pattern.is_match("notes on C++ templates"));
        assert!(!pattern.is_match("notes on c templates"));
    }

    #[test]
    fn adjacent_terms_need_a_gap() {
        let pattern = line_pattern(&["ab", "cd"]).unwrap();
        assert!(!pattern.is_match("abcd"));
        assert!(pattern.is_match("ab cd"));
    }
}
