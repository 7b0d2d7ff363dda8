//! Note search over a directory of plain-text files.
//!
//! Every query walks the notes directory afresh; there is no index and no
//! cache between calls. A search runs two independent scans:
//!
//! - **content**: the first line of each note that contains all query terms,
//!   in the order typed ([`content`])
//! - **title**: notes whose file name contains all terms, in any order
//!   ([`title`])
//!
//! The two result sets are then merged, deduplicated and ordered by
//! [`rank::rank`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use notesnv_core::search::{search_notes, list_recent_notes};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let root = Path::new("/home/me/notes");
//! let extensions = ["txt", "md"];
//!
//! for item in search_notes(root, &extensions, "python cheat")?.iter().take(10) {
//!     println!("{}  {}", item.filename(), item.match_summary());
//! }
//!
//! // Empty query: show the most recently edited notes instead.
//! let recent = list_recent_notes(root, &extensions)?;
//! # Ok(())
//! # }
//! ```
//!
//! All functions here block on filesystem I/O. From async code use
//! [`search_notes_async`], which moves both scans onto tokio's blocking pool.

pub mod content;
pub mod failure;
pub mod filter;
pub mod rank;
pub mod recent;
pub mod summary;
pub mod title;

pub use content::{ContentMatch, find_content_matches};
pub use failure::{FailureKind, SearchFailure};
pub use filter::ExtensionFilter;
pub use rank::{SearchResultItem, rank};
pub use recent::list_recent;
pub use summary::{CONTEXT_CHARS, summarize};
pub use title::find_title_matches;

use std::path::{Path, PathBuf};
use std::thread;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// A query split into terms.
///
/// Terms are separated by single spaces. `typed` keeps the user's casing and
/// drives summaries and ranking; `lower` is what the scans match against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms {
    pub typed: Vec<String>,
    pub lower: Vec<String>,
}

impl QueryTerms {
    pub fn parse(query: &str) -> Self {
        let typed: Vec<String> = query.split(' ').map(str::to_owned).collect();
        let lower = typed.iter().map(|t| t.to_lowercase()).collect();
        Self { typed, lower }
    }
}

/// Searches note contents and file names under `root` and returns the
/// merged, ranked results.
///
/// `query` must be non-empty; use [`list_recent_notes`] for the empty case.
/// Finding nothing is `Ok` with an empty vector. If either scan fails the
/// whole search fails.
pub fn search_notes<E: AsRef<str> + Sync>(
    root: &Path,
    extensions: &[E],
    query: &str,
) -> Result<Vec<SearchResultItem>, SearchFailure> {
    search_notes_with_cancel(root, extensions, query, &CancellationToken::new())
}

/// Like [`search_notes`], but gives up with [`FailureKind::Cancelled`] as
/// soon as `cancel` fires.
///
/// The content and title scans run on two threads. When one of them fails,
/// the other is stopped early.
pub fn search_notes_with_cancel<E: AsRef<str> + Sync>(
    root: &Path,
    extensions: &[E],
    query: &str,
    cancel: &CancellationToken,
) -> Result<Vec<SearchResultItem>, SearchFailure> {
    let terms = QueryTerms::parse(query);
    let scan = cancel.child_token();
    debug!(root = %root.display(), query, "searching notes");

    let (content, titles) = thread::scope(|s| {
        let content = s.spawn(|| {
            stop_on_error(&scan, find_content_matches(root, extensions, &terms.lower, &scan))
        });
        let titles = stop_on_error(&scan, find_title_matches(root, extensions, &terms.lower, &scan));
        let content = content
            .join()
            .unwrap_or_else(|_| Err(SearchFailure::tool_unavailable("content scan panicked")));
        (content, titles)
    });

    merge(content, titles, &terms, cancel)
}

/// Async form of [`search_notes_with_cancel`].
///
/// Both scans run concurrently on tokio's blocking pool; ranking waits for
/// both. A scan task that panics or is torn down surfaces as
/// [`FailureKind::ToolUnavailable`].
pub async fn search_notes_async(
    root: PathBuf,
    extensions: Vec<String>,
    query: String,
    cancel: CancellationToken,
) -> Result<Vec<SearchResultItem>, SearchFailure> {
    let terms = QueryTerms::parse(&query);
    let scan = cancel.child_token();
    debug!(root = %root.display(), query = %query, "searching notes");

    let content_task = {
        let (root, extensions, lower, scan) =
            (root.clone(), extensions.clone(), terms.lower.clone(), scan.clone());
        tokio::task::spawn_blocking(move || {
            stop_on_error(&scan, find_content_matches(&root, &extensions, &lower, &scan))
        })
    };
    let title_task = {
        let (lower, scan) = (terms.lower.clone(), scan.clone());
        tokio::task::spawn_blocking(move || {
            stop_on_error(&scan, find_title_matches(&root, &extensions, &lower, &scan))
        })
    };

    let (content, titles) = tokio::join!(content_task, title_task);
    let content = content.unwrap_or_else(|e| Err(SearchFailure::tool_unavailable(e)));
    let titles = titles.unwrap_or_else(|e| Err(SearchFailure::tool_unavailable(e)));

    merge(content, titles, &terms, &cancel)
}

/// Lists notes under `root`, most recently modified first.
pub fn list_recent_notes<E: AsRef<str>>(
    root: &Path,
    extensions: &[E],
) -> Result<Vec<String>, SearchFailure> {
    list_recent(root, extensions, &CancellationToken::new())
}

/// Whether `results` already contain a note named `title` with one of
/// `extensions`, ignoring case.
///
/// Front ends use this to decide whether to offer creating `title` as a new
/// note.
pub fn contains_filename_match<E: AsRef<str>>(
    results: &[SearchResultItem],
    title: &str,
    extensions: &[E],
) -> bool {
    let title = title.to_lowercase();
    let candidates: Vec<String> = extensions
        .iter()
        .map(|ext| format!("{}.{}", title, ext.as_ref().to_lowercase()))
        .collect();

    results
        .iter()
        .any(|item| candidates.iter().any(|c| c == item.filename_lower()))
}

fn stop_on_error<T>(
    scan: &CancellationToken,
    result: Result<T, SearchFailure>,
) -> Result<T, SearchFailure> {
    if result.is_err() {
        scan.cancel();
    }
    result
}

fn merge(
    content: Result<Vec<ContentMatch>, SearchFailure>,
    titles: Result<Vec<String>, SearchFailure>,
    terms: &QueryTerms,
    cancel: &CancellationToken,
) -> Result<Vec<SearchResultItem>, SearchFailure> {
    let outcome = match (content, titles) {
        (Ok(content), Ok(titles)) => Ok(rank(content, titles, &terms.typed)),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => Err(e),
        // One scan failing cancels the other; report the real cause.
        (Err(a), Err(b)) => {
            if a.kind() == FailureKind::Cancelled && !cancel.is_cancelled() {
                Err(b)
            } else {
                Err(a)
            }
        }
    };

    match &outcome {
        Ok(items) => debug!(count = items.len(), "search finished"),
        Err(e) => warn!(kind = %e.kind(), detail = e.detail().unwrap_or_default(), "{}", e),
    }
    outcome
}
