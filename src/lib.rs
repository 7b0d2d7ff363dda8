//! # notesnv_core
//!
//! Search engine and helpers for a NotationalVelocity-style notes launcher:
//! type a few words, get the matching plain-text notes back, best first.
//!
//! ## Features
//!
//! - **Note Search**: in-process scan of note contents and file names, no index to keep in sync
//! - **Ranking**: whole-word hits near the start of the file name come first
//! - **Summaries**: each content hit carries a short snippet around the first query term
//! - **Cancellation**: long scans can be aborted through a [`CancellationToken`]
//! - **Async**: [`search::search_notes_async`] runs both scans on tokio's blocking pool
//! - **Note Creation**: turn an unmatched query into a new note without clobbering files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notesnv_core::config::Preferences;
//! use notesnv_core::search::search_notes;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let prefs = Preferences::new("~/notes", "txt,md", None)?;
//! let results = search_notes(&prefs.notes_dir, &prefs.extensions, "python cheat")?;
//!
//! for item in results.iter().take(10) {
//!     println!("{} {}", item.filename(), item.match_summary());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`search`]**: content and title scans, summaries, ranking, recent notes
//! - **[`config`]**: notes directory and extension preferences
//! - **[`query`]**: `terms | command` parsing
//! - **[`domain`]**: deriving and creating new notes from a query
//! - **[`launch`]**: argument lists for the user's editor command
//! - **[`actions`]**: bounded token registry for deferred actions
//! - **[`error`]**: unified error type
//!
//! ## Error Handling
//!
//! Searches fail with [`search::SearchFailure`], which carries a short
//! message for the user and an optional diagnostic. Every module error
//! converts into [`NotesError`], so `?` works across modules:
//!
//! ```rust,no_run
//! use notesnv_core::{NotesResult, config::Preferences, search::search_notes};
//!
//! fn top_hit(query: &str) -> NotesResult<Option<String>> {
//!     let prefs = Preferences::from_env()?;
//!     let results = search_notes(&prefs.notes_dir, &prefs.extensions, query)?;
//!     Ok(results.first().map(|item| item.filename().to_string()))
//! }
//! ```
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

pub mod actions;
pub mod config;
pub mod domain;
pub mod error;
pub mod launch;
pub mod query;
pub mod search;

/// Re-exports the most commonly used types for convenience.
pub use error::{NotesError, NotesResult};
pub use search::{SearchFailure, SearchResultItem};
