//! User preferences: where the notes live, which files count as notes and
//! how to open them.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_NOTES_DIR: &str = "~/notes";
pub const DEFAULT_EXTENSIONS: &str = "txt,md";

pub const ENV_NOTES_DIR: &str = "NOTESNV_DIR";
pub const ENV_EXTENSIONS: &str = "NOTESNV_EXTENSIONS";
pub const ENV_OPEN_COMMAND: &str = "NOTESNV_OPEN_COMMAND";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("notes directory path is empty")]
    EmptyPath,

    #[error("home directory not found")]
    NoHome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub notes_dir: PathBuf,
    pub extensions: Vec<String>,
    /// Editor command template, `{fn}` is replaced by the note path.
    /// `None` means the system's default opener.
    pub open_command: Option<String>,
}

impl Preferences {
    /// Builds preferences from their raw string form.
    ///
    /// - `notes_dir` may start with `~`, which is expanded to the home directory.
    /// - `extensions` is a comma-separated list; see [`parse_extensions`].
    /// - A blank `open_command` counts as unset.
    ///
    /// # Errors
    /// - [`ConfigError::EmptyPath`] if `notes_dir` is blank
    /// - [`ConfigError::NoHome`] if `~` is used and the home directory is unknown
    pub fn new(
        notes_dir: &str,
        extensions: &str,
        open_command: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            notes_dir: expand_home(notes_dir)?,
            extensions: parse_extensions(extensions),
            open_command: open_command
                .map(str::trim)
                .filter(|cmd| !cmd.is_empty())
                .map(str::to_owned),
        })
    }

    /// Reads `NOTESNV_DIR`, `NOTESNV_EXTENSIONS` and `NOTESNV_OPEN_COMMAND`,
    /// falling back to `~/notes` and `txt,md`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let dir = env::var(ENV_NOTES_DIR).unwrap_or_else(|_| DEFAULT_NOTES_DIR.to_string());
        let exts = env::var(ENV_EXTENSIONS).unwrap_or_default();
        let cmd = env::var(ENV_OPEN_COMMAND).ok();
        Self::new(&dir, &exts, cmd.as_deref())
    }

    /// First configured extension, used for newly created notes.
    pub fn primary_extension(&self) -> Option<&str> {
        self.extensions.first().map(String::as_str)
    }
}

/// Parses a comma-separated extension list such as `"txt, md"`.
///
/// Spaces and a leading dot are dropped, as are empty entries. An empty
/// list falls back to `txt,md`.
pub fn parse_extensions(raw: &str) -> Vec<String> {
    let parse = |s: &str| -> Vec<String> {
        s.replace(' ', "")
            .split(',')
            .map(|ext| ext.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .map(str::to_owned)
            .collect()
    };

    let exts = parse(raw);
    if exts.is_empty() {
        parse(DEFAULT_EXTENSIONS)
    } else {
        exts
    }
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(path: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyPath);
    }

    let rest = match trimmed.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.trim_start_matches('/'),
        _ => return Ok(PathBuf::from(trimmed)),
    };

    let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
    Ok(if rest.is_empty() { home } else { home.join(rest) })
}
