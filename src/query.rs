//! Parsing of `search terms | command` input.
//!
//! A query may end with `| <command>` to pick what happens to the chosen
//! note. Unknown commands fall back to opening it.

pub const COMMAND_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the note in an editor.
    Open,
    /// Copy the note's text to the clipboard.
    Copy,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "cp" => Some(Command::Copy),
            _ => None,
        }
    }

    /// Prefix shown on result items for this command, empty for `Open`.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Open => "",
            Command::Copy => "Copy to clipboard",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryCommand {
    pub command: Command,
    pub search_query: String,
}

/// Splits raw launcher input into the search query and a command.
///
/// Only the first `|` separates; surrounding spaces are trimmed and the
/// command name is matched case-insensitively.
pub fn parse(raw: &str) -> QueryCommand {
    let Some((query, cmd)) = raw.split_once(COMMAND_SEPARATOR) else {
        return QueryCommand {
            command: Command::Open,
            search_query: raw.to_string(),
        };
    };

    let query = query.trim_matches(' ');
    let cmd = cmd.trim_matches(' ').to_lowercase();

    QueryCommand {
        command: Command::from_name(&cmd).unwrap_or(Command::Open),
        search_query: query.to_string(),
    }
}
