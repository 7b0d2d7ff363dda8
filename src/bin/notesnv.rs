use clap::Parser;
use notesnv_core::config::{self, Preferences};
use notesnv_core::domain::new_note_filename;
use notesnv_core::query::{self, Command};
use notesnv_core::search::{self, SearchFailure};
use notesnv_core::{NotesError, domain};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Search plain-text notes by content and file name.
#[derive(Debug, Parser)]
#[command(name = "notesnv", version)]
struct Cli {
    /// Notes directory.
    #[arg(long, env = config::ENV_NOTES_DIR, default_value = config::DEFAULT_NOTES_DIR)]
    dir: String,

    /// Comma-separated note file extensions.
    #[arg(long, env = config::ENV_EXTENSIONS, default_value = config::DEFAULT_EXTENSIONS)]
    extensions: String,

    /// Maximum number of results to print.
    #[arg(long, default_value_t = 10)]
    limit: usize,

    /// Query words; `| cp` at the end selects the copy command.
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(NotesError::Search(failure)) => {
            report(&failure);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), NotesError> {
    let prefs = Preferences::new(&cli.dir, &cli.extensions, None)?;
    let raw = cli.query.join(" ");
    debug!(dir = %prefs.notes_dir.display(), query = %raw, "starting");

    if raw.is_empty() {
        let recent = search::list_recent_notes(&prefs.notes_dir, &prefs.extensions)?;
        println!("Please enter search query...");
        for name in recent.iter().take(cli.limit) {
            println!("{name}");
        }
        return Ok(());
    }

    let parsed = query::parse(&raw);
    let cancel = CancellationToken::new();
    let search = search::search_notes_async(
        prefs.notes_dir.clone(),
        prefs.extensions.clone(),
        parsed.search_query.clone(),
        cancel.clone(),
    );

    let results = tokio::select! {
        res = search => res?,
        _ = tokio::signal::ctrl_c() => {
            cancel.cancel();
            return Err(SearchFailure::cancelled().into());
        }
    };

    for item in results.iter().take(cli.limit) {
        let label = parsed.command.label();
        let name = if label.is_empty() {
            item.filename().to_string()
        } else {
            format!("{label}: {}", item.filename())
        };
        if item.match_summary().is_empty() {
            println!("{name}");
        } else {
            println!("{name}\t{}", item.match_summary());
        }
    }

    if parsed.command == Command::Open
        && domain::can_create_note(&parsed.search_query, &results, &prefs.extensions)
    {
        if let Some(filename) = new_note_filename(&parsed.search_query, &prefs.extensions) {
            println!("(new note: {filename})");
        }
    }

    Ok(())
}

fn report(failure: &SearchFailure) {
    eprintln!("{}", failure.user_message());
    if let Some(detail) = failure.detail() {
        eprintln!("  {detail}");
    }
}
