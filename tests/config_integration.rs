use notesnv_core::config::{ConfigError, Preferences, expand_home, parse_extensions};
use std::path::PathBuf;

#[test]
fn extensions_are_cleaned() {
    assert_eq!(parse_extensions("txt, md"), vec!["txt", "md"]);
    assert_eq!(parse_extensions(".org,,rst "), vec!["org", "rst"]);
}

#[test]
fn empty_extensions_fall_back_to_defaults() {
    assert_eq!(parse_extensions(""), vec!["txt", "md"]);
    assert_eq!(parse_extensions(" , "), vec!["txt", "md"]);
}

#[test]
fn absolute_path_is_kept() {
    assert_eq!(expand_home("/srv/notes").unwrap(), PathBuf::from("/srv/notes"));
}

#[test]
fn tilde_expands_to_home() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    assert_eq!(expand_home("~/notes").unwrap(), home.join("notes"));
    assert_eq!(expand_home("~").unwrap(), home);
}

#[test]
fn tilde_user_is_not_expanded() {
    assert_eq!(expand_home("~bob/notes").unwrap(), PathBuf::from("~bob/notes"));
}

#[test]
fn blank_path_is_rejected() {
    assert!(matches!(expand_home("   "), Err(ConfigError::EmptyPath)));
}

#[test]
fn preferences_from_raw_values() {
    let prefs = Preferences::new("/srv/notes", "md,txt", Some("  ")).unwrap();

    assert_eq!(prefs.notes_dir, PathBuf::from("/srv/notes"));
    assert_eq!(prefs.extensions, vec!["md", "txt"]);
    assert_eq!(prefs.primary_extension(), Some("md"));
    assert_eq!(prefs.open_command, None);

    let prefs = Preferences::new("/srv/notes", "", Some("gedit {fn}")).unwrap();
    assert_eq!(prefs.open_command.as_deref(), Some("gedit {fn}"));
    assert_eq!(prefs.extensions, vec!["txt", "md"]);
}
