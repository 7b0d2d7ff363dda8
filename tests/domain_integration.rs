use notesnv_core::domain::{
    NewNote, NoteError, can_create_note, new_note_filename, note_title_from_query,
};
use notesnv_core::search::search_notes;
use std::fs;
use tempfile::TempDir;

#[test]
fn title_drops_unsafe_characters() {
    assert_eq!(note_title_from_query("  hello,   world! "), "hello world");
    assert_eq!(note_title_from_query("snippet: apt-get_install"), "snippet apt-get_install");
    assert_eq!(note_title_from_query("../../etc/passwd"), "etcpasswd");
    assert_eq!(note_title_from_query("?!*"), "");
}

#[test]
fn filename_uses_first_extension() {
    assert_eq!(
        new_note_filename("py cheat", &["md", "txt"]),
        Some("py cheat.md".to_string())
    );
    assert_eq!(new_note_filename("***", &["md"]), None);
    assert_eq!(new_note_filename::<&str>("py", &[]), None);
}

#[test]
fn create_empty_note() -> Result<(), NoteError> {
    let tmpdir = TempDir::new().unwrap();

    let note = NewNote::from_query("Shopping list!", tmpdir.path(), &["txt"])?;
    assert_eq!(note.title, "Shopping list");
    assert!(note.path.ends_with("Shopping list.txt"));

    note.create_empty()?;
    assert!(note.path.exists());
    assert_eq!(fs::read_to_string(&note.path).unwrap(), "");

    Ok(())
}

#[test]
fn create_note_with_text() -> Result<(), NoteError> {
    let tmpdir = TempDir::new().unwrap();

    let note = NewNote::from_query("clip", tmpdir.path(), &["md"])?;
    note.create_with_text("pasted text")?;

    assert_eq!(fs::read_to_string(&note.path).unwrap(), "pasted text\n");
    Ok(())
}

#[test]
fn existing_note_is_not_overwritten() -> Result<(), NoteError> {
    let tmpdir = TempDir::new().unwrap();
    fs::write(tmpdir.path().join("todo.txt"), "keep me").unwrap();

    let note = NewNote::from_query("todo", tmpdir.path(), &["txt"])?;
    let result = note.create_with_text("replacement");

    assert!(matches!(result, Err(NoteError::AlreadyExists(_))));
    assert_eq!(fs::read_to_string(&note.path).unwrap(), "keep me");
    Ok(())
}

#[test]
fn unusable_query_is_rejected() {
    let tmpdir = TempDir::new().unwrap();
    assert!(matches!(
        NewNote::from_query("!!!", tmpdir.path(), &["txt"]),
        Err(NoteError::InvalidTitle)
    ));
    assert!(matches!(
        NewNote::from_query::<&str>("ok", tmpdir.path(), &[]),
        Err(NoteError::NoExtension)
    ));
}

#[test]
fn offer_creation_only_for_new_titles() {
    let tmpdir = TempDir::new().unwrap();
    fs::write(tmpdir.path().join("python cheatsheet.txt"), "").unwrap();
    let exts = ["txt", "md"];

    let results = search_notes(tmpdir.path(), &exts, "python cheatsheet").unwrap();
    assert!(!can_create_note("python cheatsheet", &results, &exts));

    let results = search_notes(tmpdir.path(), &exts, "python").unwrap();
    assert!(can_create_note("python", &results, &exts));
    assert!(!can_create_note("???", &results, &exts));
}
