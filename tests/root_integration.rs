use rough_notes::{NoteRepository, NotesConfig, NotesError, NotesRoot};
use std::fs;
use tempfile::TempDir;
use uuid::Uuid;

/// Helper: generate a unique root name so runs don't collide
fn test_root_name(name: &str) -> String {
    format!("test_{}_{}", name, Uuid::new_v4())
}

#[test]
fn ensure_creates_and_seeds_missing_root() -> Result<(), NotesError> {
    let tmpdir = TempDir::new()?;
    let config = NotesConfig::with_root(tmpdir.path().join(test_root_name("seed")).join("Notes"));

    let root = NotesRoot::ensure_exists(&config)?;

    assert!(root.path.is_dir());
    let welcome = root.welcome_path("md");
    assert_eq!(welcome.file_name().unwrap(), "Welcome.md");
    let text = fs::read_to_string(&welcome)?;
    assert!(text.starts_with("# Welcome"));
    assert!(text.contains(&root.path.display().to_string()));

    Ok(())
}

#[test]
fn ensure_leaves_existing_root_alone() -> Result<(), NotesError> {
    let tmpdir = TempDir::new()?;
    let config = NotesConfig::with_root(tmpdir.path().join(test_root_name("existing")));

    let root = NotesRoot::ensure_exists(&config)?;
    fs::remove_file(root.welcome_path("md"))?;

    let reopened = NotesRoot::ensure_exists(&config)?;
    assert_eq!(reopened, root);
    assert!(!reopened.welcome_path("md").exists());

    Ok(())
}

#[test]
fn opening_missing_root_fails() {
    let tmpdir = TempDir::new().unwrap();
    let result = NotesRoot::open(&tmpdir.path().join(test_root_name("missing")));

    assert!(matches!(result, Err(NotesError::NotFound(_))));
}

#[test]
fn opening_a_file_as_root_fails() {
    let tmpdir = TempDir::new().unwrap();
    let file = tmpdir.path().join("notes.md");
    fs::write(&file, "").unwrap();

    assert!(matches!(NotesRoot::open(&file), Err(NotesError::NotADirectory(_))));
}

#[test]
fn first_tree_shows_the_welcome_note() -> Result<(), NotesError> {
    let tmpdir = TempDir::new()?;
    let config = NotesConfig::with_root(tmpdir.path().join("Notes"));

    let repo = NoteRepository::open(&config)?;
    let tree = repo.load_tree();

    assert_eq!(tree.children.len(), 1);
    assert_eq!(tree.children[0].name(), "Welcome.md");
    assert_eq!(tree.path, repo.root());

    Ok(())
}
