use crate::error::{NotesError, NotesResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads a note as UTF-8, or `None` if it cannot be read or decoded.
pub fn read(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Writes `data` to `path` through a temporary file in the same directory,
/// so the note is never left half-written.
pub fn write_atomic(path: &Path, data: &[u8]) -> NotesResult<()> {
    let tmp = staged(path, data)?;
    tmp.persist(path)?;
    Ok(())
}

/// Like [`write_atomic`] but refuses to replace an existing file.
///
/// # Errors
/// - [`NotesError::AlreadyExists`] if something already lives at `path`
pub fn create_atomic(path: &Path, data: &[u8]) -> NotesResult<()> {
    if fs::symlink_metadata(path).is_ok() {
        return Err(NotesError::AlreadyExists(path.to_path_buf()));
    }

    let tmp = staged(path, data)?;
    tmp.persist_noclobber(path).map_err(|err| match err.error.kind() {
        ErrorKind::AlreadyExists => NotesError::AlreadyExists(path.to_path_buf()),
        _ => NotesError::Io(err.error),
    })?;
    Ok(())
}

/// Removes a file, or a directory with everything inside it.
pub fn remove(path: &Path) -> NotesResult<()> {
    let meta = fs::symlink_metadata(path)?;
    if meta.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn staged(path: &Path, data: &[u8]) -> NotesResult<NamedTempFile> {
    let dir = path
        .parent()
        .ok_or_else(|| NotesError::NotFound(path.to_path_buf()))?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_replaces_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("note.md");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(read(&path).as_deref(), Some("second"));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[test]
    fn create_refuses_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("note.md");
        fs::write(&path, "keep me").unwrap();

        let err = create_atomic(&path, b"clobber").unwrap_err();
        assert!(matches!(err, NotesError::AlreadyExists(_)));
        assert_eq!(read(&path).as_deref(), Some("keep me"));
    }

    #[test]
    fn remove_handles_directories() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("folder");
        fs::create_dir_all(dir.join("inner")).unwrap();
        fs::write(dir.join("inner/note.md"), "").unwrap();

        remove(&dir).unwrap();
        assert!(!dir.exists());
        assert!(remove(&dir).is_err());
    }
}
