use crate::domain::ordering::natural_cmp;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Note,
    Directory,
}

/// A visible child of a directory that the tree model cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listed {
    pub path: PathBuf,
    pub name: String,
    pub kind: Kind,
}

/// Lists the notes and subdirectories directly inside `dir`, in display order.
///
/// Hidden entries and files without the note extension are skipped. An
/// unreadable directory lists as empty.
pub fn list(dir: &Path, extension: &str) -> Vec<Listed> {
    let mut listed = match read_visible(dir, extension) {
        Ok(listed) => listed,
        Err(err) => {
            warn!(path = %dir.display(), error = %err, "unreadable directory treated as empty");
            return Vec::new();
        }
    };

    listed.sort_by(|a, b| natural_cmp(&a.name, &b.name));
    listed
}

/// Whether `dir` holds a note anywhere below it.
///
/// Stops at the first note found; notes directly inside `dir` are checked
/// before any subdirectory is opened.
pub fn has_content(dir: &Path, extension: &str) -> bool {
    let listed = match read_visible(dir, extension) {
        Ok(listed) => listed,
        Err(err) => {
            debug!(path = %dir.display(), error = %err, "content probe failed");
            return false;
        }
    };

    if listed.iter().any(|item| item.kind == Kind::Note) {
        return true;
    }

    listed
        .iter()
        .filter(|item| item.kind == Kind::Directory)
        .any(|item| has_content(&item.path, extension))
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

pub fn is_note(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(extension)
}

fn read_visible(dir: &Path, extension: &str) -> io::Result<Vec<Listed>> {
    let mut listed = Vec::new();

    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_hidden(&name) {
            continue;
        }

        let path = entry.path();
        if let Some(kind) = classify(&entry, &path, extension) {
            listed.push(Listed { path, name, kind });
        }
    }

    Ok(listed)
}

/// Symlinks are classified by what they point at.
fn classify(entry: &fs::DirEntry, path: &Path, extension: &str) -> Option<Kind> {
    let file_type = entry.file_type().ok()?;
    let is_dir = if file_type.is_symlink() {
        fs::metadata(path).ok()?.is_dir()
    } else {
        file_type.is_dir()
    };

    if is_dir {
        Some(Kind::Directory)
    } else if is_note(path, extension) {
        Some(Kind::Note)
    } else {
        None
    }
}
