pub mod ordering;

use std::path::{Path, PathBuf};

/// A note file as seen by one scan.
///
/// Never mutated after construction; a rescan builds a fresh one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteFile {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
}

impl NoteFile {
    pub fn new(path: PathBuf) -> Self {
        NoteFile {
            id: identity_of(&path),
            name: display_name(&path),
            path,
        }
    }
}

/// A directory node together with its already-sorted children.
///
/// A directory materialized at the lazy depth cutoff has no children here
/// even though it holds notes on disk; see [`crate::scanner::Scanner::expand`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directory {
    pub id: String,
    pub name: String,
    pub path: PathBuf,
    pub children: Vec<Entry>,
}

impl Directory {
    pub fn new(path: PathBuf, children: Vec<Entry>) -> Self {
        Directory {
            id: identity_of(&path),
            name: display_name(&path),
            path,
            children,
        }
    }

    /// A directory whose children have not been read yet.
    pub fn placeholder(path: PathBuf) -> Self {
        Self::new(path, Vec::new())
    }

    /// Depth-first, pre-order iterator over every descendant entry.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Number of note files reachable from this directory in the snapshot.
    pub fn note_count(&self) -> usize {
        self.walk().filter(|entry| entry.is_file()).count()
    }
}

/// A node of the notes tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    File(NoteFile),
    Directory(Directory),
}

impl Entry {
    /// Stable identity across rescans: the canonical absolute path string.
    pub fn id(&self) -> &str {
        match self {
            Entry::File(file) => &file.id,
            Entry::Directory(dir) => &dir.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::File(file) => &file.name,
            Entry::Directory(dir) => &dir.name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Entry::File(file) => &file.path,
            Entry::Directory(dir) => &dir.path,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Entry::File(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }
}

pub struct Walk<'a> {
    stack: Vec<&'a Entry>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        if let Entry::Directory(dir) = entry {
            self.stack.extend(dir.children.iter().rev());
        }
        Some(entry)
    }
}

fn identity_of(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| identity_of(path))
}
