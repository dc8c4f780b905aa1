//! Builds immutable [`Directory`] snapshots from the notes root on disk.
//!
//! Subdirectories are read in full down to `max_depth`. Deeper ones are only
//! probed for notes and, if any exist, appear as childless placeholders that
//! [`Scanner::expand`] fills in on demand. A directory with no note anywhere
//! below it never appears in a snapshot.

pub mod concurrent;
pub mod probe;

use crate::config::NotesConfig;
use crate::domain::{Directory, Entry, NoteFile};
use probe::{Kind, Listed};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner {
    extension: String,
    max_depth: usize,
}

impl Scanner {
    pub fn new(extension: impl Into<String>, max_depth: usize) -> Self {
        Scanner {
            extension: extension.into(),
            max_depth,
        }
    }

    pub fn from_config(config: &NotesConfig) -> Self {
        Self::new(config.extension.clone(), config.max_depth)
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Scans `root` on the calling thread. Never fails; unreadable
    /// directories come back without children.
    pub fn scan(&self, root: &Path) -> Directory {
        let dir = self.scan_from(root, 0);
        debug!(root = %root.display(), children = dir.children.len(), "scan finished");
        dir
    }

    /// Reads the real children of a placeholder directory.
    ///
    /// The depth cutoff restarts at `dir`, so the result is what a fresh
    /// scan rooted there would produce.
    pub fn expand(&self, dir: &Path) -> Directory {
        self.scan_from(dir, 0)
    }

    pub(crate) fn scan_from(&self, dir: &Path, depth: usize) -> Directory {
        let listing = probe::list(dir, &self.extension);
        self.assemble(dir, listing, depth)
    }

    pub(crate) fn assemble(&self, dir: &Path, listing: Vec<Listed>, depth: usize) -> Directory {
        let children = listing
            .into_iter()
            .filter_map(|item| match item.kind {
                Kind::Note => Some(Entry::File(NoteFile::new(item.path))),
                Kind::Directory => self.materialize_directory(&item.path, depth),
            })
            .collect();

        Directory::new(dir.to_path_buf(), children)
    }

    /// Turns a subdirectory found at `depth` into an entry, or `None` if it
    /// holds no notes.
    pub(crate) fn materialize_directory(&self, path: &Path, depth: usize) -> Option<Entry> {
        if depth < self.max_depth {
            let dir = self.scan_from(path, depth + 1);
            (!dir.children.is_empty()).then_some(Entry::Directory(dir))
        } else if probe::has_content(path, &self.extension) {
            Some(Entry::Directory(Directory::placeholder(path.to_path_buf())))
        } else {
            None
        }
    }
}
