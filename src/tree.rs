use crate::domain::{Directory, Entry};
use std::sync::{Arc, PoisonError, RwLock};

/// Holds the latest tree snapshot.
///
/// Snapshots are never edited in place; [`TreeStore::replace`] swaps in a
/// whole new one, and readers keep whatever `Arc` they already hold.
#[derive(Debug, Default)]
pub struct TreeStore {
    current: RwLock<Option<Arc<Directory>>>,
}

impl TreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&self, snapshot: Directory) -> Arc<Directory> {
        let snapshot = Arc::new(snapshot);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// The current snapshot, or `None` before the first scan has been applied.
    pub fn snapshot(&self) -> Option<Arc<Directory>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Looks up an entry of the current snapshot by identity, the root included.
    pub fn find(&self, id: &str) -> Option<Entry> {
        let snapshot = self.snapshot()?;
        if snapshot.id == id {
            return Some(Entry::Directory(Directory::clone(&snapshot)));
        }
        Self::find_in(id, &snapshot).cloned()
    }

    /// Depth-first search of `tree`'s descendants for the first entry whose
    /// identity is `id`. `tree` itself is not an [`Entry`] and never matches;
    /// [`TreeStore::find`] checks the root separately.
    pub fn find_in<'a>(id: &str, tree: &'a Directory) -> Option<&'a Entry> {
        tree.walk().find(|entry| entry.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteFile;
    use std::path::PathBuf;

    fn sample() -> Directory {
        let nested = Directory::new(
            PathBuf::from("/notes/work"),
            vec![Entry::File(NoteFile::new(PathBuf::from("/notes/work/plan.md")))],
        );
        Directory::new(
            PathBuf::from("/notes"),
            vec![
                Entry::File(NoteFile::new(PathBuf::from("/notes/inbox.md"))),
                Entry::Directory(nested),
            ],
        )
    }

    #[test]
    fn empty_store_finds_nothing() {
        let store = TreeStore::new();
        assert!(!store.is_loaded());
        assert!(store.find("/notes/inbox.md").is_none());
    }

    #[test]
    fn find_reaches_nested_entries() {
        let store = TreeStore::new();
        store.replace(sample());

        let found = store.find("/notes/work/plan.md").unwrap();
        assert!(found.is_file());
        assert_eq!(found.name(), "plan.md");

        let dir = store.find("/notes/work").unwrap();
        assert_eq!(dir.as_directory().unwrap().children.len(), 1);
    }

    #[test]
    fn root_is_found_by_identity() {
        let store = TreeStore::new();
        store.replace(sample());

        let root = store.find("/notes").unwrap();
        assert_eq!(root.as_directory().unwrap().children.len(), 2);
        assert!(TreeStore::find_in("/notes", &store.snapshot().unwrap()).is_none());
    }

    #[test]
    fn replace_keeps_old_snapshot_alive_for_readers() {
        let store = TreeStore::new();
        let old = store.replace(sample());
        store.replace(Directory::placeholder(PathBuf::from("/notes")));

        assert!(TreeStore::find_in("/notes/inbox.md", &old).is_some());
        assert!(store.find("/notes/inbox.md").is_none());
    }
}
