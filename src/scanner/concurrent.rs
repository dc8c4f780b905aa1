use super::Scanner;
use super::probe::{self, Kind};
use crate::domain::{Directory, Entry, NoteFile};
use crate::error::{NotesError, NotesResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::task::{self, JoinSet};
use tracing::{debug, warn};

impl Scanner {
    /// Same result as [`Scanner::scan`], with each top-level subdirectory
    /// scanned on its own blocking task.
    ///
    /// Only the root's direct subdirectories fan out; below that every task
    /// scans sequentially. With fewer than two subdirectories the whole scan
    /// runs on a single task.
    pub async fn scan_concurrent(&self, root: &Path) -> Directory {
        let root = root.to_path_buf();

        let listing = {
            let dir = root.clone();
            let extension = self.extension.clone();
            match blocking(move || probe::list(&dir, &extension)).await {
                Ok(listing) => listing,
                Err(err) => {
                    warn!(root = %root.display(), error = %err, "root listing task failed");
                    return Directory::placeholder(root);
                }
            }
        };

        let subdirs: Vec<PathBuf> = listing
            .iter()
            .filter(|item| item.kind == Kind::Directory)
            .map(|item| item.path.clone())
            .collect();

        if subdirs.len() < 2 {
            let scanner = self.clone();
            let dir = root.clone();
            return match blocking(move || scanner.assemble(&dir, listing, 0)).await {
                Ok(dir) => dir,
                Err(err) => {
                    warn!(root = %root.display(), error = %err, "scan task failed");
                    Directory::placeholder(root)
                }
            };
        }

        debug!(root = %root.display(), tasks = subdirs.len(), "fanning out top-level scan");

        let mut tasks = JoinSet::new();
        for path in subdirs {
            let scanner = self.clone();
            tasks.spawn_blocking(move || {
                let entry = scanner.materialize_directory(&path, 0);
                (path, entry)
            });
        }

        let mut loaded: HashMap<PathBuf, Entry> = HashMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined.map_err(NotesError::from) {
                Ok((path, Some(entry))) => {
                    loaded.insert(path, entry);
                }
                Ok((_, None)) => {}
                Err(err) => warn!(root = %root.display(), error = %err, "subdirectory scan task failed"),
            }
        }

        let children = listing
            .into_iter()
            .filter_map(|item| match item.kind {
                Kind::Note => Some(Entry::File(NoteFile::new(item.path))),
                Kind::Directory => loaded.remove(&item.path),
            })
            .collect();

        Directory::new(root, children)
    }
}

/// Runs `job` on the blocking pool, reporting a panicked or cancelled task
/// as [`NotesError::Runtime`].
async fn blocking<T, F>(job: F) -> NotesResult<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(task::spawn_blocking(job).await?)
}
