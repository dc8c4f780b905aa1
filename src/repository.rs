pub mod storage;

use crate::config::NotesConfig;
use crate::domain::{Directory, Entry};
use crate::error::{NotesError, NotesResult, PathError};
use crate::path::{self, with_extension};
use crate::root::NotesRoot;
use crate::scanner::Scanner;
use crate::tree::TreeStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The only component that changes notes on disk.
///
/// Every successful mutation rescans the root and replaces the snapshot in
/// [`NoteRepository::tree`]. The collaborator-facing methods never return an
/// error: reads fall back to empty text, writes and deletes are best effort,
/// and creates and moves report failure as `None`. The `try_*` variants
/// expose the underlying [`NotesError`].
///
/// There is no locking. Callers issue at most one mutation per path at a time.
pub struct NoteRepository {
    root: NotesRoot,
    scanner: Scanner,
    tree: TreeStore,
}

impl NoteRepository {
    pub fn new(root: NotesRoot, config: &NotesConfig) -> Self {
        NoteRepository {
            root,
            scanner: Scanner::from_config(config),
            tree: TreeStore::new(),
        }
    }

    /// Creates (and seeds) the configured root if needed and opens a repository on it.
    ///
    /// The tree is not loaded yet; call [`load_tree`](Self::load_tree) or
    /// [`load_tree_async`](Self::load_tree_async).
    pub fn open(config: &NotesConfig) -> NotesResult<Self> {
        let root = NotesRoot::ensure_exists(config)?;
        Ok(Self::new(root, config))
    }

    pub fn root(&self) -> &Path {
        &self.root.path
    }

    pub fn extension(&self) -> &str {
        self.scanner.extension()
    }

    pub fn tree(&self) -> &TreeStore {
        &self.tree
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Scans the root on the calling thread and publishes the result.
    pub fn load_tree(&self) -> Arc<Directory> {
        self.tree.replace(self.scanner.scan(self.root()))
    }

    /// Scans the root with the concurrent scanner and publishes the result.
    pub async fn load_tree_async(&self) -> Arc<Directory> {
        let snapshot = self.scanner.scan_concurrent(self.root()).await;
        self.tree.replace(snapshot)
    }

    /// Reads the children of a placeholder directory without touching the stored snapshot.
    pub fn expand(&self, dir: &Path) -> Directory {
        self.scanner.expand(dir)
    }

    pub fn find(&self, id: &str) -> Option<Entry> {
        self.tree.find(id)
    }

    /// The slash-separated string that [`move_note`](Self::move_note) would
    /// accept to leave `path` where it is.
    pub fn relative_path(&self, path: &Path) -> String {
        path::relative_note_path(path, self.root(), self.extension())
    }

    /// Returns the note's text, or an empty string if it cannot be read.
    pub fn read(&self, path: &Path) -> String {
        storage::read(path).unwrap_or_else(|| {
            debug!(path = %path.display(), "unreadable note read as empty");
            String::new()
        })
    }

    /// Saves `text` atomically. Failures are logged and dropped so auto-save
    /// never interrupts typing.
    pub fn write(&self, path: &Path, text: &str) {
        if let Err(err) = self.try_write(path, text) {
            warn!(path = %path.display(), error = %err, "note save failed");
        }
    }

    pub fn try_write(&self, path: &Path, text: &str) -> NotesResult<()> {
        storage::write_atomic(path, text.as_bytes())
    }

    /// Creates `{name}.{ext}` in `dir`, optionally seeded with a `# {name}` heading.
    ///
    /// Returns `None` if the note already exists or cannot be written.
    pub fn create(&self, name: &str, dir: &Path, with_template: bool) -> Option<PathBuf> {
        self.try_create(name, dir, with_template)
            .inspect_err(|err| debug!(note = name, error = %err, "note not created"))
            .ok()
    }

    pub fn try_create(&self, name: &str, dir: &Path, with_template: bool) -> NotesResult<PathBuf> {
        let name = valid_name(name)?;
        let file_name = with_extension(name, self.extension());
        let path = canonical_dir(dir).join(&file_name);

        let content = if with_template {
            let title = file_name
                .strip_suffix(&format!(".{}", self.extension()))
                .unwrap_or(name);
            format!("# {title}\n\n")
        } else {
            String::new()
        };

        storage::create_atomic(&path, content.as_bytes())?;
        debug!(path = %path.display(), "note created");

        self.load_tree();
        Ok(path)
    }

    /// Creates the directory `name` inside `dir`. Returns `None` if it already exists.
    pub fn create_directory(&self, name: &str, dir: &Path) -> Option<PathBuf> {
        self.try_create_directory(name, dir)
            .inspect_err(|err| debug!(directory = name, error = %err, "directory not created"))
            .ok()
    }

    pub fn try_create_directory(&self, name: &str, dir: &Path) -> NotesResult<PathBuf> {
        let path = canonical_dir(dir).join(valid_name(name)?);

        if fs::symlink_metadata(&path).is_ok() {
            return Err(NotesError::AlreadyExists(path));
        }

        fs::create_dir_all(&path)?;
        debug!(path = %path.display(), "directory created");

        self.load_tree();
        Ok(path)
    }

    /// Removes a note, or a directory and everything in it. Errors such as
    /// the path already being gone are ignored; the tree is rescanned either way.
    pub fn delete(&self, path: &Path) {
        match storage::remove(path) {
            Ok(()) => debug!(path = %path.display(), "deleted"),
            Err(err) => debug!(path = %path.display(), error = %err, "delete failed"),
        }
        self.load_tree();
    }

    /// Moves or renames a note to a typed path such as `work/ideas/draft`.
    ///
    /// Returns the note's new path, or `None` if the path is empty or the
    /// move fails (the source is then left in place).
    pub fn move_note(&self, source: &Path, destination: &str) -> Option<PathBuf> {
        self.try_move(source, destination)
            .inspect_err(|err| {
                warn!(source = %source.display(), destination, error = %err, "move failed")
            })
            .ok()
    }

    /// Fallible form of [`move_note`](Self::move_note).
    ///
    /// Missing directories along the typed path are created first. Moving a
    /// note onto itself changes nothing. If another note already sits at the
    /// destination, that note wins: the source is deleted and the
    /// destination's path is returned with its content untouched. Folders
    /// left empty by a move stay on disk and are hidden by the next scan.
    ///
    /// # Errors
    /// - [`NotesError::NotFound`] if `source` does not exist
    /// - [`NotesError::NotAFile`] if `source` is a directory or anything but a regular file
    /// - [`PathError::EmptyPath`] if `destination` names nothing
    /// - [`NotesError::Io`] if a directory cannot be created or the rename fails
    pub fn try_move(&self, source: &Path, destination: &str) -> NotesResult<PathBuf> {
        let meta = fs::metadata(source).map_err(|err| match err.kind() {
            ErrorKind::NotFound => NotesError::NotFound(source.to_path_buf()),
            _ => NotesError::Io(err),
        })?;
        if !meta.is_file() {
            return Err(NotesError::NotAFile(source.to_path_buf()));
        }

        let resolved = path::resolve(destination, self.root())?;

        for dir in resolved.directory_chain() {
            if !dir.exists() {
                fs::create_dir(&dir)?;
                debug!(path = %dir.display(), "created intermediate directory");
            }
        }

        let target = resolved.note_path(self.extension());

        if same_location(source, &target) {
            return Ok(source.to_path_buf());
        }

        if target.exists() {
            info!(
                source = %source.display(),
                target = %target.display(),
                "destination exists, keeping it and dropping the source"
            );
            if let Err(err) = fs::remove_file(source) {
                warn!(source = %source.display(), error = %err, "could not remove moved source");
            }
            self.load_tree();
            return Ok(target);
        }

        fs::rename(source, &target)?;
        info!(source = %source.display(), target = %target.display(), "note moved");

        self.load_tree();
        Ok(target)
    }
}

/// Resolves `dir` so returned paths match tree identities; a missing
/// directory is kept as given and left for the write to reject.
fn canonical_dir(dir: &Path) -> PathBuf {
    fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf())
}

fn same_location(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Trims `name` and rejects names that are blank or would escape `dir`.
fn valid_name(name: &str) -> Result<&str, PathError> {
    let trimmed = name.trim();

    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(PathError::InvalidName(name.to_owned()));
    }

    if trimmed.contains(&['/', '\\'][..]) {
        return Err(PathError::InvalidName(name.to_owned()));
    }

    Ok(trimmed)
}
