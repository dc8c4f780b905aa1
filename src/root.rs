use crate::config::NotesConfig;
use crate::error::{NotesError, NotesResult};
use crate::repository::storage;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// The directory that holds every note, e.g. `~/Documents/Notes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesRoot {
    pub path: PathBuf,
}

impl NotesRoot {
    /// Opens an existing notes root.
    ///
    /// The path is canonicalized once here so every entry identity derived
    /// from it is canonical as well.
    ///
    /// - Returns [`NotesError::NotFound`] if the directory does not exist.
    /// - Returns [`NotesError::NotADirectory`] if the path exists but is not a directory.
    pub fn open(path: &Path) -> NotesResult<Self> {
        if !path.exists() {
            return Err(NotesError::NotFound(path.to_path_buf()));
        }

        if !path.is_dir() {
            return Err(NotesError::NotADirectory(path.to_path_buf()));
        }

        Ok(Self {
            path: fs::canonicalize(path)?,
        })
    }

    /// Ensures the configured root exists, creating it if missing.
    ///
    /// A freshly created root is seeded with a welcome note. An existing
    /// root is opened as is, even if it is empty.
    pub fn ensure_exists(config: &NotesConfig) -> NotesResult<Self> {
        if !config.root.exists() {
            fs::create_dir_all(&config.root)?;
            info!(root = %config.root.display(), "created notes root");

            let root = Self::open(&config.root)?;
            root.seed_welcome(&config.extension);
            return Ok(root);
        }

        Self::open(&config.root)
    }

    /// Path of the welcome note for the given extension.
    pub fn welcome_path(&self, extension: &str) -> PathBuf {
        self.path.join(format!("Welcome.{extension}"))
    }

    fn seed_welcome(&self, extension: &str) {
        let path = self.welcome_path(extension);
        if let Err(err) = storage::create_atomic(&path, welcome_text(&self.path).as_bytes()) {
            warn!(path = %path.display(), error = %err, "could not seed welcome note");
        }
    }
}

fn welcome_text(root: &Path) -> String {
    format!(
        "# Welcome to Notes!\n\
         \n\
         Every note is a plain Markdown file stored under:\n\
         \n\
         `{}`\n\
         \n\
         ## Getting around\n\
         \n\
         - Folders keep related notes together\n\
         - Type a path such as `projects/ideas/draft` to rename or move a note; missing folders are created\n\
         - Empty folders are hidden from the sidebar\n\
         \n\
         **Start writing!**\n",
        root.display()
    )
}
