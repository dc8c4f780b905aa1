use crate::error::{NotesError, NotesResult};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_EXTENSION: &str = "md";
pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_RENAME_DEBOUNCE: Duration = Duration::from_millis(500);

const ROOT_VAR: &str = "ROUGH_NOTES_ROOT";
const MAX_DEPTH_VAR: &str = "ROUGH_NOTES_MAX_DEPTH";
const DEBOUNCE_VAR: &str = "ROUGH_NOTES_DEBOUNCE_MS";

/// Settings shared by the scanner, the repository and the rename debouncer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    /// Directory holding every note; identities are derived from it.
    pub root: PathBuf,
    /// Suffix (without the dot) that marks a file as a note.
    pub extension: String,
    /// Depth below which subdirectories are only probed, not read.
    pub max_depth: usize,
    pub rename_debounce: Duration,
}

impl NotesConfig {
    /// Configuration for an explicit root with default tuning.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        NotesConfig {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_owned(),
            max_depth: DEFAULT_MAX_DEPTH,
            rename_debounce: DEFAULT_RENAME_DEBOUNCE,
        }
    }

    /// Builds the configuration from `~/Documents/Notes` and environment overrides.
    ///
    /// # Errors
    /// - [`NotesError::NotFound`] if no documents directory exists and no root override is set
    pub fn load() -> NotesResult<Self> {
        let root = match env::var_os(ROOT_VAR) {
            Some(root) => PathBuf::from(root),
            None => Self::default_root()?,
        };

        let mut config = Self::with_root(root);

        if let Some(depth) = parse_var::<usize>(MAX_DEPTH_VAR) {
            config.max_depth = depth;
        }
        if let Some(millis) = parse_var::<u64>(DEBOUNCE_VAR) {
            config.rename_debounce = Duration::from_millis(millis);
        }

        Ok(config)
    }

    pub fn extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_owned();
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn rename_debounce(mut self, quiet: Duration) -> Self {
        self.rename_debounce = quiet;
        self
    }

    fn default_root() -> NotesResult<PathBuf> {
        let docs = dirs::document_dir()
            .ok_or_else(|| NotesError::NotFound(PathBuf::from("documents directory")))?;
        Ok(docs.join("Notes"))
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring unparsable override");
            None
        }
    }
}
