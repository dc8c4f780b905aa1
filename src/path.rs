use crate::error::PathError;
use std::path::{Path, PathBuf};

/// A typed note location under a root, split into the directories to walk
/// and the note's base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub root: PathBuf,
    pub directories: Vec<String>,
    pub file_name: String,
}

impl ResolvedPath {
    /// The directory that will hold the note.
    pub fn parent(&self) -> PathBuf {
        self.directories
            .iter()
            .fold(self.root.clone(), |dir, segment| dir.join(segment))
    }

    /// Every directory from the outermost to the note's parent, in creation order.
    pub fn directory_chain(&self) -> Vec<PathBuf> {
        self.directories
            .iter()
            .scan(self.root.clone(), |dir, segment| {
                dir.push(segment);
                Some(dir.clone())
            })
            .collect()
    }

    /// Full path of the note file, with `extension` appended if missing.
    pub fn note_path(&self, extension: &str) -> PathBuf {
        self.parent().join(with_extension(&self.file_name, extension))
    }
}

/// Splits a slash-separated string like `work/ideas/draft` into a [`ResolvedPath`] under `root`.
///
/// Empty segments are dropped, so leading, trailing and doubled slashes are
/// tolerated. Nothing on disk is touched, and no extension is added.
pub fn resolve(input: &str, root: &Path) -> Result<ResolvedPath, PathError> {
    let mut segments: Vec<String> = input
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect();

    let file_name = segments.pop().ok_or(PathError::EmptyPath)?;

    Ok(ResolvedPath {
        root: root.to_path_buf(),
        directories: segments,
        file_name,
    })
}

/// Appends `.{extension}` unless `name` already ends with it.
pub fn with_extension(name: &str, extension: &str) -> String {
    let suffix = format!(".{extension}");
    if name.ends_with(&suffix) {
        name.to_owned()
    } else {
        format!("{name}{suffix}")
    }
}

/// Renders a note path back into the string a user would type to reach it.
///
/// Strips the root prefix and the note extension, joining the remaining
/// components with `/`. A path outside `root` degrades to its file stem.
pub fn relative_note_path(path: &Path, root: &Path, extension: &str) -> String {
    let stripped = match path.strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) => {
            return path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
    };

    let joined = stripped
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let suffix = format!(".{extension}");
    match joined.strip_suffix(&suffix) {
        Some(without) => without.to_owned(),
        None => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "/notes";

    #[test]
    fn splits_directories_from_file() {
        let resolved = resolve("work/ideas/draft", Path::new(ROOT)).unwrap();
        assert_eq!(resolved.directories, ["work", "ideas"]);
        assert_eq!(resolved.file_name, "draft");
    }

    #[test]
    fn tolerates_stray_slashes() {
        let resolved = resolve("//work///draft/", Path::new(ROOT)).unwrap();
        assert_eq!(resolved.directories, ["work"]);
        assert_eq!(resolved.file_name, "draft");
    }

    #[test]
    fn rejects_paths_without_segments() {
        assert_eq!(resolve("", Path::new(ROOT)), Err(PathError::EmptyPath));
        assert_eq!(resolve("///", Path::new(ROOT)), Err(PathError::EmptyPath));
    }

    #[test]
    fn chain_lists_each_level() {
        let resolved = resolve("x/y/z", Path::new(ROOT)).unwrap();
        assert_eq!(
            resolved.directory_chain(),
            [PathBuf::from("/notes/x"), PathBuf::from("/notes/x/y")]
        );
        assert_eq!(resolved.parent(), PathBuf::from("/notes/x/y"));
        assert_eq!(resolved.note_path("md"), PathBuf::from("/notes/x/y/z.md"));
    }

    #[test]
    fn extension_is_not_doubled() {
        assert_eq!(with_extension("todo", "md"), "todo.md");
        assert_eq!(with_extension("todo.md", "md"), "todo.md");
    }

    #[test]
    fn relative_path_strips_root_and_extension() {
        let root = Path::new(ROOT);
        let typed = relative_note_path(Path::new("/notes/work/ideas/draft.md"), root, "md");
        assert_eq!(typed, "work/ideas/draft");

        let outside = relative_note_path(Path::new("/elsewhere/todo.md"), root, "md");
        assert_eq!(outside, "todo");
    }
}
