//! # rough_notes
//!
//! The storage core of a local note-taking tool whose notes are plain
//! Markdown files in a directory hierarchy.
//!
//! ## Features
//!
//! - **Tree Snapshots**: Scan the notes root into an immutable tree of folders and notes
//! - **Lazy Depth**: Read folders fully down to a cutoff, probe deeper ones and expand on demand
//! - **Concurrent Loading**: Fan the top-level folders of the initial scan out over Tokio's blocking pool
//! - **Path Moves**: Rename or move a note by typing a path; missing folders are created
//! - **Best-effort I/O**: Reads, saves and deletes never block the editor on a failure
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rough_notes::{NoteRepository, NotesConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = NotesConfig::load()?;
//! let repo = NoteRepository::open(&config)?;
//!
//! let tree = repo.load_tree();
//! println!("{} notes under {}", tree.note_count(), repo.root().display());
//!
//! if let Some(path) = repo.create("Groceries", repo.root(), true) {
//!     let moved = repo.move_note(&path, "home/lists/groceries");
//!     println!("moved to {moved:?}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **[`path`]**: Turns a typed `a/b/note` string into directories plus a note name
//! - **[`scanner`]**: Builds tree snapshots, sequentially or concurrently
//! - **[`tree`]**: Holds the current snapshot and finds entries by identity
//! - **[`repository`]**: Reads, writes, creates, deletes and moves notes, rescanning after each change
//! - **[`debounce`]**: Delays a rename until typing has paused
//!
//! An entry's identity is its canonical absolute path string. Snapshots are
//! rebuilt rather than patched, so callers keep identities (not entries)
//! across mutations and look them up again with [`TreeStore::find`].
//!
//! ## Error Handling
//!
//! Fallible internals return [`NotesResult<T>`]. The collaborator-facing
//! operations on [`NoteRepository`] degrade instead: empty text, `None`, or
//! a logged no-op.
//!
//! ```rust,no_run
//! use rough_notes::{NoteRepository, NotesResult};
//! use std::path::{Path, PathBuf};
//!
//! fn rename(repo: &NoteRepository, note: &Path) -> NotesResult<PathBuf> {
//!     repo.try_move(note, "archive/2024/old-ideas")
//! }
//! ```

pub mod config;
pub mod debounce;
pub mod domain;
pub mod error;
pub mod path;
pub mod repository;
pub mod root;
pub mod scanner;
pub mod telemetry;
pub mod tree;

/// Re-exports the most commonly used types for convenience.
pub use config::NotesConfig;
pub use debounce::RenameDebouncer;
pub use domain::{Directory, Entry, NoteFile};
pub use error::{NotesError, NotesResult, PathError};
pub use repository::NoteRepository;
pub use root::NotesRoot;
pub use scanner::Scanner;
pub use tree::TreeStore;
