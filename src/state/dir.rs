use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DirError {
    #[error("Not a directory: {path}")]
    NotADirectory { path: String },
    #[error("List directory {path} failed: {source}")]
    List {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// One directory listing: a snapshot of direct children, sorted directories
/// first then case-insensitive by name, with a cursor into it. There is no
/// filesystem watching; `reload` is the only way the listing catches up
/// with on-disk changes.
#[derive(Debug, Default)]
pub struct DirState {
    pub root: Option<PathBuf>,
    pub entries: Vec<PathBuf>,
    pub cursor: usize,
}

impl DirState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the listing. On error the previous listing is untouched.
    pub fn load(&mut self, path: &Path) -> Result<(), DirError> {
        if !path.is_dir() {
            return Err(DirError::NotADirectory {
                path: path.display().to_string(),
            });
        }

        let list_err = |source| DirError::List {
            path: path.display().to_string(),
            source,
        };
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(list_err)? {
            entries.push(entry.map_err(list_err)?.path());
        }
        entries.sort_by_cached_key(|entry| {
            let name = entry
                .file_name()
                .map(|name| name.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            (!entry.is_dir(), name)
        });

        self.root = Some(path.to_path_buf());
        self.entries = entries;
        self.cursor = 0;
        Ok(())
    }

    pub fn selected(&self) -> Option<&PathBuf> {
        self.entries.get(self.cursor)
    }

    /// Clamps into `[0, len - 1]`; a no-op on an empty listing.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.entries.is_empty() {
            self.cursor = 0;
            return;
        }
        let max = (self.entries.len() - 1) as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, max) as usize;
    }

    /// Re-lists `root`, keeping the cursor on the previously selected path
    /// when it still exists. A vanished selection falls back to the top.
    pub fn reload(&mut self) {
        let Some(root) = self.root.clone() else {
            return;
        };
        let previous = self.selected().cloned();

        if self.load(&root).is_err() {
            // Root itself disappeared out from under us.
            self.entries.clear();
            self.cursor = 0;
            return;
        }

        if let Some(previous) = previous
            && let Some(index) = self.entries.iter().position(|entry| *entry == previous)
        {
            self.cursor = index;
        }
    }
}
