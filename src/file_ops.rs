use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Filesystem primitives behind the command set. `Ok` carries the status
/// message shown to the user; errors render as messages too and never
/// propagate past the command boundary. No locking is attempted: the tool
/// is single-user and concurrent external modification is undefined.
#[derive(Debug, Error)]
pub enum FileOpError {
    #[error("File is not valid UTF-8: {path}")]
    InvalidUtf8 { path: String },
    #[error("Directory already exists: {path}")]
    AlreadyExists { path: String },
    #[error("Path does not exist: {path}")]
    NotFound { path: String },
    #[error("{operation} failed for {path}: {source}")]
    Io {
        operation: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FileOpError {
    fn io(operation: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.display().to_string(),
            source,
        }
    }
}

pub fn read(path: &Path) -> Result<String, FileOpError> {
    let bytes = fs::read(path).map_err(|source| FileOpError::io("read", path, source))?;
    String::from_utf8(bytes).map_err(|_| FileOpError::InvalidUtf8 {
        path: path.display().to_string(),
    })
}

/// Creates or truncates unconditionally. Existence checks are the caller's
/// responsibility (the `w` command gates on them, `w!` does not).
pub fn write(path: &Path, content: &str) -> Result<String, FileOpError> {
    fs::write(path, content).map_err(|source| FileOpError::io("write", path, source))?;
    Ok(format!("Written to {}", display_name(path)))
}

pub fn append(path: &Path, content: &str) -> Result<String, FileOpError> {
    let mut file = fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| FileOpError::io("append", path, source))?;
    file.write_all(content.as_bytes())
        .map_err(|source| FileOpError::io("append", path, source))?;
    Ok(format!("Appended to {}", display_name(path)))
}

/// Copies any existing file to `<path>.bak` before writing. An existing
/// `.bak` is superseded. Callers that need chained backups build a
/// timestamped name via `backup_target` and rename before writing.
pub fn overwrite_with_backup(path: &Path, content: &str) -> Result<String, FileOpError> {
    let backup = if path.exists() {
        let backup = sibling_with_suffix(path, ".bak");
        fs::copy(path, &backup).map_err(|source| FileOpError::io("backup", path, source))?;
        Some(backup)
    } else {
        None
    };

    let written = write(path, content)?;
    let backup_name = backup
        .as_deref()
        .map(display_name)
        .unwrap_or_else(|| "none".to_string());
    Ok(format!("{} (backup: {})", written, backup_name))
}

pub fn make_dir(path: &Path) -> Result<String, FileOpError> {
    if path.exists() {
        return Err(FileOpError::AlreadyExists {
            path: path.display().to_string(),
        });
    }
    fs::create_dir_all(path).map_err(|source| FileOpError::io("mkdir", path, source))?;
    Ok(format!("Directory created: {}", path.display()))
}

/// Removes a file, or a directory tree. Read-only members are made
/// writable first so the removal does not fail halfway through.
pub fn remove(path: &Path) -> Result<String, FileOpError> {
    if !path.exists() {
        return Err(FileOpError::NotFound {
            path: path.display().to_string(),
        });
    }
    if path.is_dir() {
        clear_readonly(path).map_err(|source| FileOpError::io("remove", path, source))?;
        fs::remove_dir_all(path).map_err(|source| FileOpError::io("remove", path, source))?;
    } else {
        fs::remove_file(path).map_err(|source| FileOpError::io("remove", path, source))?;
    }
    Ok(format!("Removed: {}", path.display()))
}

/// `<path>.bak`, or `<path>.bak.<unix_timestamp>` when the plain backup
/// name is already taken.
pub fn backup_target(path: &Path) -> PathBuf {
    let backup = sibling_with_suffix(path, ".bak");
    if backup.exists() {
        let stamp = time::OffsetDateTime::now_utc().unix_timestamp();
        return PathBuf::from(format!("{}.{}", backup.display(), stamp));
    }
    backup
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    PathBuf::from(format!("{}{}", path.display(), suffix))
}

fn clear_readonly(path: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(path)?;
    let mut permissions = metadata.permissions();
    if permissions.readonly() {
        #[allow(clippy::permissions_set_readonly_false)]
        permissions.set_readonly(false);
        fs::set_permissions(path, permissions)?;
    }
    if metadata.is_dir() {
        for entry in fs::read_dir(path)? {
            clear_readonly(&entry?.path())?;
        }
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
