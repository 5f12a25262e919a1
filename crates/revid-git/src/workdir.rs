//! Working directory resolution for command execution

use std::path::{Path, PathBuf};

/// Resolve `path` to an existing directory to run commands in.
///
/// An existing directory is returned as-is. Otherwise `path` is treated as a
/// file and its parent is returned if that exists, so a directory and a file
/// inside it can be passed interchangeably. Returns `None` when neither
/// exists.
pub fn resolve_working_directory(path: impl AsRef<Path>) -> Option<PathBuf> {
    let path = path.as_ref();
    if path.is_dir() {
        return Some(path.to_path_buf());
    }

    match path.parent() {
        Some(parent) if parent.is_dir() => Some(parent.to_path_buf()),
        _ => None,
    }
}
