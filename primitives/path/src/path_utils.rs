// SPDX-License-Identifier: CC0-1.0

//! Path utility functions for finding the project root and resolving paths.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the project-local configuration file.
pub const CONFIG_FILE_NAME: &str = "quill.toml";

/// Errors raised while locating the project root.
#[derive(Debug, Error)]
pub enum PathError {
    /// The current directory could not be determined.
    #[error("could not determine current directory: {0}")]
    CurrentDir(#[from] std::io::Error),
    /// No marker file was found between `start` and the filesystem root.
    #[error("could not find project root above {0} (no {CONFIG_FILE_NAME} or Cargo.toml found)")]
    NotFound(PathBuf),
}

/// Find the project root starting from the current directory.
///
/// See [`find_project_root_from`].
pub fn find_project_root() -> Result<PathBuf, PathError> {
    let current = std::env::current_dir()?;
    find_project_root_from(&current)
}

/// Find the project root by walking up from `start`.
///
/// The first directory holding a `quill.toml` or a `Cargo.toml` declaring
/// `[workspace]` wins. Failing that, the nearest directory with any
/// `Cargo.toml` is used.
///
/// # Returns
///
/// Returns `Result<PathBuf>` containing the path to the project root directory.
pub fn find_project_root_from(start: &Path) -> Result<PathBuf, PathError> {
    let mut current = start.to_path_buf();
    let mut nearest_manifest = None;
    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Ok(current);
        }
        let cargo_toml = current.join("Cargo.toml");
        if cargo_toml.is_file() {
            let contents = std::fs::read_to_string(&cargo_toml).unwrap_or_default();
            if contents.contains("[workspace]") {
                return Ok(current);
            }
            if nearest_manifest.is_none() {
                nearest_manifest = Some(current.clone());
            }
        }
        if !current.pop() {
            return nearest_manifest.ok_or_else(|| PathError::NotFound(start.to_path_buf()));
        }
    }
}

/// Resolve `path` against `root` unless it is already absolute.
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
