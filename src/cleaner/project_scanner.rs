//! Project scanner for discovering Gradle projects in a directory tree.

use crate::cleaner::listing::classify;
use crate::error::Result;
use crate::platform::Platform;
use std::path::{Path, PathBuf};

/// Path suffixes that are never descended into, matched case-insensitively.
pub const IGNORE_SUFFIXES: &[&str] = &[".git", ".idea", "node_modules"];

/// Whether the branch rooted at `path` should be pruned.
pub fn is_ignored(path: &Path) -> bool {
    let path = path.to_string_lossy().to_ascii_lowercase();
    IGNORE_SUFFIXES.iter().any(|suffix| path.ends_with(suffix))
}

/// Find every Gradle project root under `base`, in pre-order.
///
/// A directory holding a wrapper script is reported and not descended into.
/// Otherwise it is pruned if its path matches [`IGNORE_SUFFIXES`], or its
/// subdirectories are visited in listing order. The first unreadable
/// directory aborts the scan.
pub fn discover_projects(base: &Path, platform: Platform) -> Result<Vec<PathBuf>> {
    let mut projects = Vec::new();
    let mut pending = vec![base.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let listing = classify(&dir)?;

        let is_project = listing
            .file_names
            .iter()
            .any(|name| platform.is_wrapper(&name.to_string_lossy()));

        if is_project {
            tracing::info!(path = %dir.display(), "Found Gradle project");
            projects.push(dir);
            continue;
        }

        if is_ignored(&dir) {
            tracing::debug!(path = %dir.display(), "Skipping ignored directory");
            continue;
        }

        // Reversed so the first listed child is popped first
        pending.extend(
            listing
                .directory_names
                .iter()
                .rev()
                .map(|name| dir.join(name)),
        );
    }

    Ok(projects)
}
