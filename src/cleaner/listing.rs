//! Immediate children of a directory, split into files and subdirectories.

use crate::error::{GradleCleanError, Result};
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Children of one directory, partitioned by type, in `read_dir` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    pub file_names: Vec<OsString>,
    pub directory_names: Vec<OsString>,
}

/// List the immediate children of `path`.
///
/// A child whose metadata cannot be read (broken symlink, permission denied,
/// removed mid-listing) is counted as a file.
pub fn classify(path: &Path) -> Result<DirectoryListing> {
    let entries = fs::read_dir(path).map_err(|e| GradleCleanError::io(path, e))?;
    let mut listing = DirectoryListing::default();

    for entry in entries {
        let entry = entry.map_err(|e| GradleCleanError::io(path, e))?;
        let name = entry.file_name();

        // fs::metadata follows symlinks, so a link to a directory counts as one
        let is_dir = fs::metadata(path.join(&name))
            .map(|m| m.is_dir())
            .unwrap_or(false);

        if is_dir {
            listing.directory_names.push(name);
        } else {
            listing.file_names.push(name);
        }
    }

    Ok(listing)
}
