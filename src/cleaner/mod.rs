//! Gradle project discovery and cleaning.
//!
//! This module provides:
//! - Listing of a single directory into files and subdirectories
//! - Discovery of Gradle project roots in a directory tree
//! - Sequential execution of each project's wrapper `clean` task

mod command;
mod executor;
mod listing;
mod project_scanner;

pub use command::{build_command, ProjectCleanCommand};
pub use executor::{CleanRunner, CommandExecutor, CommandOutput, ShellExecutor};
pub use listing::{classify, DirectoryListing};
pub use project_scanner::{discover_projects, is_ignored, IGNORE_SUFFIXES};
