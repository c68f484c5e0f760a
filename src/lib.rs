//! Global Gradle Clean - run `gradlew clean` in every project under a directory
//!
//! This crate provides functionality for:
//! - Discovering Gradle wrapper projects in a directory tree
//! - Building the platform-specific clean command for each project
//! - Running those commands one at a time and forwarding their output

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod platform;

// Re-export commonly used types
pub use config::Config;
pub use error::{GradleCleanError, Result};
pub use platform::Platform;
