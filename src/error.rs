use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Core library errors
#[derive(Error, Debug)]
pub enum GradleCleanError {
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("IO error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed in '{working_directory}': {command} ({status})")]
    CommandFailed {
        command: String,
        working_directory: PathBuf,
        status: ExitStatus,
    },
}

impl GradleCleanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GradleCleanError>;
