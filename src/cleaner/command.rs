//! The clean command issued for one project.

use crate::platform::Platform;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A shell command line and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCleanCommand {
    pub working_directory: PathBuf,
    pub command: String,
}

/// Build the `clean` invocation of the wrapper in `project_root`.
///
/// The wrapper is not required to exist.
pub fn build_command(project_root: &Path, platform: Platform) -> ProjectCleanCommand {
    let wrapper = project_root.join(platform.wrapper_file_name());

    ProjectCleanCommand {
        working_directory: project_root.to_path_buf(),
        command: format!("\"{}\" clean", wrapper.display()),
    }
}
