//! Host platform selection for wrapper detection and command execution.

use std::process::Command;

/// Operating system family the wrapper scripts are built for.
///
/// Chosen once at startup with [`Platform::host`] and passed down explicitly,
/// so discovery and command building can be exercised for either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform of the running process.
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// File name of the Gradle wrapper on this platform.
    pub fn wrapper_file_name(self) -> &'static str {
        match self {
            Platform::Windows => "gradlew.bat",
            Platform::Unix => "gradlew",
        }
    }

    /// Whether `file_name` looks like this platform's wrapper script.
    ///
    /// Suffix match: case-insensitive on Windows, exact on Unix.
    pub fn is_wrapper(self, file_name: &str) -> bool {
        match self {
            Platform::Windows => file_name
                .to_ascii_lowercase()
                .ends_with(self.wrapper_file_name()),
            Platform::Unix => file_name.ends_with(self.wrapper_file_name()),
        }
    }

    /// Build a process that runs `line` through the platform shell.
    pub fn shell(self, line: &str) -> Command {
        match self {
            Platform::Windows => {
                let mut cmd = Command::new("cmd");
                cmd.arg("/C");
                #[cfg(windows)]
                {
                    use std::os::windows::process::CommandExt;
                    // cmd does its own quote parsing
                    cmd.raw_arg(line);
                }
                #[cfg(not(windows))]
                cmd.arg(line);
                cmd
            }
            Platform::Unix => {
                let mut cmd = Command::new("sh");
                cmd.arg("-c").arg(line);
                cmd
            }
        }
    }
}
