use crate::cli::Cli;
use crate::platform::Platform;

/// Settings for one run, fixed before any scanning starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Platform whose wrapper scripts are detected and run
    pub platform: Platform,
    /// List commands instead of running them
    pub dry_run: bool,
    /// Emit the dry-run listing as JSON
    pub json: bool,
}

impl Config {
    /// Build the run configuration for the host platform.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            platform: Platform::host(),
            dry_run: cli.dry_run,
            json: cli.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn from_cli_defaults_to_running_on_host() {
        let cli = Cli::parse_from(["global-gradle-clean"]);
        let config = Config::from_cli(&cli);
        assert!(!config.dry_run);
        assert!(!config.json);
        assert_eq!(config.platform, Platform::host());
    }

    #[test]
    fn from_cli_copies_flags() {
        let cli = Cli::parse_from(["global-gradle-clean", "--dry-run", "--json"]);
        let config = Config::from_cli(&cli);
        assert!(config.dry_run);
        assert!(config.json);
    }
}
