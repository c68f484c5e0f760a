//! Clean command implementation.

use crate::cleaner::{
    build_command, discover_projects, CleanRunner, ProjectCleanCommand, ShellExecutor,
};
use crate::config::Config;
use crate::error::{GradleCleanError, Result as CleanResult};
use anyhow::Result;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Shown when the base directory does not exist.
pub const PATH_MISSING_MESSAGE: &str = "The specified file/directory does not exist. \
Please provide either a valid directory or execute this script from the target directory.";

/// Resolve the directory to scan, defaulting to the current directory.
///
/// The result is absolute: each command runs with its project as working
/// directory, so a relative wrapper path would resolve a second time.
pub fn resolve_base(path: Option<PathBuf>) -> CleanResult<PathBuf> {
    let base = match path {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| GradleCleanError::io(".", e))?,
    };

    if !base.exists() {
        return Err(GradleCleanError::PathNotFound(base));
    }

    std::path::absolute(&base).map_err(|e| GradleCleanError::io(&base, e))
}

/// Run the clean command.
pub fn run(path: Option<PathBuf>, config: Config) -> Result<ExitCode> {
    let base = match resolve_base(path) {
        Ok(base) => base,
        Err(GradleCleanError::PathNotFound(missing)) => {
            tracing::debug!(path = %missing.display(), "Base directory missing");
            eprintln!("{PATH_MISSING_MESSAGE}");
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(path = %base.display(), "Scanning for Gradle projects");

    let commands: Vec<ProjectCleanCommand> = discover_projects(&base, config.platform)?
        .iter()
        .map(|root| build_command(root, config.platform))
        .collect();

    if config.dry_run && config.json {
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} projects found to be cleaned", commands.len());

    if config.dry_run {
        print_commands(&commands);
        return Ok(ExitCode::SUCCESS);
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut runner = CleanRunner::new(
        ShellExecutor::new(config.platform),
        stdout.lock(),
        stderr.lock(),
    );
    runner.run_all(&commands)?;

    Ok(ExitCode::SUCCESS)
}

fn print_commands(commands: &[ProjectCleanCommand]) {
    for command in commands {
        println!(
            "  {}: {}",
            command.working_directory.display(),
            command.command
        );
    }
}
