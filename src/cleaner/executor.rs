//! Executor for running project clean commands.

use crate::cleaner::command::ProjectCleanCommand;
use crate::error::{GradleCleanError, Result};
use crate::platform::Platform;
use std::io::Write;
use std::process::ExitStatus;

/// Captured result of one finished command.
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Something that can run a clean command to completion.
pub trait CommandExecutor {
    /// Run `command` and wait for it to exit.
    ///
    /// Only failing to start is an error here; a non-zero exit is reported
    /// through [`CommandOutput::status`].
    fn execute(&mut self, command: &ProjectCleanCommand) -> Result<CommandOutput>;
}

/// Runs commands through the platform shell.
pub struct ShellExecutor {
    platform: Platform,
}

impl ShellExecutor {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&mut self, command: &ProjectCleanCommand) -> Result<CommandOutput> {
        let output = self
            .platform
            .shell(&command.command)
            .current_dir(&command.working_directory)
            .output()
            .map_err(|source| GradleCleanError::Spawn {
                command: command.command.clone(),
                source,
            })?;

        Ok(CommandOutput {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Runs clean commands one after another, forwarding their output.
pub struct CleanRunner<E, O, R> {
    executor: E,
    stdout: O,
    stderr: R,
}

impl<E: CommandExecutor, O: Write, R: Write> CleanRunner<E, O, R> {
    pub fn new(executor: E, stdout: O, stderr: R) -> Self {
        Self {
            executor,
            stdout,
            stderr,
        }
    }

    /// Run every command in order, stopping at the first failure.
    pub fn run_all(&mut self, commands: &[ProjectCleanCommand]) -> Result<()> {
        for command in commands {
            self.run_one(command)?;
        }
        Ok(())
    }

    fn run_one(&mut self, command: &ProjectCleanCommand) -> Result<()> {
        tracing::info!(
            path = %command.working_directory.display(),
            command = %command.command,
            "Running clean"
        );

        let output = self.executor.execute(command)?;
        self.forward(&output, command)?;

        if !output.status.success() {
            return Err(GradleCleanError::CommandFailed {
                command: command.command.clone(),
                working_directory: command.working_directory.clone(),
                status: output.status,
            });
        }

        tracing::debug!(path = %command.working_directory.display(), "Clean finished");
        Ok(())
    }

    fn forward(&mut self, output: &CommandOutput, command: &ProjectCleanCommand) -> Result<()> {
        let io_err = |e| GradleCleanError::io(&command.working_directory, e);

        self.stdout.write_all(&output.stdout).map_err(io_err)?;
        self.stdout.flush().map_err(io_err)?;

        if !output.stderr.is_empty() {
            self.stderr.write_all(&output.stderr).map_err(io_err)?;
            self.stderr.flush().map_err(io_err)?;
        }
        Ok(())
    }
}
