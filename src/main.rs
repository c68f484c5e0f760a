use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use global_gradle_clean::cli::Cli;
use global_gradle_clean::commands;
use global_gradle_clean::config::Config;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    if let Some(shell) = cli.completions {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::from_cli(&cli);
    tracing::debug!(?config, "Resolved configuration");

    commands::clean::run(cli.path, config)
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("global_gradle_clean={}", level)));

    // stdout is reserved for the wrapper output
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
