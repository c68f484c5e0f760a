use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// Run `gradlew clean` in every Gradle project found under a directory
#[derive(Parser, Debug)]
#[command(name = "global-gradle-clean")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to search for Gradle projects [default: current directory]
    #[arg(value_name = "BASE_DIRECTORY")]
    pub path: Option<PathBuf>,

    /// List the clean commands without running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the dry-run listing as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
