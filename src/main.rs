//! POSIX primer launcher
//!
//! Lists and runs the standalone demos for descriptor duplication, forking
//! and image replacement.

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "primer")]
#[command(version = "0.1.0")]
#[command(about = "Run the POSIX primitive demos", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available demos
    List,

    /// Run a demo by name, or `all`
    Run {
        /// Demo name (dup, fork, fork-tree, exec, all)
        demo: String,

        /// Directory containing the demo binaries
        #[arg(short, long)]
        bin_dir: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    minilib::init_logging_with_default(if cli.verbose { "debug" } else { "warn" });

    if cli.verbose {
        println!("{}", "POSIX primer v0.1.0".cyan().bold());
    }

    match cli.command {
        Commands::List => {
            commands::list::list_demos()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { demo, bin_dir } => {
            let config = Config::load(cli.config.as_deref())?;
            let code = commands::run::run_demos(&demo, bin_dir.as_deref(), &config)?;
            Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
        }
    }
}
