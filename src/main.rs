// ABOUTME: Entry point for the strofi CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use std::path::Path;
use strofi::config::{self, Config};
use strofi::error::Result;
use strofi::output::{Output, OutputMode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbosity flags. The default
    // shows the crate's own info events, so per-poll retry reports reach
    // the user.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else if cli.quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::new("strofi=info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else if cli.quiet {
        OutputMode::Quiet
    } else {
        OutputMode::Normal
    };
    let output = Output::new(mode);

    let result = run(cli, output).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: Output) -> Result<()> {
    match cli.command {
        Commands::Init { function, force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, function.as_deref(), force)
        }
        Commands::Deploy {
            config,
            yes,
            dry_run,
        } => {
            let config = load_config(config.as_deref())?;
            commands::deploy::deploy(config, yes, dry_run, output).await
        }
        Commands::Status { config } => {
            let config = load_config(config.as_deref())?;
            commands::status::status(config).await
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(&env::current_dir()?),
    }
}
