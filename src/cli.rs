// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "strofi")]
#[command(about = "Blue/green deployment for serverless functions")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit progress as JSON lines
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new strofi.yml configuration file
    Init {
        /// Function name to seed the template with
        #[arg(short, long)]
        function: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Run the blue/green rollout
    Deploy {
        /// Path to the configuration file (discovered in cwd by default)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip the confirmation gate before the green phase
        #[arg(short = 'y', long)]
        yes: bool,

        /// Run against an in-memory platform without touching real resources
        #[arg(long)]
        dry_run: bool,
    },

    /// Show function state and alias target
    Status {
        /// Path to the configuration file (discovered in cwd by default)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
