use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "qor",
    about = "Push source files to and pull translations from a Qordoba project",
    version
)]
pub struct Cli {
    /// Path to .qordoba.toml (default: current directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the local files that would be pushed
    Ls {
        /// Files to push instead of the configured push pattern
        files: Vec<PathBuf>,

        /// Skip files with an unsupported extension instead of failing
        #[arg(long)]
        skip_unsupported: bool,
    },

    /// Show where pulled translations of a source file would be written
    Targets {
        /// Name of the source file in the project (e.g. strings.json)
        #[arg(short, long)]
        name: String,

        /// Destination languages (default: all)
        #[arg(short, long = "language")]
        languages: Vec<String>,
    },

    /// Validate the project config and its patterns
    Check,
}
