//! CLI command definitions for the `mimic` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod personality;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Train chat personalities from exported conversations.
#[derive(Parser)]
#[command(name = "mimic", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// How command handlers report their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Styled,
    Json,
    /// Nothing on stdout; errors still surface through the exit status.
    Quiet,
}

impl OutputMode {
    /// `--json` wins over `--quiet`.
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => OutputMode::Json,
            (false, true) => OutputMode::Quiet,
            (false, false) => OutputMode::Styled,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Train a personality from a chat export and save it.
    Train {
        /// Chat export file (.txt, .csv, .json, .md, .log) or `-` for stdin.
        source: PathBuf,

        /// Name for the personality (also used when no sender is found).
        #[arg(short, long)]
        name: String,

        /// Free-text description embedded in the prompt.
        #[arg(short, long)]
        description: Option<String>,

        /// Owner of the personality (defaults to `default_user_id` from config).
        #[arg(short, long, env = "MIMICRY_USER")]
        user: Option<String>,

        /// Override the training document size limit, in bytes.
        #[arg(long)]
        max_bytes: Option<u64>,
    },

    /// Show the profile a chat export would produce, without saving it.
    Preview {
        /// Chat export file or `-` for stdin.
        source: PathBuf,

        /// Fallback persona name when no sender is found.
        #[arg(short, long)]
        name: Option<String>,

        /// Free-text description embedded in the prompt.
        #[arg(short, long)]
        description: Option<String>,

        /// Override the training document size limit, in bytes.
        #[arg(long)]
        max_bytes: Option<u64>,
    },

    /// List saved personalities.
    #[command(alias = "ls")]
    List {
        /// Owner to list for (defaults to `default_user_id` from config).
        #[arg(short, long, env = "MIMICRY_USER")]
        user: Option<String>,
    },

    /// Show a saved personality.
    Show {
        /// Personality ID.
        id: String,

        /// Print only the generated prompt.
        #[arg(long)]
        prompt: bool,
    },

    /// Delete a saved personality.
    #[command(alias = "rm")]
    Delete {
        /// Personality ID.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
