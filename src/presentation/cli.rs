//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --verbose) are inherited by all subcommands
//! - `plan` and `commit` exchange JSON files with the external executor

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// solbundle - per-network contract deployment manifests
#[derive(Parser, Debug)]
#[command(name = "solbundle")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Set SOLBUNDLE_LOG (e.g. 'solbundle=debug') for detailed logs.")]
pub struct Cli {
    /// Path to solbundle.toml (default: nearest one above the working directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve declared contracts against the network's lock file
    Plan {
        /// Network to plan for (hardhat, localhost, mainnet)
        #[arg(short, long)]
        network: String,

        /// Write the plan JSON here for the executor
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Record executor results in the lock file
    Commit {
        /// Plan JSON produced by `plan --out`
        #[arg(short, long, value_name = "PATH")]
        plan: PathBuf,

        /// Results JSON: [{"contract": "...", "address": "0x..."}]
        #[arg(short, long, value_name = "PATH")]
        results: PathBuf,
    },

    /// Remove lock entries so the contracts deploy again
    Forget {
        #[arg(short, long)]
        network: String,

        /// Contract names to remove
        #[arg(required = true)]
        contracts: Vec<String>,
    },

    /// Show the effective configuration (secrets redacted)
    Config,

    /// List configured networks
    Networks,

    /// Write a starter solbundle.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}
