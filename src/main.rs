//! solbundle CLI - per-network contract deployment manifests
//!
//! Usage: solbundle <COMMAND>
//!
//! Commands:
//!   plan      Resolve declared contracts against the lock file
//!   commit    Record executor results in the lock file
//!   forget    Remove lock entries
//!   config    Show the effective configuration
//!   networks  List configured networks
//!   init      Write a starter solbundle.toml

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use solbundle::presentation::{Cli, Commands, OutputFormat};

/// Overrides the `-v` derived log filter
const LOG_ENV: &str = "SOLBUNDLE_LOG";

fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = OutputFormat::from_flag(cli.json);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Plan { network, out } => {
            commands::plan::cmd_plan(config, &network, out.as_deref(), format)
        }
        Commands::Commit { plan, results } => {
            commands::commit::cmd_commit(&plan, &results, format)
        }
        Commands::Forget { network, contracts } => {
            commands::forget::cmd_forget(config, &network, &contracts, format)
        }
        Commands::Config => commands::config::cmd_config(config, format),
        Commands::Networks => commands::networks::cmd_networks(config, format),
        Commands::Init { force } => commands::init::cmd_init(config, force, format),
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(format!("solbundle={}", log_level(verbose)))
    });
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(7), "trace");
    }

    #[test]
    fn cli_parses_networks() {
        let cli = Cli::try_parse_from(["solbundle", "networks"]).unwrap();
        assert!(matches!(cli.command, Commands::Networks));
    }
}
