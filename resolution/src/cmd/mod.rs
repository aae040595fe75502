//! CLI definitions and command implementations for the resolution tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod configure;
pub mod endpoints;
pub mod probe;
pub mod show;

/// Blockchain provider configuration for ENS/CNS name resolution.
#[derive(Debug, Parser)]
#[command(name = "resolution")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Provider store location (defaults to `$HOME/.resolution`).
    #[arg(long, global = true, env = "RESOLUTION_STORE")]
    pub store: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set (e.g. `debug`).
    #[arg(long, global = true, env = "RESOLUTION_LOG")]
    pub log_level: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store the blockchain provider, as `infura:<project key>` or `url:<rpc url>`.
    Configure {
        /// Provider in `kind:value` form.
        provider: String,
    },

    /// Show the stored provider and the endpoint it resolves to.
    Show,

    /// Print the endpoint map handed to resolution clients, as JSON.
    Endpoints,

    /// Query each chain's endpoint over JSON-RPC and report the results.
    Probe {
        /// Comma-separated chains to probe.
        #[arg(short, long, default_value = "ens,cns")]
        chains: String,

        /// Per-request timeout in seconds.
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
}

/// Splits a comma-separated list and upper-cases every entry.
#[must_use]
pub fn comma_separated_list(value: &str) -> Vec<String> {
    value.split(',').map(str::to_uppercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_list_is_split_and_uppercased() {
        assert_eq!(comma_separated_list("btc,eth,zil"), ["BTC", "ETH", "ZIL"]);
        assert_eq!(comma_separated_list("ens"), ["ENS"]);
    }

    #[test]
    fn cli_parses_configure() {
        let cli = Cli::try_parse_from(["resolution", "configure", "url:http://a:8080"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Configure { ref provider } if provider == "url:http://a:8080"
        ));
    }

    #[test]
    fn cli_accepts_global_store_after_subcommand() {
        let cli = Cli::try_parse_from(["resolution", "show", "--store", "/tmp/x"]).unwrap();
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/x")));
    }
}
