//! `resolution` command-line entry point.
//!
//! ```sh
//! resolution configure infura:<project key>   # or url:<rpc url>
//! resolution show                             # stored provider + endpoints
//! resolution endpoints                        # endpoint map as JSON
//! resolution probe --chains ens,cns           # JSON-RPC reachability check
//! ```

use clap::Parser;
use dotenvy::dotenv;
use resolution::cmd::{self, Cli, Commands};
use resolution::config::resolve_store_path;
use resolution::telemetry::Telemetry;
use resolution::{FileStore, ProviderResolver, Result};

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() {
    // Load .env before parsing so env-backed flags can come from it.
    dotenv().ok();
    let cli = Cli::parse();
    Telemetry::new().with_log_level(cli.log_level.clone()).register();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = FileStore::new(resolve_store_path(cli.store)?);
    let resolver = ProviderResolver::new(store);

    match cli.command {
        Commands::Configure { provider } => cmd::configure::run(&resolver, &provider),
        Commands::Show => cmd::show::run(&resolver),
        Commands::Endpoints => cmd::endpoints::run(&resolver),
        Commands::Probe {
            chains,
            timeout_secs,
        } => cmd::probe::run(&resolver, &chains, timeout_secs).await,
    }
}
