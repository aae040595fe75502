//! `resolution probe` command — check that each chain's endpoint answers.

use std::time::Duration;

use crate::cmd::comma_separated_list;
use crate::endpoint::ChainKey;
use crate::error::{Error, Result};
use crate::probe::RpcProbe;
use crate::resolver::ProviderResolver;
use crate::store::ConfigStore;

/// Execute the `probe` command.
///
/// Prints one JSON object with a field per lookup, then fails if any lookup
/// did.
///
/// # Errors
///
/// Returns an error if a chain name is not recognised, the store cannot be
/// read, or any lookup fails.
#[allow(clippy::print_stdout)]
pub async fn run<S: ConfigStore>(
    resolver: &ProviderResolver<S>,
    chains: &str,
    timeout_secs: u64,
) -> Result<()> {
    let chains = parse_chains(chains)?;
    let probe = resolver
        .build_client::<RpcProbe>()?
        .with_timeout(Duration::from_secs(timeout_secs));

    let (response, all_ok) = probe.probe(&chains).await;
    let json = serde_json::to_string_pretty(&response)
        .map_err(|e| Error::probe(format!("failed to encode probe results: {e}")))?;
    println!("{json}");

    if all_ok {
        Ok(())
    } else {
        Err(Error::probe("one or more lookups failed"))
    }
}

fn parse_chains(raw: &str) -> Result<Vec<ChainKey>> {
    comma_separated_list(raw)
        .iter()
        .map(|chain| chain.trim().parse::<ChainKey>().map_err(Error::probe))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_list_is_case_insensitive() {
        assert_eq!(
            parse_chains("ens,CNS").unwrap(),
            [ChainKey::Ens, ChainKey::Cns]
        );
    }

    #[test]
    fn unknown_chain_is_rejected() {
        assert!(matches!(parse_chains("ens,zns"), Err(Error::Probe(_))));
    }
}
