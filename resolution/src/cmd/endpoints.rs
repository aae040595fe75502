//! `resolution endpoints` command — print the endpoint map as JSON.

use crate::error::{Error, Result};
use crate::resolver::ProviderResolver;
use crate::store::ConfigStore;

/// Execute the `endpoints` command.
///
/// # Errors
///
/// Returns an error if the store exists but cannot be read.
#[allow(clippy::print_stdout)]
pub fn run<S: ConfigStore>(resolver: &ProviderResolver<S>) -> Result<()> {
    let endpoints = resolver.build_endpoint_map()?;
    let json = serde_json::to_string_pretty(&endpoints)
        .map_err(|e| Error::config(format!("failed to encode endpoint map: {e}")))?;
    println!("{json}");
    Ok(())
}
