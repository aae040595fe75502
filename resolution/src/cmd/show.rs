//! `resolution show` command — print the stored provider and its endpoints.

use crate::error::Result;
use crate::resolver::ProviderResolver;
use crate::store::FileStore;

/// Execute the `show` command.
///
/// # Errors
///
/// Returns an error if the store exists but cannot be read.
#[allow(clippy::print_stdout)]
pub fn run(resolver: &ProviderResolver<FileStore>) -> Result<()> {
    let (record, endpoints) = resolver.resolve()?;
    println!("store: {}", resolver.store().path().display());
    println!("provider: {}={}", record.kind(), record.value());
    for (chain, url) in endpoints.iter() {
        println!("{chain}: {url}");
    }
    Ok(())
}
