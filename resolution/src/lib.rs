//! Blockchain provider configuration for ENS/CNS name resolution.
//!
//! Stores which JSON-RPC provider name-resolution clients should use and
//! resolves it into the endpoint map those clients consume, falling back to
//! a public endpoint when nothing is configured.
//!
//! - [`store`] — single-record provider store (`$HOME/.resolution`).
//! - [`resolver`] — provider dispatch and [`EndpointMap`] construction.
//! - [`diagnostic`] — [`try_info`] outcome collection for diagnostic output.
//! - [`probe`] — JSON-RPC reachability client built from an [`EndpointMap`].
//! - [`cmd`] — CLI definitions and command implementations.

pub mod cmd;
pub mod config;
pub mod diagnostic;
pub mod endpoint;
pub mod error;
pub mod probe;
pub mod record;
pub mod resolver;
pub mod store;
pub mod telemetry;
#[cfg(test)]
mod testing;

pub use self::diagnostic::{Collector, LookupError, ResolutionErrorCode, try_info};
pub use self::endpoint::{ChainKey, EndpointMap, FromEndpoints};
pub use self::error::{Error, Result};
pub use self::record::{ProviderKind, ProviderRecord, parse_config, split_provider_input};
pub use self::resolver::{DEFAULT_PROVIDER_URL, ProviderResolver, resolve_endpoint};
pub use self::store::{ConfigStore, FileStore};
