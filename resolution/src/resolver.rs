//! Provider selection: turns the stored record into concrete endpoints.
//!
//! Resolution is total. Every [`ProviderRecord`] maps to exactly one URL,
//! falling back to a public endpoint when nothing usable is configured.
//! A misconfigured key or URL still yields an endpoint; the failure only
//! shows once a client uses it.

use url::Url;

use crate::endpoint::{EndpointMap, FromEndpoints};
use crate::error::{Error, Result};
use crate::record::{ProviderKind, ProviderRecord};
use crate::store::ConfigStore;

/// Public endpoint used when no provider is configured.
pub const DEFAULT_PROVIDER_URL: &str = "https://main-rpc.linkpool.io/";

/// Infura mainnet gateway; the project key is appended as the last path segment.
pub const INFURA_MAINNET_URL: &str = "https://mainnet.infura.io/v3/";

/// Infura mainnet URL for a project key. The key is not validated or escaped.
#[must_use]
pub fn signed_infura_link(key: &str) -> String {
    format!("{INFURA_MAINNET_URL}{key}")
}

/// Derives the RPC endpoint for a record.
#[must_use]
pub fn resolve_endpoint(record: &ProviderRecord) -> String {
    match record.kind() {
        ProviderKind::Infura => signed_infura_link(record.value()),
        ProviderKind::Url => record.value().to_owned(),
        ProviderKind::Unknown => DEFAULT_PROVIDER_URL.to_owned(),
    }
}

/// Reads provider choices from a [`ConfigStore`] and resolves them.
///
/// Holds no cached record: every call re-reads the store, so changes made
/// by another process are picked up on the next resolution.
#[derive(Debug)]
pub struct ProviderResolver<S> {
    store: S,
}

impl<S: ConfigStore> ProviderResolver<S> {
    /// Creates a resolver over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reads the current record once and resolves it to the endpoint map,
    /// one shared provider for every chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`] if the store exists but cannot be read.
    pub fn resolve(&self) -> Result<(ProviderRecord, EndpointMap)> {
        let record = self.store.get()?;
        let endpoint = resolve_endpoint(&record);
        tracing::debug!(kind = %record.kind(), %endpoint, "resolved provider endpoint");
        Ok((record, EndpointMap::shared(&endpoint)))
    }

    /// Builds the endpoint map, one shared provider for every chain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`] if the store exists but cannot be read.
    pub fn build_endpoint_map(&self) -> Result<EndpointMap> {
        self.resolve().map(|(_, endpoints)| endpoints)
    }

    /// Builds the endpoint map and hands it to a client constructor.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the client rejects the map.
    pub fn build_client<C: FromEndpoints>(&self) -> Result<C> {
        C::from_endpoints(self.build_endpoint_map()?)
    }

    /// Persists a provider choice. Only [`ProviderKind::Infura`] and
    /// [`ProviderKind::Url`] may be stored, and never with an empty value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsettableKind`], [`Error::EmptyValue`] or
    /// [`Error::MultilineValue`] without touching the store, or
    /// [`Error::StoreWrite`] if persisting fails.
    pub fn store_provider_choice(&self, kind: ProviderKind, value: &str) -> Result<()> {
        if !kind.is_settable() {
            return Err(Error::UnsettableKind(kind.to_string()));
        }
        if value.is_empty() {
            return Err(Error::EmptyValue(kind));
        }
        // The store holds one line; a line break would split the record on read.
        if value.contains(['\r', '\n']) {
            return Err(Error::MultilineValue(kind));
        }
        if kind == ProviderKind::Url
            && let Err(e) = Url::parse(value)
        {
            tracing::warn!(url = value, error = %e, "stored provider URL does not parse, requests will likely fail");
        }
        self.store.set(kind, value)
    }
}
