//! Endpoint map handed to name-resolution clients.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;

/// Logical naming-system identifier served by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainKey {
    /// Ethereum Name Service.
    Ens,
    /// Crypto Name Service (Unstoppable Domains registry on Ethereum).
    Cns,
}

impl ChainKey {
    /// Every identifier a resolution client expects to find.
    pub const ALL: [Self; 2] = [Self::Ens, Self::Cns];

    /// Lowercase identifier used in the client configuration object.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ens => "ens",
            Self::Cns => "cns",
        }
    }
}

impl fmt::Display for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ens" => Ok(Self::Ens),
            "cns" => Ok(Self::Cns),
            other => Err(format!("unknown chain '{other}', expected 'ens' or 'cns'")),
        }
    }
}

/// Chain identifier → RPC URL mapping.
///
/// Serialises as the blockchain section of a resolution client
/// configuration, e.g. `{"ens": "...", "cns": "..."}`. Built once per
/// resolution and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EndpointMap(BTreeMap<ChainKey, String>);

impl EndpointMap {
    /// Maps every [`ChainKey`] to the same endpoint.
    #[must_use]
    pub fn shared(endpoint: &str) -> Self {
        Self(
            ChainKey::ALL
                .into_iter()
                .map(|chain| (chain, endpoint.to_owned()))
                .collect(),
        )
    }

    /// Endpoint for a chain, if present.
    #[must_use]
    pub fn get(&self, chain: ChainKey) -> Option<&str> {
        self.0.get(&chain).map(String::as_str)
    }

    /// Iterates entries in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (ChainKey, &str)> {
        self.0.iter().map(|(chain, url)| (*chain, url.as_str()))
    }

    /// Number of chains configured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no chain is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Constructor seam for resolution clients consuming an [`EndpointMap`].
pub trait FromEndpoints: Sized {
    /// Builds the client from the resolved endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be constructed.
    fn from_endpoints(endpoints: EndpointMap) -> Result<Self>;
}
