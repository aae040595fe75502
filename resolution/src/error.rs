//! Unified error types for the resolution tool.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::ProviderKind;

/// Top-level error type for the resolution tool.
#[derive(Debug, Error)]
pub enum Error {
    /// Runtime configuration (store location, environment) could not be resolved.
    #[error("config: {0}")]
    Config(String),

    /// The provider store exists but could not be read.
    #[error("failed to read provider store '{}': {source}", .path.display())]
    StoreRead {
        /// Location of the store.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The provider store could not be written.
    #[error("failed to write provider store '{}': {source}", .path.display())]
    StoreWrite {
        /// Location of the store.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Only `infura` and `url` providers may be stored.
    #[error("provider kind '{0}' cannot be configured, use 'infura:<project key>' or 'url:<rpc url>'")]
    UnsettableKind(String),

    /// A settable provider kind was given without a value.
    #[error("provider kind '{0}' requires a non-empty value")]
    EmptyValue(ProviderKind),

    /// Provider values are stored on a single line.
    #[error("provider value for '{0}' must not contain line breaks")]
    MultilineValue(ProviderKind),

    /// Endpoint probing could not be set up or reported failures.
    #[error("probe: {0}")]
    Probe(String),
}

impl Error {
    /// Shorthand for [`Error::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Shorthand for [`Error::Probe`].
    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe(msg.into())
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
