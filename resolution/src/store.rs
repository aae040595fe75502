//! Durable storage of the single provider record.
//!
//! On disk the record is one line, `{kind}={value}`, split on the first `=`
//! when read back. This differs from the `kind:value` command-line format
//! parsed by [`crate::record::parse_config`]; the two are kept apart.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::record::{ProviderKind, ProviderRecord};
use crate::resolver::DEFAULT_PROVIDER_URL;

/// Storage backend holding exactly one [`ProviderRecord`].
pub trait ConfigStore {
    /// Reads the stored record, returning [`ProviderRecord::unset`] when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreRead`] if the store exists but cannot be read.
    fn get(&self) -> Result<ProviderRecord>;

    /// Replaces the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StoreWrite`] if the record cannot be persisted.
    fn set(&self, kind: ProviderKind, value: &str) -> Result<()>;
}

/// File-backed store, normally `$HOME/.resolution`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at the given path. Nothing is touched until [`ConfigStore::get`] or [`ConfigStore::set`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn get(&self) -> Result<ProviderRecord> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let line = content.trim_end_matches(['\r', '\n']);
                if line.is_empty() {
                    warn_unconfigured("Configuration file is empty");
                    return Ok(ProviderRecord::unset());
                }
                Ok(decode_line(line))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn_unconfigured("Configuration file was not found");
                Ok(ProviderRecord::unset())
            }
            Err(source) => Err(Error::StoreRead {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn set(&self, kind: ProviderKind, value: &str) -> Result<()> {
        fs::write(&self.path, encode_line(kind, value)).map_err(|source| Error::StoreWrite {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!("{kind}={value} record stored");
        Ok(())
    }
}

/// Tells the user the public fallback endpoint is in use, and its limits.
fn warn_unconfigured(reason: &str) {
    tracing::warn!(
        "{reason}. Default blockchain provider: \"{DEFAULT_PROVIDER_URL}\" is being used"
    );
    tracing::warn!(
        "This RPC is limited to 2,000 calls per 5 minutes. If that is exceeded, then the source IP address is blocked."
    );
    tracing::warn!("To configure a different provider use `resolution configure <kind:value>`");
}

/// Serialises a record as it is written to disk.
fn encode_line(kind: ProviderKind, value: &str) -> String {
    format!("{kind}={value}")
}

/// Decodes the on-disk line, already stripped of trailing line terminators.
/// Only the first `=` separates kind from value.
fn decode_line(line: &str) -> ProviderRecord {
    let (tag, value) = line.split_once('=').unwrap_or((line, ""));
    ProviderRecord::from_tag(tag, value)
}
