//! Runtime configuration: where the provider store lives.
//!
//! The store defaults to `$HOME/.resolution`. An explicit path (from
//! `--store` or `RESOLUTION_STORE`) takes precedence.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// File name of the provider store inside the home directory.
pub const STORE_FILE_NAME: &str = ".resolution";

/// Store location inside a given home directory.
#[must_use]
pub fn store_path_in(home: &Path) -> PathBuf {
    home.join(STORE_FILE_NAME)
}

/// Resolves the store location.
///
/// # Errors
///
/// Returns [`Error::Config`] if no explicit path is given and `HOME` is unset or empty.
pub fn resolve_store_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let home = env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .ok_or_else(|| Error::config("HOME is not set, pass --store to choose a store location"))?;
    Ok(store_path_in(Path::new(&home)))
}
