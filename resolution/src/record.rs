//! Provider record types and the `kind:value` command-line format.
//!
//! A [`ProviderRecord`] pairs a [`ProviderKind`] with its value: an Infura
//! project key, a full RPC URL, or nothing at all when no provider has been
//! configured. Records are immutable; every resolution reads a fresh one.

use std::fmt;

/// Class of blockchain RPC access a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Infura gateway, value is the project key.
    Infura,
    /// Arbitrary JSON-RPC URL, value is the URL itself.
    Url,
    /// Nothing usable configured.
    Unknown,
}

impl ProviderKind {
    /// Maps a textual tag onto a kind. Unrecognised tags become [`ProviderKind::Unknown`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "infura" => Self::Infura,
            "url" => Self::Url,
            _ => Self::Unknown,
        }
    }

    /// Textual tag used both on disk and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Infura => "infura",
            Self::Url => "url",
            Self::Unknown => "unknown",
        }
    }

    /// Whether a user may store this kind.
    #[must_use]
    pub const fn is_settable(self) -> bool {
        matches!(self, Self::Infura | Self::Url)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A provider kind together with its value.
///
/// Only [`ProviderKind::Unknown`] may carry an empty value: a settable kind
/// constructed with an empty value is downgraded to `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRecord {
    kind: ProviderKind,
    value: String,
}

impl ProviderRecord {
    /// Creates a record, enforcing the empty-value rule.
    pub fn new(kind: ProviderKind, value: impl Into<String>) -> Self {
        let value = value.into();
        if kind.is_settable() && value.is_empty() {
            tracing::debug!(%kind, "empty provider value, treating record as unknown");
            return Self::unset();
        }
        Self { kind, value }
    }

    /// The record used when nothing has been configured.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            kind: ProviderKind::Unknown,
            value: String::new(),
        }
    }

    /// Builds a record from a textual kind tag and a value.
    pub fn from_tag(tag: &str, value: impl Into<String>) -> Self {
        let kind = ProviderKind::from_tag(tag);
        if kind == ProviderKind::Unknown && tag != ProviderKind::Unknown.as_str() {
            tracing::debug!(tag, "unrecognised provider kind, treating record as unknown");
        }
        Self::new(kind, value)
    }

    /// Provider kind.
    #[must_use]
    pub const fn kind(&self) -> ProviderKind {
        self.kind
    }

    /// Provider value (key or URL).
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Parses command-line provider input of the form `kind:value`.
///
/// The first `:` separates the kind from the value, so URLs with ports or
/// schemes survive intact: `url:http://a:8080` yields the value
/// `http://a:8080`. Input without a colon is a bare kind with no value.
#[must_use]
pub fn parse_config(raw: &str) -> ProviderRecord {
    let (tag, value) = split_provider_input(raw);
    ProviderRecord::from_tag(tag, value)
}

/// Splits `kind:value` input on the first `:` without interpreting either half.
#[must_use]
pub fn split_provider_input(raw: &str) -> (&str, &str) {
    raw.split_once(':').unwrap_or((raw, ""))
}
