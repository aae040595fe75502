//! Field-by-field diagnostics for command output.
//!
//! [`try_info`] runs one lookup and records its outcome in a collector,
//! turning failures into either a known [`ResolutionErrorCode`] or the raw
//! error text. It never propagates the failure.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Field name → reported value.
pub type Collector = BTreeMap<String, String>;

/// Known resolution error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionErrorCode {
    /// The domain has no owner on the registry.
    UnregisteredDomain,
    /// The domain exists but has no resolver set.
    UnspecifiedResolver,
    /// No naming service handles this domain.
    UnsupportedDomain,
    /// The naming service is not supported by this client.
    UnsupportedService,
    /// The requested method is not supported for this naming service.
    UnsupportedMethod,
    /// No currency ticker was given.
    UnspecifiedCurrency,
    /// The currency is not supported by the resolver.
    UnsupportedCurrency,
    /// The resolver contract does not implement the expected interface.
    IncorrectResolverInterface,
    /// The record is not set for this domain.
    RecordNotFound,
    /// The naming service endpoint could not be reached.
    NamingServiceDown,
    /// The RPC provider returned an error.
    ServiceProviderError,
    /// The metadata endpoint returned an error.
    MetadataEndpointError,
    /// The domain name is malformed.
    InvalidDomainAddress,
}

impl ResolutionErrorCode {
    /// Every known code.
    pub const ALL: [Self; 13] = [
        Self::UnregisteredDomain,
        Self::UnspecifiedResolver,
        Self::UnsupportedDomain,
        Self::UnsupportedService,
        Self::UnsupportedMethod,
        Self::UnspecifiedCurrency,
        Self::UnsupportedCurrency,
        Self::IncorrectResolverInterface,
        Self::RecordNotFound,
        Self::NamingServiceDown,
        Self::ServiceProviderError,
        Self::MetadataEndpointError,
        Self::InvalidDomainAddress,
    ];

    /// Stable code string reported to users.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnregisteredDomain => "UnregisteredDomain",
            Self::UnspecifiedResolver => "UnspecifiedResolver",
            Self::UnsupportedDomain => "UnsupportedDomain",
            Self::UnsupportedService => "UnsupportedService",
            Self::UnsupportedMethod => "UnsupportedMethod",
            Self::UnspecifiedCurrency => "UnspecifiedCurrency",
            Self::UnsupportedCurrency => "UnsupportedCurrency",
            Self::IncorrectResolverInterface => "IncorrectResolverInterface",
            Self::RecordNotFound => "RecordNotFound",
            Self::NamingServiceDown => "NamingServiceDown",
            Self::ServiceProviderError => "ServiceProviderError",
            Self::MetadataEndpointError => "MetadataEndpointError",
            Self::InvalidDomainAddress => "InvalidDomainAddress",
        }
    }

    /// Looks up a code by its string form.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ResolutionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure of a diagnostic lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Error from the known taxonomy; reported by code.
    #[error("{code}: {message}")]
    Classified {
        /// Taxonomy code.
        code: ResolutionErrorCode,
        /// Human-readable detail.
        message: String,
    },
    /// Anything else; reported by its message.
    #[error("{0}")]
    Unclassified(String),
}

impl LookupError {
    /// Classified failure.
    pub fn classified(code: ResolutionErrorCode, message: impl Into<String>) -> Self {
        Self::Classified {
            code,
            message: message.into(),
        }
    }

    /// Unclassified failure carrying raw error text.
    pub fn unclassified(message: impl fmt::Display) -> Self {
        Self::Unclassified(message.to_string())
    }

    /// Builds a failure from an error carrying a textual code, classifying
    /// it only when the code belongs to [`ResolutionErrorCode`].
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        match ResolutionErrorCode::from_code(code) {
            Some(code) => Self::classified(code, message),
            None => Self::Unclassified(message.into()),
        }
    }

    /// Value written to the collector: the code when classified, the message otherwise.
    #[must_use]
    pub fn report(&self) -> &str {
        match self {
            Self::Classified { code, .. } => code.as_str(),
            Self::Unclassified(message) => message,
        }
    }
}

/// Runs `operation` and records its outcome under `field`.
///
/// On success the value is stored and `true` is returned. On failure the
/// error's code (classified) or message (unclassified) is stored and `false`
/// is returned.
pub async fn try_info<F, Fut, T>(operation: F, response: &mut Collector, field: &str) -> bool
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, LookupError>>,
    T: fmt::Display,
{
    match operation().await {
        Ok(value) => {
            response.insert(field.to_owned(), value.to_string());
            true
        }
        Err(err) => {
            tracing::debug!(field, error = %err, "diagnostic lookup failed");
            response.insert(field.to_owned(), err.report().to_owned());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_stores_value() {
        let mut response = Collector::new();
        let ok = try_info(|| async { Ok::<_, LookupError>("0x1") }, &mut response, "chainId").await;
        assert!(ok);
        assert_eq!(response["chainId"], "0x1");
    }

    #[tokio::test]
    async fn classified_failure_stores_code() {
        let mut response = Collector::new();
        let ok = try_info(
            || async {
                Err::<String, _>(LookupError::classified(
                    ResolutionErrorCode::UnregisteredDomain,
                    "domain brad.crypto is not registered",
                ))
            },
            &mut response,
            "owner",
        )
        .await;
        assert!(!ok);
        assert_eq!(response["owner"], "UnregisteredDomain");
    }

    #[tokio::test]
    async fn unclassified_failure_stores_message() {
        let mut response = Collector::new();
        let ok = try_info(
            || async { Err::<String, _>(LookupError::unclassified("socket hang up")) },
            &mut response,
            "resolver",
        )
        .await;
        assert!(!ok);
        assert_eq!(response["resolver"], "socket hang up");
    }

    #[test]
    fn textual_codes_classify_only_when_known() {
        assert_eq!(
            LookupError::from_code("RecordNotFound", "no record"),
            LookupError::classified(ResolutionErrorCode::RecordNotFound, "no record")
        );
        assert_eq!(
            LookupError::from_code("ECONNRESET", "connection reset"),
            LookupError::Unclassified("connection reset".to_owned())
        );
    }

    #[test]
    fn code_strings_round_trip() {
        for code in ResolutionErrorCode::ALL {
            assert_eq!(ResolutionErrorCode::from_code(code.as_str()), Some(code));
        }
    }
}
