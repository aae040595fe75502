//! JSON-RPC reachability probe for the resolved endpoints.
//!
//! [`RpcProbe`] is built from an [`EndpointMap`] through [`FromEndpoints`],
//! the same seam a resolution client uses, and queries each chain's endpoint
//! with a couple of cheap read-only calls.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::diagnostic::{Collector, LookupError, ResolutionErrorCode, try_info};
use crate::endpoint::{ChainKey, EndpointMap, FromEndpoints};
use crate::error::Result;

/// Per-request timeout unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Methods queried for every chain, paired with the field suffix they report under.
const PROBE_METHODS: [(&str, &str); 2] = [("eth_chainId", "chainId"), ("eth_blockNumber", "blockNumber")];

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Minimal JSON-RPC client over the resolved endpoints.
#[derive(Debug, Clone)]
pub struct RpcProbe {
    http: reqwest::Client,
    endpoints: EndpointMap,
    timeout: Duration,
}

impl FromEndpoints for RpcProbe {
    fn from_endpoints(endpoints: EndpointMap) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoints,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

impl RpcProbe {
    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Issues a parameterless JSON-RPC call against a chain's endpoint.
    ///
    /// # Errors
    ///
    /// Unreachable endpoints and HTTP failures are classified; JSON-RPC
    /// error objects and malformed replies are reported by message.
    pub async fn call(&self, chain: ChainKey, method: &str) -> Result<String, LookupError> {
        let endpoint = self.endpoints.get(chain).ok_or_else(|| {
            LookupError::classified(
                ResolutionErrorCode::UnsupportedService,
                format!("no endpoint configured for {chain}"),
            )
        })?;
        let body = json!({ "jsonrpc": "2.0", "id": 1, "method": method, "params": [] });
        let response = self
            .http
            .post(endpoint)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(classify_transport)?;
        let response: RpcResponse = response.json().await.map_err(LookupError::unclassified)?;
        decode_response(response)
    }

    /// Probes every requested chain, recording one field per call.
    ///
    /// Returns the collector and whether every call succeeded.
    pub async fn probe(&self, chains: &[ChainKey]) -> (Collector, bool) {
        let mut response = Collector::new();
        let mut all_ok = true;
        for &chain in chains {
            let endpoint = self.endpoints.get(chain).unwrap_or_default().to_owned();
            response.insert(format!("{chain}.endpoint"), endpoint);
            for (method, suffix) in PROBE_METHODS {
                let field = format!("{chain}.{suffix}");
                all_ok &= try_info(|| self.call(chain, method), &mut response, &field).await;
            }
        }
        (response, all_ok)
    }
}

fn classify_transport(err: reqwest::Error) -> LookupError {
    if err.is_connect() || err.is_timeout() {
        LookupError::classified(ResolutionErrorCode::NamingServiceDown, err.to_string())
    } else if err.is_status() {
        LookupError::classified(ResolutionErrorCode::ServiceProviderError, err.to_string())
    } else {
        LookupError::unclassified(err)
    }
}

fn decode_response(response: RpcResponse) -> Result<String, LookupError> {
    if let Some(error) = response.error {
        return Err(LookupError::Unclassified(format!(
            "{} (code {})",
            error.message, error.code
        )));
    }
    match response.result {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Null) | None => Err(LookupError::unclassified("empty JSON-RPC result")),
        Some(other) => Ok(other.to_string()),
    }
}
