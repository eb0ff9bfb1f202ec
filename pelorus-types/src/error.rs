use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the pelorus workspace.
///
/// This wraps capability mismatches, argument validation errors,
/// connector-tagged failures, transport failures, and aggregates for
/// multi-provider attempts. Retry eligibility is decided by
/// [`FeedError::is_transient`]; everything else is treated as
/// deterministic and returned immediately.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FeedError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "disruptions").
        capability: String,
    },

    /// Issues with the returned or expected data (malformed payload,
    /// missing fields). Retrying will not fix these within one call.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Network-level failure: connection refused, reset, or an upstream
    /// 5xx. Transient by definition.
    #[error("transport failure: {msg}")]
    Transport {
        /// Human-readable transport error message.
        msg: String,
    },

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "tariffs for CN".
        what: String,
    },

    /// The direct request and every configured proxy failed for a URL.
    /// Callers must treat this as "no data", not as a fatal error.
    #[error("all transports exhausted for {url}")]
    AllSourcesExhausted {
        /// The target URL every attempt was made against.
        url: String,
    },

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<FeedError>),

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "ports", "disruptions").
        capability: String,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// All attempted providers timed out for the requested capability.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label that timed out across all providers.
        capability: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl FeedError {
    /// Helper: build an `Unsupported` error for a capability label.
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Transport` error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport { msg: msg.into() }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Helper: build an `AllSourcesExhausted` error for a target URL.
    pub fn exhausted(url: impl Into<String>) -> Self {
        Self::AllSourcesExhausted { url: url.into() }
    }

    /// Whether retrying the failed operation could plausibly succeed.
    ///
    /// Transient: timeouts, transport failures, and transport exhaustion.
    /// Deterministic (never retried): malformed data, invalid arguments,
    /// unsupported capabilities, not-found, and tagged connector errors
    /// of unknown cause.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. }
                | Self::ProviderTimeout { .. }
                | Self::RequestTimeout { .. }
                | Self::AllProvidersTimedOut { .. }
                | Self::AllSourcesExhausted { .. }
        )
    }
}
