use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type shared by every crate in the workspace.
///
/// Connector failures are tagged with the connector name; the router folds
/// per-provider failures into `AllProvidersFailed` or `AllProvidersTimedOut`.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MandateError {
    /// No registered connector serves the capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// "series" or "dataset", optionally with the dataset id.
        capability: String,
    },

    /// Malformed CSV rows, missing columns or a missing rebase anchor.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A connector's upstream call failed.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name.
        connector: String,
        /// Upstream message.
        msg: String,
    },

    /// Transport-level failure not attributed to a connector yet.
    #[error("unknown error: {0}")]
    Other(String),

    /// Upstream has no such series or dataset.
    #[error("not found: {what}")]
    NotFound {
        /// e.g. "series PAYEMS".
        what: String,
    },

    /// Every provider tried failed; holds each failure in priority order.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<MandateError>),

    /// One provider call ran past the per-provider timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector that timed out.
        connector: String,
        /// Capability label.
        capability: String,
    },

    /// A whole series or panel fetch ran past the request deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label.
        capability: String,
    },

    /// Every provider tried timed out.
    #[error("all providers timed out: {capability}")]
    AllProvidersTimedOut {
        /// Capability label.
        capability: String,
    },
}

impl MandateError {
    /// Build an `Unsupported` error.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Build a `Connector` error.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Build a `NotFound` error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// True for any of the timeout variants; the dashboard answers these with 504.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            Self::ProviderTimeout { .. }
                | Self::RequestTimeout { .. }
                | Self::AllProvidersTimedOut { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_are_recognized_and_others_are_not() {
        assert!(MandateError::provider_timeout("mandate-fred", "series").is_timeout());
        assert!(MandateError::request_timeout("panel").is_timeout());
        assert!(
            MandateError::AllProvidersTimedOut {
                capability: "series".into()
            }
            .is_timeout()
        );
        assert!(!MandateError::not_found("series PAYEMS").is_timeout());
        assert!(
            !MandateError::AllProvidersFailed(vec![MandateError::request_timeout("x")])
                .is_timeout()
        );
    }

    #[test]
    fn messages_name_the_connector_and_resource() {
        assert_eq!(
            MandateError::connector("mandate-fred", "upstream 500").to_string(),
            "mandate-fred failed: upstream 500"
        );
        assert_eq!(
            MandateError::not_found("series PAYEMS").to_string(),
            "not found: series PAYEMS"
        );
    }
}
