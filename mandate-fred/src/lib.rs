//! mandate-fred
//!
//! Public connectors for the two upstream publishers the dashboard reads:
//! the St. Louis Fed's FRED graph CSV endpoint (single series by code) and
//! the San Francisco Fed's cyclical/acyclical core PCE files (whole datasets).
#![warn(missing_docs)]

/// Fetch abstraction and the production `reqwest`-backed fetcher.
pub mod adapter;
/// CSV parsing shared by both connectors.
pub mod parse;

mod frbsf;
mod fred;

use std::sync::Arc;

#[cfg(not(feature = "test-adapters"))]
use adapter::ReqwestFetch;

pub use frbsf::FrbsfConnector;
pub use fred::FredConnector;

#[cfg(feature = "test-adapters")]
type FetchArc = Arc<dyn adapter::CsvFetch>;
#[cfg(not(feature = "test-adapters"))]
type FetchArc = Arc<ReqwestFetch>;

fn looks_like_not_found(msg: &str) -> bool {
    let m = msg.to_ascii_lowercase();
    m.contains("not found") || m.contains("no data") || m.contains("does not exist")
}

/// Re-tag adapter failures with the connector name and fold not-found
/// conditions into `NotFound { what }`.
fn normalize_error(
    e: mandate_core::MandateError,
    connector: &'static str,
    what: &str,
) -> mandate_core::MandateError {
    use mandate_core::MandateError;
    match e {
        MandateError::Connector { msg, .. } => {
            if looks_like_not_found(&msg) {
                MandateError::not_found(what.to_string())
            } else {
                MandateError::connector(connector, msg)
            }
        }
        MandateError::NotFound { .. } => MandateError::not_found(what.to_string()),
        MandateError::Other(msg) => MandateError::connector(connector, msg),
        other => other,
    }
}

fn join_url(base: &str, path: &str) -> Result<url::Url, mandate_core::MandateError> {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    url::Url::parse(&joined)
        .map_err(|e| mandate_core::MandateError::InvalidArg(format!("bad url '{joined}': {e}")))
}

fn checked_base(base: &str) -> Result<String, mandate_core::MandateError> {
    let parsed = url::Url::parse(base)
        .map_err(|e| mandate_core::MandateError::InvalidArg(format!("bad base url '{base}': {e}")))?;
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
