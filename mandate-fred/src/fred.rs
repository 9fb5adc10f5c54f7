use std::sync::Arc;

use async_trait::async_trait;
use mandate_core::{
    MandateError, SeriesRequest, TimeSeries,
    connector::{ConnectorKey, MandateConnector, SeriesProvider},
};

use crate::adapter::CsvFetch;
use crate::adapter::ReqwestFetch;
use crate::{FetchArc, checked_base, join_url, normalize_error, parse};

/// FRED graph CSV connector. Serves any series by its FRED code.
pub struct FredConnector {
    fetch: FetchArc,
    base: String,
}

impl FredConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("mandate-fred");

    /// Public FRED host.
    pub const DEFAULT_BASE_URL: &'static str = "https://fred.stlouisfed.org";

    fn with_fetch(fetch: FetchArc) -> Self {
        Self {
            fetch,
            base: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build with a fresh `reqwest` client inside.
    #[must_use]
    pub fn new_default() -> Self {
        Self::with_fetch(Arc::new(ReqwestFetch::new_default()))
    }

    /// Build from an existing `reqwest::Client`.
    #[must_use]
    pub fn new_with_client(http: reqwest::Client) -> Self {
        Self::with_fetch(Arc::new(ReqwestFetch::new(http)))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_fetch(fetch: Arc<dyn CsvFetch>) -> Self {
        Self::with_fetch(fetch)
    }

    /// Point the connector at another host (a mirror or a local test server).
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base` is not an absolute URL.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, MandateError> {
        self.base = checked_base(base)?;
        Ok(self)
    }

    /// Download URL for `req`, with the observation bounds passed upstream.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured base cannot form a URL.
    pub fn series_url(&self, req: &SeriesRequest) -> Result<url::Url, MandateError> {
        let mut url = join_url(&self.base, "graph/fredgraph.csv")?;
        {
            let mut q = url.query_pairs_mut();
            q.append_pair("id", req.code().as_str());
            if let Some(start) = req.start() {
                q.append_pair("cosd", &start.format("%Y-%m-%d").to_string());
            }
            if let Some(end) = req.end() {
                q.append_pair("coed", &end.format("%Y-%m-%d").to_string());
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl SeriesProvider for FredConnector {
    async fn series(&self, req: &SeriesRequest) -> Result<TimeSeries, MandateError> {
        req.validate()?;
        let what = format!("series {}", req.code());
        let url = self.series_url(req)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, "fetching FRED series");
        let body = self
            .fetch
            .get_text(url.as_str())
            .await
            .map_err(|e| normalize_error(e, Self::KEY.as_str(), &what))?;
        let series = parse::parse_series(&body, req.code().as_str(), req.column_name())
            .map_err(|e| normalize_error(e, Self::KEY.as_str(), &what))?;
        Ok(series.between(req.start(), req.end()))
    }
}

impl MandateConnector for FredConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Federal Reserve Bank of St. Louis"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }
}
