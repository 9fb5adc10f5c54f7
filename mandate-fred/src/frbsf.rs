use std::sync::Arc;

use async_trait::async_trait;
use mandate_core::{
    DatasetId, Frame, MandateError,
    connector::{ConnectorKey, DatasetProvider, MandateConnector},
};

use crate::adapter::CsvFetch;
use crate::adapter::ReqwestFetch;
use crate::{FetchArc, checked_base, join_url, normalize_error, parse};

const DATASETS: &[DatasetId] = &[
    DatasetId::CyclicalAcyclicalYoy,
    DatasetId::CyclicalAcyclicalMom,
];

/// San Francisco Fed connector for the cyclical/acyclical core PCE files.
pub struct FrbsfConnector {
    fetch: FetchArc,
    base: String,
}

impl FrbsfConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("mandate-frbsf");

    /// Public SF Fed host.
    pub const DEFAULT_BASE_URL: &'static str = "https://www.frbsf.org";

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

    /// Point the connector at another host.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `base` is not an absolute URL.
    pub fn with_base_url(mut self, base: &str) -> Result<Self, MandateError> {
        self.base = checked_base(base)?;
        Ok(self)
    }

    /// Path of the published file for `id`, relative to the host.
    #[must_use]
    pub const fn path_for(id: DatasetId) -> &'static str {
        match id {
            DatasetId::CyclicalAcyclicalYoy => "wp-content/uploads/cyclical_acyclical_data_chart_1.csv",
            DatasetId::CyclicalAcyclicalMom => {
                "wp-content/uploads/cyclical_acyclical_data_chart_2_monthly.csv"
            }
        }
    }
}

#[async_trait]
impl DatasetProvider for FrbsfConnector {
    async fn dataset(&self, id: DatasetId) -> Result<Frame, MandateError> {
        let what = format!("dataset {id}");
        let url = join_url(&self.base, Self::path_for(id))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(url = %url, dataset = %id, "fetching SF Fed dataset");
        let body = self
            .fetch
            .get_text(url.as_str())
            .await
            .map_err(|e| normalize_error(e, Self::KEY.as_str(), &what))?;
        parse::parse_frame(&body).map_err(|e| normalize_error(e, Self::KEY.as_str(), &what))
    }

    fn supported_datasets(&self) -> &'static [DatasetId] {
        DATASETS
    }
}

impl MandateConnector for FrbsfConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Federal Reserve Bank of San Francisco"
    }

    fn as_dataset_provider(&self) -> Option<&dyn DatasetProvider> {
        Some(self as &dyn DatasetProvider)
    }
}
