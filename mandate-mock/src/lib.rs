//! mandate-mock
//!
//! Offline connectors for tests and the dashboard's `--mock` mode.
//!
//! - [`MockConnector`] serves deterministic fixtures for every series code the
//!   dashboard reads plus both San Francisco Fed datasets.
//! - [`DynamicMockConnector`] defers every call to rules scripted through its
//!   [`DynamicMockController`].
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use mandate_core::connector::{DatasetProvider, MandateConnector, SeriesProvider};
use mandate_core::{DatasetId, Frame, MandateError, SeriesRequest, TimeSeries};

mod dynamic;
/// Fixture data backing [`MockConnector`].
pub mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

const DATASETS: &[DatasetId] = &[
    DatasetId::CyclicalAcyclicalYoy,
    DatasetId::CyclicalAcyclicalMom,
];

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
///
/// Two codes are reserved: `FAIL` returns a connector error and `TIMEOUT`
/// sleeps for 200 ms before answering `NotFound`, long enough for a short
/// provider timeout to fire.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Static connector name.
    pub const NAME: &'static str = "mandate-mock";

    /// Create the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_timeout(code: &str, capability: &'static str) -> Result<(), MandateError> {
        match code {
            "FAIL" => Err(MandateError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl MandateConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }

    fn as_dataset_provider(&self) -> Option<&dyn DatasetProvider> {
        Some(self as &dyn DatasetProvider)
    }
}

#[async_trait]
impl SeriesProvider for MockConnector {
    async fn series(&self, req: &SeriesRequest) -> Result<TimeSeries, MandateError> {
        req.validate()?;
        let code = req.code().as_str();
        Self::maybe_fail_or_timeout(code, "series").await?;
        let full = fixtures::series(code)
            .ok_or_else(|| MandateError::not_found(format!("series {code}")))?;
        Ok(full
            .between(req.start(), req.end())
            .renamed(req.column_name()))
    }
}

#[async_trait]
impl DatasetProvider for MockConnector {
    async fn dataset(&self, id: DatasetId) -> Result<Frame, MandateError> {
        Ok(fixtures::dataset(id))
    }

    fn supported_datasets(&self) -> &'static [DatasetId] {
        DATASETS
    }
}
