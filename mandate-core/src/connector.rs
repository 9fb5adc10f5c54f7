use async_trait::async_trait;

use crate::{DatasetId, Frame, MandateError, SeriesRequest, TimeSeries};
pub use mandate_types::ConnectorKey;

/// Focused role trait for connectors that serve single series by code.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Fetch the series named by `req`, filtered to its bounds and named per
    /// [`SeriesRequest::column_name`].
    async fn series(&self, req: &SeriesRequest) -> Result<TimeSeries, MandateError>;
}

/// Focused role trait for connectors that serve whole multi-column datasets.
#[async_trait]
pub trait DatasetProvider: Send + Sync {
    /// Fetch the dataset identified by `id`.
    async fn dataset(&self, id: DatasetId) -> Result<Frame, MandateError>;

    /// Datasets this connector can serve.
    fn supported_datasets(&self) -> &'static [DatasetId];
}

/// Main connector trait. Capabilities are advertised through `as_*_provider`.
pub trait MandateConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "mandate-fred").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise series capability by returning a usable trait object reference when supported.
    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        None
    }

    /// Advertise dataset capability by returning a usable trait object reference when supported.
    fn as_dataset_provider(&self) -> Option<&dyn DatasetProvider> {
        None
    }
}

/// Generate `as_*_provider` accessors for a wrapper that implements
/// `MandateConnector` by delegating to an inner field.
///
/// The wrapper must itself implement every role trait.
#[macro_export]
macro_rules! mandate_connector_accessors {
    ($inner:ident) => {
        fn as_series_provider(&self) -> Option<&dyn $crate::connector::SeriesProvider> {
            if self.$inner.as_series_provider().is_some() {
                Some(self as &dyn $crate::connector::SeriesProvider)
            } else {
                None
            }
        }
        fn as_dataset_provider(&self) -> Option<&dyn $crate::connector::DatasetProvider> {
            if self.$inner.as_dataset_provider().is_some() {
                Some(self as &dyn $crate::connector::DatasetProvider)
            } else {
                None
            }
        }
    };
}
