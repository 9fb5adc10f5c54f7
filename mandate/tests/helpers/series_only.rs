use async_trait::async_trait;
use mandate::{MandateConnector, MandateError, SeriesProvider, SeriesRequest, TimeSeries};

/// Connector that serves one fixed series for any code and publishes no datasets.
pub struct SeriesOnly {
    pub name: &'static str,
    pub series: TimeSeries,
}

impl MandateConnector for SeriesOnly {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }
}

#[async_trait]
impl SeriesProvider for SeriesOnly {
    async fn series(&self, req: &SeriesRequest) -> Result<TimeSeries, MandateError> {
        Ok(self
            .series
            .between(req.start(), req.end())
            .renamed(req.column_name()))
    }
}
