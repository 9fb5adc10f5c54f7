use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mandate_core::connector::{DatasetProvider, MandateConnector, SeriesProvider};
use mandate_core::{DatasetId, Frame, MandateError, SeriesCode, SeriesRequest, TimeSeries};
use mandate_types::{CacheConfig, Capability};
use moka::future::Cache;

/// Identity of a series fetch. The output name is not part of the key, so
/// two requests that differ only in their label share one entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SeriesKey {
    code: SeriesCode,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl From<&SeriesRequest> for SeriesKey {
    fn from(req: &SeriesRequest) -> Self {
        Self {
            code: req.code().clone(),
            start: req.start(),
            end: req.end(),
        }
    }
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Create a caching layer with the given configuration.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl mandate_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn MandateConnector>) -> Arc<dyn MandateConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CachingMiddleware"
    }
}

/// Connector wrapper that memoizes successful series and dataset fetches.
///
/// Concurrent misses on the same key are coalesced into one upstream call.
/// Errors are returned to every waiter and never stored.
pub struct CachingConnector {
    inner: Arc<dyn MandateConnector>,
    // `None` means disabled (TTL = 0).
    series: Option<Cache<SeriesKey, Arc<TimeSeries>>>,
    datasets: Option<Cache<DatasetId, Arc<Frame>>>,
}

impl CachingConnector {
    fn maybe_store<K, V>(cfg: &CacheConfig, cap: Capability) -> Option<Cache<K, V>>
    where
        K: std::hash::Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let ttl = cfg.ttl_for(cap)?;
        Some(
            Cache::builder()
                .max_capacity(cfg.capacity_for(cap))
                .time_to_live(ttl)
                .build(),
        )
    }

    /// Wrap `inner` with stores sized and timed per `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn MandateConnector>, cfg: &CacheConfig) -> Self {
        Self {
            inner,
            series: Self::maybe_store(cfg, Capability::Series),
            datasets: Self::maybe_store(cfg, Capability::Dataset),
        }
    }

    fn inner_series(&self) -> Result<&dyn SeriesProvider, MandateError> {
        self.inner
            .as_series_provider()
            .ok_or_else(|| MandateError::unsupported(Capability::Series.as_str()))
    }

    fn inner_dataset(&self) -> Result<&dyn DatasetProvider, MandateError> {
        self.inner
            .as_dataset_provider()
            .ok_or_else(|| MandateError::unsupported(Capability::Dataset.as_str()))
    }
}

impl MandateConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    mandate_core::mandate_connector_accessors!(inner);
}

#[async_trait]
impl SeriesProvider for CachingConnector {
    async fn series(&self, req: &SeriesRequest) -> Result<TimeSeries, MandateError> {
        let Some(store) = &self.series else {
            return self.inner_series()?.series(req).await;
        };
        let inner = self.inner_series()?;
        let hit = store
            .try_get_with(SeriesKey::from(req), async {
                #[cfg(feature = "tracing")]
                tracing::debug!(code = %req.code(), "series cache miss");
                inner.series(req).await.map(Arc::new)
            })
            .await
            .map_err(|e| (*e).clone())?;
        Ok((*hit).clone().renamed(req.column_name()))
    }
}

#[async_trait]
impl DatasetProvider for CachingConnector {
    async fn dataset(&self, id: DatasetId) -> Result<Frame, MandateError> {
        let Some(store) = &self.datasets else {
            return self.inner_dataset()?.dataset(id).await;
        };
        let inner = self.inner_dataset()?;
        let hit = store
            .try_get_with(id, async {
                #[cfg(feature = "tracing")]
                tracing::debug!(dataset = %id, "dataset cache miss");
                inner.dataset(id).await.map(Arc::new)
            })
            .await
            .map_err(|e| (*e).clone())?;
        Ok((*hit).clone())
    }

    fn supported_datasets(&self) -> &'static [DatasetId] {
        match self.inner.as_dataset_provider() {
            Some(p) => p.supported_datasets(),
            None => &[],
        }
    }
}
