use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use mandate_core::connector::{DatasetProvider, MandateConnector, SeriesProvider};
use mandate_core::{
    Capability, DatasetId, Frame, MandateError, SeriesRequest, TimeSeries,
};
use mandate_middleware::ConnectorBuilder;
use mandate_mock::MockConnector;
use mandate_types::CacheConfig;

struct Counting {
    inner: MockConnector,
    series: Arc<AtomicUsize>,
    datasets: Arc<AtomicUsize>,
}

impl Counting {
    fn new() -> (Arc<Self>, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let series = Arc::new(AtomicUsize::new(0));
        let datasets = Arc::new(AtomicUsize::new(0));
        let me = Arc::new(Self {
            inner: MockConnector::new(),
            series: Arc::clone(&series),
            datasets: Arc::clone(&datasets),
        });
        (me, series, datasets)
    }
}

impl MandateConnector for Counting {
    fn name(&self) -> &'static str {
        "counting"
    }
    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }
    fn as_dataset_provider(&self) -> Option<&dyn DatasetProvider> {
        Some(self as &dyn DatasetProvider)
    }
}

#[async_trait]
impl SeriesProvider for Counting {
    async fn series(&self, req: &SeriesRequest) -> Result<TimeSeries, MandateError> {
        self.series.fetch_add(1, Ordering::SeqCst);
        self.inner.as_series_provider().unwrap().series(req).await
    }
}

#[async_trait]
impl DatasetProvider for Counting {
    async fn dataset(&self, id: DatasetId) -> Result<Frame, MandateError> {
        self.datasets.fetch_add(1, Ordering::SeqCst);
        self.inner.as_dataset_provider().unwrap().dataset(id).await
    }
    fn supported_datasets(&self) -> &'static [DatasetId] {
        self.inner.as_dataset_provider().unwrap().supported_datasets()
    }
}

fn req(code: &str) -> SeriesRequest {
    SeriesRequest::new(code).unwrap()
}

#[tokio::test]
async fn code_case_does_not_split_cache_entries() {
    let (raw, calls, _) = Counting::new();
    let c = ConnectorBuilder::new(raw)
        .with_cache(&CacheConfig::default())
        .build();
    let sp = c.as_series_provider().unwrap();
    sp.series(&req("payems")).await.unwrap();
    sp.series(&req("PAYEMS")).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn repeated_series_served_from_cache() {
    let (raw, calls, _) = Counting::new();
    let c = ConnectorBuilder::new(raw)
        .with_cache(&CacheConfig::default())
        .build();
    let sp = c.as_series_provider().unwrap();
    let a = sp.series(&req("PAYEMS")).await.unwrap();
    let b = sp.series(&req("PAYEMS")).await.unwrap();
    assert_eq!(a, b);
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    sp.series(&req("UNRATE")).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn rename_shares_entry_but_returns_requested_name() {
    let (raw, calls, _) = Counting::new();
    let c = ConnectorBuilder::new(raw)
        .with_cache(&CacheConfig::default())
        .build();
    let sp = c.as_series_provider().unwrap();
    let plain = sp.series(&req("CPIAUCSL")).await.unwrap();
    let named = sp
        .series(&req("CPIAUCSL").with_name("Headline"))
        .await
        .unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(plain.name(), "CPIAUCSL");
    assert_eq!(named.name(), "Headline");
    assert_eq!(plain.values(), named.values());
}

#[tokio::test]
async fn different_bounds_are_distinct_entries() {
    let (raw, calls, _) = Counting::new();
    let c = ConnectorBuilder::new(raw)
        .with_cache(&CacheConfig::default())
        .build();
    let sp = c.as_series_provider().unwrap();
    let start = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    sp.series(&req("PAYEMS")).await.unwrap();
    sp.series(&req("PAYEMS").with_start(start)).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn errors_are_not_cached() {
    let (raw, calls, _) = Counting::new();
    let c = ConnectorBuilder::new(raw)
        .with_cache(&CacheConfig::default())
        .build();
    let sp = c.as_series_provider().unwrap();
    assert!(sp.series(&req("FAIL")).await.is_err());
    assert!(sp.series(&req("FAIL")).await.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn ttl_expiration_causes_refetch() {
    let (raw, calls, _) = Counting::new();
    let c = ConnectorBuilder::new(raw)
        .with_cache(&CacheConfig::with_ttl(Duration::from_millis(50)))
        .build();
    let sp = c.as_series_provider().unwrap();
    sp.series(&req("UNRATE")).await.unwrap();
    sp.series(&req("UNRATE")).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    tokio::time::sleep(Duration::from_millis(120)).await;
    sp.series(&req("UNRATE")).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn zero_ttl_disables_one_capability() {
    let (raw, series_calls, dataset_calls) = Counting::new();
    let mut cfg = CacheConfig::default();
    cfg.per_capability_ttl_ms.insert(Capability::Series, 0);
    let c = ConnectorBuilder::new(raw).with_cache(&cfg).build();

    let sp = c.as_series_provider().unwrap();
    sp.series(&req("UNRATE")).await.unwrap();
    sp.series(&req("UNRATE")).await.unwrap();
    assert_eq!(series_calls.load(Ordering::SeqCst), 2);

    let dp = c.as_dataset_provider().unwrap();
    dp.dataset(DatasetId::CyclicalAcyclicalYoy).await.unwrap();
    dp.dataset(DatasetId::CyclicalAcyclicalYoy).await.unwrap();
    assert_eq!(dataset_calls.load(Ordering::SeqCst), 1);
    assert_eq!(dp.supported_datasets().len(), 2);
}

#[tokio::test]
async fn concurrent_requests_share_one_fetch() {
    let (raw, calls, _) = Counting::new();
    let c = ConnectorBuilder::new(raw)
        .with_cache(&CacheConfig::default())
        .build();
    let sp = c.as_series_provider().unwrap();
    let r = req("PAYEMS");
    let (a, b) = tokio::join!(sp.series(&r), sp.series(&r));
    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn later_cache_config_replaces_earlier() {
    let (raw, calls, _) = Counting::new();
    let c = ConnectorBuilder::new(raw)
        .with_cache(&CacheConfig::default())
        .with_cache(&CacheConfig::with_ttl(Duration::ZERO))
        .build();
    let sp = c.as_series_provider().unwrap();
    sp.series(&req("UNRATE")).await.unwrap();
    sp.series(&req("UNRATE")).await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn wrapped_connector_keeps_identity_and_capabilities() {
    let c = ConnectorBuilder::new(Arc::new(MockConnector::new()))
        .with_cache(&CacheConfig::default())
        .build();
    assert_eq!(c.name(), "mandate-mock");
    assert_eq!(c.vendor(), "Mock");
    assert!(c.as_series_provider().is_some());
    assert!(c.as_dataset_provider().is_some());
}
