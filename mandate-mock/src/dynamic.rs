use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use mandate_core::connector::{DatasetProvider, MandateConnector, SeriesProvider};
use mandate_core::{DatasetId, Frame, MandateError, SeriesRequest, TimeSeries};

/// Instruction for how a method should behave for a given input.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(MandateError),
    /// Hang indefinitely (simulate a timeout).
    Hang,
}

#[derive(Default)]
struct InternalState {
    series_rules: HashMap<String, MockBehavior<TimeSeries>>,
    dataset_rules: HashMap<DatasetId, MockBehavior<Frame>>,
    series_calls: HashMap<String, usize>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `series` calls for a specific code.
    pub async fn set_series_behavior(&self, code: &str, behavior: MockBehavior<TimeSeries>) {
        let mut guard = self.state.lock().await;
        guard.series_rules.insert(code.to_string(), behavior);
    }

    /// Set the behavior for `dataset` calls for a specific dataset.
    pub async fn set_dataset_behavior(&self, id: DatasetId, behavior: MockBehavior<Frame>) {
        let mut guard = self.state.lock().await;
        guard.dataset_rules.insert(id, behavior);
    }

    /// Number of `series` calls received for `code`, whatever their outcome.
    pub async fn series_calls(&self, code: &str) -> usize {
        let guard = self.state.lock().await;
        guard.series_calls.get(code).copied().unwrap_or_default()
    }

    /// Clear all configured behaviors and call counts.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.series_rules.clear();
        guard.dataset_rules.clear();
        guard.series_calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Codes and datasets without a rule answer `NotFound`.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn MandateConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn MandateConnector>, controller)
    }
}

impl MandateConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }

    fn as_dataset_provider(&self) -> Option<&dyn DatasetProvider> {
        Some(self as &dyn DatasetProvider)
    }
}

#[async_trait]
impl SeriesProvider for DynamicMockConnector {
    async fn series(&self, req: &SeriesRequest) -> Result<TimeSeries, MandateError> {
        let code = req.code().as_str();
        // Snapshot the rule without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            *guard.series_calls.entry(code.to_string()).or_default() += 1;
            guard.series_rules.get(code).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(s)) => Ok(s
                .between(req.start(), req.end())
                .renamed(req.column_name())),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(MandateError::not_found(format!("series {code}"))),
        }
    }
}

#[async_trait]
impl DatasetProvider for DynamicMockConnector {
    async fn dataset(&self, id: DatasetId) -> Result<Frame, MandateError> {
        let behavior = {
            let guard = self.state.lock().await;
            guard.dataset_rules.get(&id).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(f)) => Ok(f),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(MandateError::not_found(format!("dataset {id}"))),
        }
    }

    fn supported_datasets(&self) -> &'static [DatasetId] {
        &[
            DatasetId::CyclicalAcyclicalYoy,
            DatasetId::CyclicalAcyclicalMom,
        ]
    }
}
