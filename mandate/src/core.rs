use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use mandate_core::{Capability, FetchStrategy, MandateConfig, MandateConnector, MandateError};

use crate::router::util::collapse_errors;

/// Orchestrator that routes series and dataset requests across registered providers.
pub struct Mandate {
    pub(crate) connectors: Vec<Arc<dyn MandateConnector>>,
    pub(crate) cfg: MandateConfig,
    pub(crate) today: Option<NaiveDate>,
}

/// Builder for constructing a `Mandate` orchestrator with custom configuration.
pub struct MandateBuilder {
    connectors: Vec<Arc<dyn MandateConnector>>,
    cfg: MandateConfig,
    today: Option<NaiveDate>,
}

impl Default for MandateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MandateBuilder {
    /// Create a new builder with defaults.
    ///
    /// Defaults: no connectors, priority-with-fallback fetches, a 30 s provider
    /// timeout, no overall request deadline, open requests starting 1950-01-01
    /// and ending on the local calendar date.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: MandateConfig::default(),
            today: None,
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is the provider order unless a code has an explicit
    /// preference via [`prefer_code`](Self::prefer_code).
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn MandateConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set preferred providers for one series code.
    ///
    /// The list is an ordering hint; unlisted but capable connectors are still
    /// tried after the listed ones.
    #[must_use]
    pub fn prefer_code(mut self, code: &str, connectors_desc: &[Arc<dyn MandateConnector>]) -> Self {
        let names = connectors_desc
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        self.cfg.per_code_priority.insert(code.to_string(), names);
        self
    }

    /// Select the fetch strategy for multi-provider requests.
    ///
    /// - `PriorityWithFallback`: deterministic order, one provider at a time.
    /// - `Latency`: race all eligible providers and keep the first success.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for fan-out requests such as panels.
    ///
    /// When exceeded, the request fails with `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Start date applied to requests that leave it open.
    #[must_use]
    pub const fn default_start(mut self, start: NaiveDate) -> Self {
        self.cfg.default_start = start;
        self
    }

    /// Pin "today" instead of reading the local clock. Used for reproducible runs.
    #[must_use]
    pub const fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: MandateConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Mandate` orchestrator.
    ///
    /// Priority entries naming unregistered connectors are dropped, and
    /// duplicates are removed.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered.
    pub fn build(mut self) -> Result<Mandate, MandateError> {
        let known: std::collections::HashSet<&'static str> =
            self.connectors.iter().map(|c| c.name()).collect();

        for v in self.cfg.per_code_priority.values_mut() {
            let mut seen = std::collections::HashSet::new();
            v.retain(|n| known.contains(n.as_str()) && seen.insert(n.clone()));
        }

        if self.connectors.is_empty() {
            return Err(MandateError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Mandate {
            connectors: self.connectors,
            cfg: self.cfg,
            today: self.today,
        })
    }
}

/// Attribute an untagged error to the connector that produced it.
pub fn tag_err(connector: &str, e: MandateError) -> MandateError {
    match e {
        e @ (MandateError::NotFound { .. }
        | MandateError::ProviderTimeout { .. }
        | MandateError::Connector { .. }
        | MandateError::RequestTimeout { .. }
        | MandateError::AllProvidersTimedOut { .. }
        | MandateError::AllProvidersFailed(_)
        | MandateError::InvalidArg(_)) => e,
        other => MandateError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Bound `fut` by an optional overall deadline.
///
/// On expiry returns `RequestTimeout { capability: "request" }`; call sites
/// remap the label to their capability.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    fut: Fut,
) -> Result<T, MandateError>
where
    Fut: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => tokio::time::timeout(d, fut)
            .await
            .map_err(|_| MandateError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Mandate {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mandate::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability.as_str(),
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, MandateError>
    where
        Fut: core::future::Future<Output = Result<T, MandateError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(MandateError::provider_timeout(
                connector_name,
                capability.as_str(),
            ))
        })
    }

    /// Start building a new `Mandate` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use mandate::{CacheConfig, ConnectorBuilder, Mandate};
    /// use mandate_fred::{FredConnector, FrbsfConnector};
    ///
    /// let fred = ConnectorBuilder::new(Arc::new(FredConnector::new_default()))
    ///     .with_cache(&CacheConfig::default())
    ///     .build();
    /// let sf = Arc::new(FrbsfConnector::new_default());
    ///
    /// let mandate = Mandate::builder()
    ///     .with_connector(fred)
    ///     .with_connector(sf)
    ///     .provider_timeout(std::time::Duration::from_secs(20))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> MandateBuilder {
        MandateBuilder::new()
    }

    /// Effective configuration after build-time validation.
    #[must_use]
    pub const fn config(&self) -> &MandateConfig {
        &self.cfg
    }

    /// Reference date for open-ended requests: the pinned date or the local calendar date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Connectors in the order they should be tried for `code`.
    pub(crate) fn ordered(&self, code: Option<&str>) -> Vec<Arc<dyn MandateConnector>> {
        let out: Vec<(usize, Arc<dyn MandateConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();

        let Some(pref) = code.and_then(|c| self.cfg.per_code_priority.get(c)) else {
            return out.into_iter().map(|(_, c)| c).collect();
        };
        let pos: HashMap<&str, usize> = pref
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        let mut out = out;
        out.sort_by_key(|(orig_i, c)| (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i));
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Generic single-item fetch across providers.
    ///
    /// - Honors `FetchStrategy::{PriorityWithFallback, Latency}`
    /// - Applies the per-provider timeout in both modes
    /// - `call` returns `None` for connectors lacking the capability
    /// - Outcomes collapse through [`collapse_errors`]: all not-found becomes
    ///   `NotFound { what }`, all timeouts `AllProvidersTimedOut`
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "mandate::core::fetch_single",
            skip(self, call),
            fields(key = ?key, capability = %capability, what = %not_found_what),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        key: Option<&str>,
        capability: Capability,
        not_found_what: String,
        call: F,
    ) -> Result<T, MandateError>
    where
        T: Send,
        F: Fn(Arc<dyn MandateConnector>) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, MandateError>> + Send,
    {
        match self.cfg.fetch_strategy {
            FetchStrategy::PriorityWithFallback => {
                self.fetch_single_priority_with_fallback(key, capability, not_found_what, call)
                    .await
            }
            FetchStrategy::Latency => {
                self.fetch_single_latency(key, capability, not_found_what, call)
                    .await
            }
        }
    }

    async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        key: Option<&str>,
        capability: Capability,
        not_found_what: String,
        call: F,
    ) -> Result<T, MandateError>
    where
        T: Send,
        F: Fn(Arc<dyn MandateConnector>) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, MandateError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<MandateError> = Vec::new();

        for c in self.ordered(key) {
            if let Some(fut) = call(Arc::clone(&c)) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ (MandateError::NotFound { .. } | MandateError::ProviderTimeout { .. })) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(connector = c.name(), error = %e, "provider miss, trying next");
                        errors.push(e);
                    }
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(connector = c.name(), error = %e, "provider failed, trying next");
                        errors.push(tag_err(c.name(), e));
                    }
                }
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(not_found_what),
        ))
    }

    async fn fetch_single_latency<T, F, Fut>(
        &self,
        key: Option<&str>,
        capability: Capability,
        not_found_what: String,
        call: F,
    ) -> Result<T, MandateError>
    where
        T: Send,
        F: Fn(Arc<dyn MandateConnector>) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, MandateError>> + Send,
    {
        use futures::stream::{FuturesUnordered, StreamExt};

        let mut futs = FuturesUnordered::new();
        let mut attempted_any = false;
        for c in self.ordered(key) {
            if let Some(fut) = call(Arc::clone(&c)) {
                let name = c.name();
                let timeout = self.cfg.provider_timeout;
                futs.push(async move {
                    (
                        name,
                        Self::provider_call_with_timeout(name, capability, timeout, fut).await,
                    )
                });
                attempted_any = true;
            }
        }

        let mut errors: Vec<MandateError> = Vec::new();
        while let Some((name, res)) = futs.next().await {
            match res {
                Ok(v) => return Ok(v),
                Err(e @ (MandateError::ProviderTimeout { .. } | MandateError::NotFound { .. })) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        Err(collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(not_found_what),
        ))
    }
}
