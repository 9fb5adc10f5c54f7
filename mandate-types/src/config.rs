//! Configuration types shared across orchestrators, middleware, and connectors.

use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Capability;

/// Historical floor used when a request does not carry a start date.
#[must_use]
pub fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Strategy for selecting among eligible data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FetchStrategy {
    /// Use priority order and fall back to the next provider on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible providers concurrently and return the first success.
    Latency,
}

/// Global configuration for the `Mandate` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MandateConfig {
    /// Strategy for fetching from multiple providers.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional overall request timeout for fan-out aggregations (panels).
    pub request_timeout: Option<Duration>,
    /// Start date applied when a series request leaves it open.
    pub default_start: NaiveDate,
    /// Per-code provider ordering hints, keyed by upstream series code.
    ///
    /// Values are connector names; unlisted connectors keep registration order
    /// after the listed ones.
    pub per_code_priority: HashMap<String, Vec<String>>,
}

impl Default for MandateConfig {
    fn default() -> Self {
        Self {
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(30),
            request_timeout: None,
            default_start: default_start(),
            per_code_priority: HashMap::new(),
        }
    }
}

/// Configuration for the caching middleware.
///
/// A TTL of zero disables caching for the affected capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Time-to-live applied when no per-capability override exists.
    pub default_ttl_ms: u64,
    /// Maximum number of entries per capability store when not overridden.
    pub default_max_entries: u64,
    /// Per-capability TTL overrides in milliseconds.
    pub per_capability_ttl_ms: HashMap<Capability, u64>,
    /// Per-capability capacity overrides.
    pub per_capability_max_entries: HashMap<Capability, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: 60 * 60 * 1000,
            default_max_entries: 512,
            per_capability_ttl_ms: HashMap::new(),
            per_capability_max_entries: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// Build a config with a single TTL for every capability.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            default_ttl_ms: u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX),
            ..Self::default()
        }
    }

    /// Effective TTL for a capability, or `None` when caching is disabled for it.
    #[must_use]
    pub fn ttl_for(&self, cap: Capability) -> Option<Duration> {
        let ms = self
            .per_capability_ttl_ms
            .get(&cap)
            .copied()
            .unwrap_or(self.default_ttl_ms);
        (ms > 0).then(|| Duration::from_millis(ms))
    }

    /// Effective capacity for a capability (at least one entry).
    #[must_use]
    pub fn capacity_for(&self, cap: Capability) -> u64 {
        self.per_capability_max_entries
            .get(&cap)
            .copied()
            .unwrap_or(self.default_max_entries)
            .max(1)
    }
}
