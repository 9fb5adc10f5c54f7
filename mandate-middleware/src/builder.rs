//! Builder that wraps a raw connector in middleware layers.
//!
//! Layers are stored outermost first and applied in reverse during
//! [`build`](ConnectorBuilder::build), so the cache always ends up as the
//! outermost wrapper:
//!
//! ```text
//! Orchestrator request
//!     ↓
//! Cache (answers repeats without touching upstream)
//!     ↓
//! Raw connector (downloads the CSV)
//! ```

use std::sync::Arc;

use mandate_core::Middleware;
use mandate_core::connector::MandateConnector;
use mandate_types::CacheConfig;

use crate::cache::CacheMiddleware;

const CACHE_LAYER: &str = "CachingMiddleware";

/// Composes a connector with its middleware layers.
pub struct ConnectorBuilder {
    raw: Arc<dyn MandateConnector>,
    /// Outermost first.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    #[must_use]
    pub fn new(raw: Arc<dyn MandateConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add the caching layer at the outermost position, replacing any existing one.
    #[must_use]
    pub fn with_cache(mut self, cfg: &CacheConfig) -> Self {
        self.layers.retain(|m| m.name() != CACHE_LAYER);
        self.layers
            .insert(0, Box::new(CacheMiddleware::new(cfg.clone())));
        self
    }

    /// Build the wrapped connector, applying layers innermost first.
    #[must_use]
    pub fn build(self) -> Arc<dyn MandateConnector> {
        let mut acc: Arc<dyn MandateConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
