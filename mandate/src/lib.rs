//! Mandate orchestrates economic time-series requests across data providers.
//!
//! Overview
//! - Routes series and dataset requests to connectors implementing the
//!   `mandate_core` role traits.
//! - Applies per-code provider priorities, per-provider timeouts and an
//!   optional overall deadline for fan-out requests.
//! - Assembles multi-series panels joined on date, the shape every dashboard
//!   chart consumes.
//!
//! Key behaviors
//! - Fetch strategy:
//!   - `PriorityWithFallback`: deterministic order, one provider at a time,
//!     errors aggregated when every provider fails.
//!   - `Latency`: races eligible providers and keeps the first success.
//! - Open request bounds resolve to the configured default start and to
//!   "today", which can be pinned for reproducible output.
//! - Panels keep only dates where every member series has a value.
//!
//! Building an orchestrator over cached FRED and SF Fed connectors:
//! ```rust,ignore
//! use std::sync::Arc;
//! use mandate::{CacheConfig, ConnectorBuilder, Mandate};
//! use mandate_fred::{FredConnector, FrbsfConnector};
//!
//! let cache = CacheConfig::default();
//! let fred = ConnectorBuilder::new(Arc::new(FredConnector::new_default()))
//!     .with_cache(&cache)
//!     .build();
//! let frbsf = ConnectorBuilder::new(Arc::new(FrbsfConnector::new_default()))
//!     .with_cache(&cache)
//!     .build();
//!
//! let mandate = Mandate::builder()
//!     .with_connector(fred)
//!     .with_connector(frbsf)
//!     .build()?;
//!
//! let payrolls = mandate
//!     .series(&SeriesRequest::new("PAYEMS")?.with_name("Payrolls"))
//!     .await?;
//! let wages = mandate
//!     .panel(&[("Average Hourly Earnings", "CES0500000003"), ("ECI Wages", "ECIWAG")], None, None)
//!     .await?;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use crate::core::{Mandate, MandateBuilder, tag_err};
pub use router::panel::RECESSION_CODE;
pub use router::util::{collapse_errors, join_with_deadline};

pub use mandate_middleware::{CacheMiddleware, ConnectorBuilder};

// Re-export core types for convenience
pub use mandate_core::{
    CacheConfig, Capability, ConnectorKey, DatasetId, DatasetProvider, FetchStrategy, Frame,
    MandateConfig, MandateConnector, MandateError, Point, SeriesCode, SeriesProvider,
    SeriesRequest, TimeSeries,
};
