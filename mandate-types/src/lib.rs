//! Mandate-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod dataset;
mod error;
mod frame;
mod series;

pub use capability::Capability;
pub use config::{CacheConfig, FetchStrategy, MandateConfig, default_start};
pub use connector::ConnectorKey;
pub use dataset::DatasetId;
pub use error::MandateError;
pub use frame::{Column, Frame};
pub use series::{Point, SeriesCode, SeriesRequest, TimeSeries};
