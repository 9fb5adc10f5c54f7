//! mandate-middleware
//!
//! Connector wrappers and the builder that layers them around a raw connector.

mod builder;
mod cache;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheMiddleware, CachingConnector};
