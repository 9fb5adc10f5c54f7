//! Middleware trait for wrapping `MandateConnector` implementations.

use std::sync::Arc;

use crate::connector::MandateConnector;

/// Trait implemented by connector middleware layers.
///
/// A middleware consumes an inner `MandateConnector` and returns a wrapped connector
/// that augments its behavior (e.g., memoization).
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner connector and return the wrapped connector.
    fn apply(self: Box<Self>, inner: Arc<dyn MandateConnector>) -> Arc<dyn MandateConnector>;

    /// Layer name; the builder keeps at most one layer per name.
    fn name(&self) -> &'static str;
}
