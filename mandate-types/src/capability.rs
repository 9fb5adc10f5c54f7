use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, caching, and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    /// A single date-indexed series keyed by an upstream code.
    Series,
    /// A multi-column dataset published as a whole (e.g. the SF Fed PCE split).
    Dataset,
    /// Several series fetched together and joined on date.
    Panel,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Series => "series",
            Self::Dataset => "dataset",
            Self::Panel => "panel",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
