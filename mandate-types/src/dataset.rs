use core::fmt;
use serde::{Deserialize, Serialize};

/// Multi-column datasets published as whole files rather than per-code series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetId {
    /// SF Fed cyclical vs acyclical core PCE inflation, year over year.
    CyclicalAcyclicalYoy,
    /// SF Fed cyclical vs acyclical core PCE inflation, month over month annualized.
    CyclicalAcyclicalMom,
}

impl DatasetId {
    /// Stable identifier for logs, errors, and cache keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CyclicalAcyclicalYoy => "cyclical-acyclical-yoy",
            Self::CyclicalAcyclicalMom => "cyclical-acyclical-mom",
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
