//! Command-line and environment configuration.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use clap::Parser;
use mandate::{CacheConfig, ConnectorBuilder, Mandate, MandateConnector, MandateError};
use mandate_fred::{FrbsfConnector, FredConnector};
use mandate_mock::MockConnector;

#[derive(Parser, Debug, Clone)]
#[command(name = "mandate-dashboard")]
#[command(about = "The Dual Mandate Monitor: US employment and inflation indicators")]
#[command(version)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "MANDATE_BIND", default_value = "127.0.0.1:8501")]
    pub bind: String,

    /// How long fetched data stays cached, in seconds (0 disables the cache)
    #[arg(long, env = "MANDATE_CACHE_TTL_SECS", default_value_t = 3600)]
    pub cache_ttl_secs: u64,

    /// Per-provider call timeout, in seconds
    #[arg(long, env = "MANDATE_PROVIDER_TIMEOUT_SECS", default_value_t = 30)]
    pub provider_timeout_secs: u64,

    /// Deadline for a whole panel fetch, in seconds
    #[arg(long, env = "MANDATE_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Override the FRED graph CSV host
    #[arg(long, env = "MANDATE_FRED_BASE_URL")]
    pub fred_base_url: Option<String>,

    /// Override the FRBSF host
    #[arg(long, env = "MANDATE_FRBSF_BASE_URL")]
    pub frbsf_base_url: Option<String>,

    /// Serve synthetic fixtures instead of calling upstream
    #[arg(long, env = "MANDATE_USE_MOCK")]
    pub mock: bool,

    /// Pin "today" (YYYY-MM-DD) for reproducible windows
    #[arg(long, env = "MANDATE_TODAY")]
    pub today: Option<NaiveDate>,
}

impl Args {
    #[must_use]
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig::with_ttl(Duration::from_secs(self.cache_ttl_secs))
    }

    /// Wire the connectors, each behind the cache, into an orchestrator.
    ///
    /// # Errors
    /// `InvalidArg` for an unparseable base URL.
    pub fn build_mandate(&self) -> Result<Mandate, MandateError> {
        let cache = self.cache_config();
        let cached = |raw: Arc<dyn MandateConnector>| {
            ConnectorBuilder::new(raw).with_cache(&cache).build()
        };

        let mut builder =
            Mandate::builder().provider_timeout(Duration::from_secs(self.provider_timeout_secs));
        if let Some(secs) = self.request_timeout_secs {
            builder = builder.request_timeout(Duration::from_secs(secs));
        }
        if let Some(today) = self.today {
            builder = builder.today(today);
        }

        if self.mock {
            tracing::warn!(target: "mandate::dashboard", "serving mock fixtures");
            builder = builder.with_connector(cached(Arc::new(MockConnector::new())));
        } else {
            let mut fred = FredConnector::new_default();
            if let Some(url) = &self.fred_base_url {
                fred = fred.with_base_url(url)?;
            }
            let mut frbsf = FrbsfConnector::new_default();
            if let Some(url) = &self.frbsf_base_url {
                frbsf = frbsf.with_base_url(url)?;
            }
            builder = builder
                .with_connector(cached(Arc::new(fred)))
                .with_connector(cached(Arc::new(frbsf)));
        }
        builder.build()
    }
}
