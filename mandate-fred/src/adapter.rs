#[cfg(feature = "test-adapters")]
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mandate_core::MandateError;

const USER_AGENT: &str = concat!("mandate-fred/", env!("CARGO_PKG_VERSION"));

/// Text download abstraction (so we can inject canned CSV bodies in tests).
#[async_trait]
pub trait CsvFetch: Send + Sync {
    /// GET `url` and return the response body.
    ///
    /// Implementations map a 404 to `NotFound` and any other failure to a
    /// `Connector` error.
    async fn get_text(&self, url: &str) -> Result<String, MandateError>;
}

/// Production fetcher backed by a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestFetch {
    http: reqwest::Client,
}

impl ReqwestFetch {
    /// Build a client with the crate user agent and a request timeout.
    ///
    /// Falls back to a default client if the configured one cannot be built.
    #[must_use]
    pub fn new_default() -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { http }
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

fn map_status(status: reqwest::StatusCode, url: &str) -> MandateError {
    if status == reqwest::StatusCode::NOT_FOUND {
        return MandateError::not_found(url.to_string());
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return MandateError::connector("http", format!("rate limit: {url}"));
    }
    if status.is_server_error() {
        return MandateError::connector(
            "http",
            format!("server error {}: {url}", status.as_u16()),
        );
    }
    MandateError::connector("http", format!("status {}: {url}", status.as_u16()))
}

fn map_transport(e: &reqwest::Error, url: &str) -> MandateError {
    if e.is_timeout() {
        MandateError::connector("http", format!("timed out: {url}"))
    } else {
        MandateError::connector("http", format!("{e}: {url}"))
    }
}

#[async_trait]
impl CsvFetch for ReqwestFetch {
    async fn get_text(&self, url: &str) -> Result<String, MandateError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| map_transport(&e, url))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(map_status(status, url));
        }
        resp.text().await.map_err(|e| map_transport(&e, url))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn CsvFetch {
    /// Test helper that builds a `CsvFetch` from a closure receiving the full URL.
    pub fn from_fn<F>(f: F) -> Arc<dyn CsvFetch>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<String, MandateError>,
    {
        struct FnFetch<F>(F);
        #[async_trait]
        impl<F> CsvFetch for FnFetch<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<String, MandateError>,
        {
            async fn get_text(&self, url: &str) -> Result<String, MandateError> {
                (self.0)(url.to_string())
            }
        }
        Arc::new(FnFetch(f))
    }
}
