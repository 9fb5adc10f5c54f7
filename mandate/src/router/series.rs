use std::sync::Arc;

use mandate_core::{Capability, MandateError, SeriesRequest, TimeSeries};

use crate::Mandate;

impl Mandate {
    /// Fetch one series across providers.
    ///
    /// Open bounds resolve to the configured default start and to
    /// [`today`](Mandate::today). The result is trimmed to the resolved bounds
    /// and named after the request's column name.
    ///
    /// # Errors
    /// `InvalidArg` for inverted bounds, `NotFound` when no provider knows the
    /// code, otherwise the collapsed provider failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "mandate::router",
            skip(self, req),
            fields(code = %req.code()),
        )
    )]
    pub async fn series(&self, req: &SeriesRequest) -> Result<TimeSeries, MandateError> {
        let resolved = Arc::new(req.resolved(self.cfg.default_start, self.today())?);
        let code = resolved.code().as_str().to_string();
        let r = Arc::clone(&resolved);

        let out = self
            .fetch_single(
                Some(&code),
                Capability::Series,
                format!("series {code}"),
                move |c| {
                    c.as_series_provider()?;
                    let c2 = Arc::clone(&c);
                    let r2 = Arc::clone(&r);
                    Some(async move {
                        match c2.as_series_provider() {
                            Some(p) => p.series(&r2).await,
                            None => Err(MandateError::connector(
                                c2.name(),
                                "missing series capability during call",
                            )),
                        }
                    })
                },
            )
            .await?;

        Ok(out
            .between(resolved.start(), resolved.end())
            .renamed(resolved.column_name()))
    }
}
