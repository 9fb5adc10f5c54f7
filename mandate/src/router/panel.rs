use std::collections::HashSet;

use chrono::NaiveDate;
use mandate_core::{Capability, Frame, MandateError, SeriesRequest, TimeSeries, complete_rows};

use crate::Mandate;
use crate::router::util::join_with_deadline;

/// NBER recession indicator code; also the column name it gets in panels.
pub const RECESSION_CODE: &str = "USREC";

impl Mandate {
    /// Fetch several series concurrently and join them on date.
    ///
    /// `members` pairs a column label with an upstream code. Rows where any
    /// column is missing are dropped, so the index is the intersection of the
    /// members' observed dates. The whole fan-out is bounded by the configured
    /// request timeout.
    ///
    /// # Errors
    /// `InvalidArg` for an empty member list, blank or duplicate labels, or
    /// inverted bounds. `RequestTimeout { capability: "panel" }` when the
    /// deadline elapses. Any member failure fails the panel.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "mandate::router",
            skip(self, members),
            fields(members = members.len()),
        )
    )]
    pub async fn panel(
        &self,
        members: &[(&str, &str)],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Frame, MandateError> {
        let reqs = panel_requests(members, start, end)?;
        let results = join_with_deadline(
            reqs.iter().map(|r| self.series(r)),
            self.cfg.request_timeout,
        )
        .await
        .map_err(|e| match e {
            MandateError::RequestTimeout { .. } => {
                MandateError::request_timeout(Capability::Panel.as_str())
            }
            other => other,
        })?;

        let series = results.into_iter().collect::<Result<Vec<TimeSeries>, _>>()?;
        let refs: Vec<&TimeSeries> = series.iter().collect();
        Ok(complete_rows(&refs))
    }

    /// [`panel`](Self::panel) with the recession indicator joined in as a
    /// trailing `USREC` column.
    ///
    /// # Errors
    /// As for [`panel`](Self::panel); a member labelled `USREC` is a duplicate.
    pub async fn panel_with_recession(
        &self,
        members: &[(&str, &str)],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Frame, MandateError> {
        let mut all = members.to_vec();
        all.push((RECESSION_CODE, RECESSION_CODE));
        self.panel(&all, start, end).await
    }
}

fn panel_requests(
    members: &[(&str, &str)],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<SeriesRequest>, MandateError> {
    if members.is_empty() {
        return Err(MandateError::InvalidArg("panel needs at least one series".into()));
    }
    let mut seen = HashSet::new();
    members
        .iter()
        .map(|(label, code)| {
            let label = label.trim();
            if label.is_empty() {
                return Err(MandateError::InvalidArg(format!(
                    "blank column label for {code}"
                )));
            }
            if !seen.insert(label) {
                return Err(MandateError::InvalidArg(format!(
                    "duplicate column label '{label}'"
                )));
            }
            let mut req = SeriesRequest::new(code)?.with_name(label);
            if let Some(s) = start {
                req = req.with_start(s);
            }
            if let Some(e) = end {
                req = req.with_end(e);
            }
            Ok(req)
        })
        .collect()
}
