//! Section rendering.
//!
//! Each section fetches what it needs through the [`Mandate`] orchestrator,
//! derives its metrics and returns rows of finished figures. Nothing here
//! touches HTTP; the server serializes the result as-is.

use chrono::NaiveDate;
use mandate::{Frame, Mandate, MandateError, RECESSION_CODE, SeriesRequest, TimeSeries};
use mandate_core::{Period, annualized, complete_rows, recession_runs, yoy};
use serde::Serialize;

use crate::chart::{Figure, Trace};
use crate::layout::SectionId;

pub mod alternatives;
pub mod cpi;
pub mod employment;
pub mod nfp;
pub mod overview;
pub mod pce;
pub mod wages;

/// One titled figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub header: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheader: Option<String>,
    pub figure: Figure,
}

impl Chart {
    #[must_use]
    pub fn new(header: impl Into<String>, figure: Figure) -> Self {
        Self {
            header: header.into(),
            subheader: None,
            figure,
        }
    }

    #[must_use]
    pub fn with_subheader(mut self, subheader: impl Into<String>) -> Self {
        self.subheader = Some(subheader.into());
        self
    }
}

/// A rendered section: rows of charts laid out side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: String,
    pub title: &'static str,
    pub rows: Vec<Vec<Chart>>,
}

/// Fetch, derive and lay out one section.
///
/// # Errors
/// Propagates the first fetch failure; a section is never half-rendered.
#[tracing::instrument(target = "mandate::dashboard", skip(mandate), fields(section = %id.path()))]
pub async fn render(mandate: &Mandate, id: SectionId) -> Result<Section, MandateError> {
    let rows = match id {
        SectionId::General => employment::render(mandate).await?,
        SectionId::Nfp => nfp::render(mandate).await?,
        SectionId::Wages => wages::render(mandate).await?,
        SectionId::Alternatives => alternatives::render(mandate).await?,
        SectionId::InflationOverview => overview::render(mandate).await?,
        SectionId::Cpi => cpi::render(mandate).await?,
        SectionId::Pce => pce::render(mandate).await?,
    };
    Ok(Section {
        id: id.path(),
        title: id.title(),
        rows,
    })
}

pub(crate) fn request(code: &str) -> Result<SeriesRequest, MandateError> {
    SeriesRequest::new(code)
}

/// Contiguous recession runs of the panel's recession column.
pub(crate) fn recessions(frame: &Frame) -> Result<Vec<Period>, MandateError> {
    Ok(recession_runs(&frame.series(RECESSION_CODE)?))
}

pub(crate) fn last_date(frame: &Frame) -> Result<NaiveDate, MandateError> {
    frame
        .last_date()
        .ok_or_else(|| MandateError::Data("no complete rows to plot".into()))
}

/// Line traces for `(column, colour)` pairs, named after the column.
pub(crate) fn lines(frame: &Frame, columns: &[(&str, &str)]) -> Result<Vec<Trace>, MandateError> {
    columns
        .iter()
        .map(|(col, color)| Ok(Trace::line(*col, &frame.series(col)?, color)))
        .collect()
}

/// Bar traces for `(column, colour)` pairs, named after the column.
pub(crate) fn bars(frame: &Frame, columns: &[(&str, &str)]) -> Result<Vec<Trace>, MandateError> {
    columns
        .iter()
        .map(|(col, color)| Ok(Trace::bar(*col, &frame.series(col)?, color)))
        .collect()
}

pub(crate) fn with_traces(mut fig: Figure, traces: Vec<Trace>) -> Figure {
    fig.data.extend(traces);
    fig
}

/// Price-index panel with year-over-year and three-month annualized columns.
///
/// Column `X` of `members` yields `X YoY` and `X 3M`, plus the recession
/// indicator. Only dates where every derived column is present survive.
pub(crate) async fn inflation_panel(
    mandate: &Mandate,
    members: &[(&str, &str)],
) -> Result<Frame, MandateError> {
    let usrec = request(RECESSION_CODE)?;
    let (levels, usrec) =
        tokio::try_join!(mandate.panel(members, None, None), mandate.series(&usrec))?;
    let mut cols: Vec<TimeSeries> = levels.map_columns(yoy).suffixed(" YoY").all_series();
    cols.extend(
        levels
            .map_columns(|s| annualized(s, 3))
            .suffixed(" 3M")
            .all_series(),
    );
    cols.push(usrec);
    let refs: Vec<&TimeSeries> = cols.iter().collect();
    Ok(complete_rows(&refs))
}
