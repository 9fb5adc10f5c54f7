//! Interactive single-series explorer.
//!
//! The page offers a fixed list of indicators, a date window and a moving
//! average. Requests are normalized here before anything is fetched: the
//! window is clamped to `[1980-01-01, today]` and the average must be one of
//! [`MA_CHOICES`].

use chrono::NaiveDate;
use mandate::{Mandate, MandateError, SeriesRequest, TimeSeries};
use mandate_core::{diff, rolling_mean, sum};
use serde::{Deserialize, Serialize};

use crate::chart::{Axis, Figure, Layout, Trace};

/// Moving-average windows the explorer accepts, in observations.
pub const MA_CHOICES: [usize; 3] = [1, 3, 5];

/// Height of the explorer figure.
const HEIGHT: u32 = 400;
const LINE_COLOR: &str = "#4C78A8";

/// Earliest date the explorer will show.
#[must_use]
pub fn floor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1980, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Indicators selectable in the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExplorerSeries {
    ContinuedClaims,
    JobOpenings,
    PayrollGrowth,
    LabourDemand,
    LabourSupply,
    InitialClaims,
    AverageHourlyEarnings,
}

impl ExplorerSeries {
    pub const ALL: [Self; 7] = [
        Self::ContinuedClaims,
        Self::JobOpenings,
        Self::PayrollGrowth,
        Self::LabourDemand,
        Self::LabourSupply,
        Self::InitialClaims,
        Self::AverageHourlyEarnings,
    ];

    /// Label shown in the picker.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ContinuedClaims => "Continued Claims",
            Self::JobOpenings => "Job Openings (Total NF)",
            Self::PayrollGrowth => "Nonfarm Payroll Growth",
            Self::LabourDemand => "Labour Demand (Openings + Employment)",
            Self::LabourSupply => "Labour Supply (Civilian Labour Force)",
            Self::InitialClaims => "Initial Jobless Claims (Seasonally Adjusted)",
            Self::AverageHourlyEarnings => "Average Hourly Earnings",
        }
    }

    /// Column name of the fetched series, used as the y-axis title.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::ContinuedClaims => "Continued Claims",
            Self::JobOpenings => "Job Openings",
            Self::PayrollGrowth => "Nonfarm Payroll Growth",
            Self::LabourDemand => "Labour Demand",
            Self::LabourSupply => "Labour Supply",
            Self::InitialClaims => "Initial Claims",
            Self::AverageHourlyEarnings => "Average Hourly Earnings",
        }
    }

    /// Fetch the series over `[start, end]`.
    async fn fetch(
        self,
        mandate: &Mandate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<TimeSeries, MandateError> {
        let req = |code: &str| -> Result<SeriesRequest, MandateError> {
            Ok(SeriesRequest::new(code)?
                .with_start(start)
                .with_end(end)
                .with_name(self.column()))
        };
        let s = match self {
            Self::ContinuedClaims => mandate.series(&req("CCSA")?).await?,
            Self::JobOpenings => mandate.series(&req("JTSJOL")?).await?,
            Self::PayrollGrowth => diff(&mandate.series(&req("PAYEMS")?).await?),
            Self::LabourDemand => {
                let (openings, employment) = (req("JTSJOL")?, req("PAYEMS")?);
                let (openings, employment) =
                    tokio::try_join!(mandate.series(&openings), mandate.series(&employment))?;
                sum(&openings, &employment, self.column())
            }
            Self::LabourSupply => mandate.series(&req("CLF16OV")?).await?,
            Self::InitialClaims => mandate.series(&req("ICSA")?).await?,
            Self::AverageHourlyEarnings => mandate.series(&req("CES0500000003")?).await?,
        };
        Ok(s)
    }
}

/// Raw query string of `/api/explorer`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplorerQuery {
    pub series: Option<ExplorerSeries>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub ma: Option<usize>,
}

/// A validated explorer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exploration {
    pub series: ExplorerSeries,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub ma: usize,
}

impl ExplorerQuery {
    /// Apply defaults and clamp to the allowed window.
    ///
    /// # Errors
    /// `InvalidArg` for a moving average outside [`MA_CHOICES`] or a window that
    /// is empty after clamping.
    pub fn resolve(&self, today: NaiveDate) -> Result<Exploration, MandateError> {
        let ma = self.ma.unwrap_or(1);
        if !MA_CHOICES.contains(&ma) {
            return Err(MandateError::InvalidArg(format!(
                "moving average must be one of {MA_CHOICES:?}, got {ma}"
            )));
        }
        let start = self.start.unwrap_or_else(floor_date).max(floor_date());
        let end = self.end.unwrap_or(today).min(today);
        if start > end {
            return Err(MandateError::InvalidArg(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Exploration {
            series: self.series.unwrap_or(ExplorerSeries::ContinuedClaims),
            start,
            end,
            ma,
        })
    }
}

/// What the page needs to build the explorer controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorerOptions {
    pub series: Vec<SeriesOption>,
    pub ma: [usize; 3],
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesOption {
    pub id: ExplorerSeries,
    pub label: &'static str,
}

#[must_use]
pub fn options(today: NaiveDate) -> ExplorerOptions {
    ExplorerOptions {
        series: ExplorerSeries::ALL
            .into_iter()
            .map(|id| SeriesOption {
                id,
                label: id.label(),
            })
            .collect(),
        ma: MA_CHOICES,
        min_date: floor_date(),
        max_date: today,
    }
}

/// Fetch, smooth and plot one explorer request.
///
/// # Errors
/// Propagates fetch failures.
#[tracing::instrument(target = "mandate::dashboard", skip(mandate))]
pub async fn explore(mandate: &Mandate, req: Exploration) -> Result<Figure, MandateError> {
    let raw = req.series.fetch(mandate, req.start, req.end).await?;
    Ok(figure(&smooth(&raw, req.ma)))
}

fn smooth(s: &TimeSeries, ma: usize) -> TimeSeries {
    if ma > 1 {
        rolling_mean(s, ma).dropna()
    } else {
        s.dropna()
    }
}

fn figure(s: &TimeSeries) -> Figure {
    let layout = Layout {
        height: HEIGHT,
        showlegend: Some(false),
        ..Layout::default()
    }
    .xaxis(Axis {
        tickangle: Some(-45),
        ..Axis::default().date().ticks("%b %Y", None)
    })
    .yaxis(Axis::default().title(s.name()));
    Figure::new(layout).trace(Trace::line(s.name(), s, LINE_COLOR).width(2.0))
}
