//! Employment / General: payroll growth and the unemployment rate.

use chrono::NaiveDate;
use mandate::{Mandate, MandateError, RECESSION_CODE, TimeSeries};
use mandate_core::{diff, mean, padded_range, percentile_rank_latest, recession_periods, rolling_mean};

use super::{Chart, request};
use crate::chart::{Axis, Figure, Font, Layout, Legend, Margin, Trace};
use crate::style::{self, palette};

const GROWTH_WINDOW_START: (i32, u32) = (2023, 1);

pub(crate) async fn render(mandate: &Mandate) -> Result<Vec<Vec<Chart>>, MandateError> {
    let payems = request("PAYEMS")?;
    let unrate = request("UNRATE")?.with_name("Unemployment Rate");
    let usrec = request(RECESSION_CODE)?;
    let (payems, unrate, usrec) = tokio::try_join!(
        mandate.series(&payems),
        mandate.series(&unrate),
        mandate.series(&usrec),
    )?;
    Ok(vec![vec![
        employment_growth(&payems),
        unemployment_rate(&unrate, &usrec),
    ]])
}

fn ranking(s: &TimeSeries) -> String {
    percentile_rank_latest(s).map_or_else(|| "Ranking: n/a".into(), |r| format!("Ranking: {r:.2}%"))
}

fn base_layout() -> Layout {
    Layout {
        margin: Margin {
            l: Some(50),
            r: Some(25),
            t: Some(30),
            b: Some(45),
        },
        font: Some(Font::sized(12)),
        showlegend: Some(true),
        ..Layout::default()
    }
    .legend(Legend {
        orientation: Some("h".into()),
        yanchor: Some("bottom".into()),
        y: Some(1.18),
        xanchor: Some("left".into()),
        x: Some(0.0),
        font: None,
    })
}

/// Month-on-month payroll change with its three-month average, zoomed to the
/// recent window with a y range fitted to what is visible.
fn employment_growth(payems: &TimeSeries) -> Chart {
    let growth = diff(payems).renamed("Emp Growth");
    let ma = rolling_mean(&growth, 3).renamed("3M MA Emp Growth");

    let start = NaiveDate::from_ymd_opt(GROWTH_WINDOW_START.0, GROWTH_WINDOW_START.1, 1)
        .unwrap_or(NaiveDate::MIN);
    let end = growth.last_date().map_or(start, |d| d.max(start));
    let visible = |s: &TimeSeries| s.between(Some(start), Some(end)).valid_values().collect::<Vec<_>>();
    let mut yaxis = Axis::default().title("Change (Thousands of persons)");
    if let Some(range) = padded_range(visible(&growth).into_iter().chain(visible(&ma)), 0.05) {
        yaxis = yaxis.span(range);
    }

    let fig = Figure::new(
        base_layout()
            .xaxis(Axis::default().date().dates(start, end).ticks("%b %Y", None))
            .yaxis(yaxis),
    )
    .trace(Trace::line("All Employees, Total Nonfarm", &growth, palette::EMP_GROWTH).width(2.0))
    .trace(Trace::line("3-Month MA", &ma, palette::EMP_GROWTH_MA).width(2.0));

    Chart::new("Employment Growth", fig).with_subheader(ranking(&growth))
}

/// Unemployment rate over its full history with the long-run mean marked.
fn unemployment_rate(unrate: &TimeSeries, usrec: &TimeSeries) -> Chart {
    let mut fig = Figure::new(
        base_layout()
            .xaxis(Axis::default().title(""))
            .yaxis(Axis::default().title("% Percentage points")),
    )
    .trace(Trace::line(unrate.name(), unrate, palette::UNRATE).width(2.0));
    fig.add_recessions(&recession_periods(usrec), style::RECESSION_LIGHT);
    if let Some(avg) = mean(unrate) {
        fig.add_labelled_hline(avg, format!("Long-run avg {avg:.2}%"), 150.0);
    }

    Chart::new("Unemployment Rate", fig).with_subheader(ranking(unrate))
}
