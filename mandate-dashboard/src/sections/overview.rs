//! Inflation / Overview: headline and core CPI.

use mandate::{Frame, Mandate, MandateError};
use mandate_core::months_back;

use super::{Chart, inflation_panel, last_date, lines, recessions, with_traces};
use crate::chart::{Axis, Figure, Layout, Legend};
use crate::style::{self, palette};

const MEMBERS: [(&str, &str); 2] = [("Headline CPI", "CPIAUCSL"), ("Core CPI", "CPILFESL")];

const SHORT_TERM_MONTHS: u32 = 24;

pub(crate) async fn render(mandate: &Mandate) -> Result<Vec<Vec<Chart>>, MandateError> {
    let cpi = inflation_panel(mandate, &MEMBERS).await?;
    Ok(vec![vec![
        Chart::new("US CPI Trend – YoY", trend(&cpi)?),
        Chart::new("US CPI Short Term Change", short_term(&cpi)?),
    ]])
}

fn trend(cpi: &Frame) -> Result<Figure, MandateError> {
    let layout = Layout::default()
        .legend(Legend::above(1.02))
        .yaxis(Axis::percent("YoY"));
    let mut fig = with_traces(
        Figure::new(layout),
        lines(
            cpi,
            &[("Core CPI YoY", palette::TEAL), ("Headline CPI YoY", palette::NAVY)],
        )?,
    );
    fig.add_fed_ait_band();
    fig.add_zero_line();
    fig.add_recessions(&recessions(cpi)?, style::RECESSION);
    Ok(fig)
}

fn short_term(cpi: &Frame) -> Result<Figure, MandateError> {
    let end = last_date(cpi)?;
    let layout = Layout::default()
        .legend(Legend::above(1.02))
        .xaxis(Axis::default().dates(months_back(end, SHORT_TERM_MONTHS), end))
        .yaxis(Axis::percent("3-Month Rolling Annualised CPI").span([0.0, 5.0]));
    let mut fig = with_traces(
        Figure::new(layout),
        lines(
            cpi,
            &[("Core CPI 3M", palette::TEAL), ("Headline CPI 3M", palette::NAVY)],
        )?,
    );
    fig.add_fed_ait_band();
    fig.add_recessions(&recessions(cpi)?, style::RECESSION);
    Ok(fig)
}
