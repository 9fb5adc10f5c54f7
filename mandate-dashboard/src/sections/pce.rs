//! Inflation / PCE: the San Francisco Fed's cyclical and acyclical core PCE split.

use mandate::{DatasetId, Frame, Mandate, MandateError, RECESSION_CODE};
use mandate_core::{Period, months_back, recession_runs};

use super::{Chart, bars, last_date, lines, request, with_traces};
use crate::chart::{Axis, Figure, Layout, Legend};
use crate::style::{self, palette};

const MOM_WINDOW_MONTHS: u32 = 48;

pub(crate) async fn render(mandate: &Mandate) -> Result<Vec<Vec<Chart>>, MandateError> {
    let usrec = request(RECESSION_CODE)?;
    let (yoy, mom, usrec) = tokio::try_join!(
        mandate.dataset(DatasetId::CyclicalAcyclicalYoy),
        mandate.dataset(DatasetId::CyclicalAcyclicalMom),
        mandate.series(&usrec),
    )?;
    Ok(vec![vec![
        Chart::new("Core PCE – Cyclical & Acyclical", yoy_figure(&yoy, &recession_runs(&usrec))?)
            .with_subheader("Year over year"),
        Chart::new("Core PCE – Cyclical & Acyclical", mom_figure(&mom)?)
            .with_subheader("Month over month, annualized"),
    ]])
}

fn yoy_figure(yoy: &Frame, shading: &[Period]) -> Result<Figure, MandateError> {
    let layout = Layout::default()
        .legend(Legend::above(1.02))
        .yaxis(Axis::percent("YoY"))
        .margin_right(10);
    let mut fig = with_traces(
        Figure::new(layout),
        lines(yoy, &[("Cyclical", palette::TEAL), ("Acyclical", palette::NAVY)])?,
    );
    fig.add_fed_ait_band();
    fig.add_zero_line();
    fig.add_recessions(shading, style::RECESSION);
    Ok(fig)
}

/// Stacked monthly contributions over the recent window; no recession shading.
fn mom_figure(mom: &Frame) -> Result<Figure, MandateError> {
    let end = last_date(mom)?;
    let layout = Layout::default()
        .stacked()
        .legend(Legend::above(1.02))
        .xaxis(Axis::default().dates(months_back(end, MOM_WINDOW_MONTHS), end))
        .yaxis(Axis::percent("MoM Annualized"));
    let mut fig = with_traces(
        Figure::new(layout),
        bars(mom, &[("Acyclical", palette::NAVY), ("Cyclical", palette::TEAL)])?,
    );
    fig.add_fed_ait_band();
    fig.add_zero_line();
    Ok(fig)
}
