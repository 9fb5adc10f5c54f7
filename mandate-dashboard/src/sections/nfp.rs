//! Employment / NFP: jobs added since the pandemic, by sector.

use mandate::{Frame, Mandate, MandateError, RECESSION_CODE};
use mandate_core::{Period, rebase_diff, scale};

use super::{Chart, bars, last_date, recessions, with_traces};
use crate::chart::{Axis, Figure, Layout};
use crate::style::{self, palette};

const MEMBERS: [(&str, &str); 7] = [
    ("Total Private", "USPRIV"),
    ("Government", "USGOVT"),
    ("Private Service-Providing", "CES0800000001"),
    ("Goods-Producing", "USGOOD"),
    ("Federal", "CES9091000001"),
    ("State Government", "CES9092000001"),
    ("Local Government", "CES9093000001"),
];

const SERVICE_LED: [&str; 5] = [
    "Goods-Producing",
    "Private Service-Providing",
    "Local Government",
    "State Government",
    "Federal",
];

pub(crate) async fn render(mandate: &Mandate) -> Result<Vec<Vec<Chart>>, MandateError> {
    let panel = mandate.panel_with_recession(&MEMBERS, None, None).await?;
    let shading = recessions(&panel)?;
    let jobs = jobs_since_anchor(&panel)?;

    let private_vs_govt = chart(
        &jobs,
        &shading,
        &[
            ("Total Private", palette::PRIVATE),
            ("Government", palette::GOVERNMENT),
        ],
    )?;
    let service_led: Vec<(&str, &str)> = SERVICE_LED
        .into_iter()
        .zip(palette::SERVICE_LED)
        .collect();
    let breakdown = chart(&jobs, &shading, &service_led)?;

    Ok(vec![vec![
        Chart::new("Jobs Private vs Government", private_vs_govt),
        Chart::new("Service-Led Economy Breakdown", breakdown),
    ]])
}

/// Jobs gained or lost relative to the anchor month, in millions.
fn jobs_since_anchor(panel: &Frame) -> Result<Frame, MandateError> {
    let anchor = style::pandemic_anchor();
    Ok(panel
        .drop_column(RECESSION_CODE)
        .try_map_columns(|s| rebase_diff(s, anchor))?
        .from_date(anchor)
        .map_columns(|s| scale(s, 1e-3)))
}

fn chart(jobs: &Frame, shading: &[Period], columns: &[(&str, &str)]) -> Result<Figure, MandateError> {
    let end = last_date(jobs)?;
    let layout = Layout::default()
        .stacked()
        .xaxis(Axis::default().dates(style::pandemic_anchor(), end))
        .yaxis(Axis::default().title("Jobs (millions)").ticks(".0f", Some("M")));
    let mut fig = with_traces(Figure::new(layout), bars(jobs, columns)?);
    fig.add_recessions(shading, style::RECESSION);
    Ok(fig)
}
