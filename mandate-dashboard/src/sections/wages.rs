//! Employment / Wages: earnings growth since the pandemic against CPI.

use mandate::{Frame, Mandate, MandateError, RECESSION_CODE};
use mandate_core::{Period, pct_change, rebase_pct};

use super::{Chart, last_date, lines, recessions, with_traces};
use crate::chart::{Axis, Figure, Font, Layout, Legend, Trace};
use crate::style::{self, palette};

const MEMBERS: [(&str, &str); 15] = [
    ("Total Private", "CES0500000003"),
    ("Goods-Producing", "CES0600000003"),
    ("Private Service-Providing", "CES0800000003"),
    ("CPI", "CPIAUCSL"),
    ("TTU", "CES4000000003"),
    ("Information", "CES5000000003"),
    ("Financial", "CES5500000003"),
    ("Business", "CES6000000003"),
    ("Private Edu. & Health", "CES6500000003"),
    ("Leisure & Hosp.", "CES7000000003"),
    ("Mining and Logging", "CES1000000003"),
    ("Construction", "CES2000000003"),
    ("Manufacturing", "CES3000000003"),
    ("Non-supervisory", "AHETPI"),
    ("ECI Wages", "ECIWAG"),
];

const GOODS_SERVICES: [&str; 3] = ["Goods-Producing", "Private Service-Providing", "CPI"];
const SERVICES_DETAIL: [&str; 7] = [
    "TTU",
    "Information",
    "Financial",
    "Business",
    "Private Edu. & Health",
    "Leisure & Hosp.",
    "CPI",
];
const GOODS_DETAIL: [&str; 4] = ["Manufacturing", "Construction", "Mining and Logging", "CPI"];

/// Quarters in a year; the joined panel follows the quarterly ECI.
const ECI_YOY_PERIODS: usize = 4;

pub(crate) async fn render(mandate: &Mandate) -> Result<Vec<Vec<Chart>>, MandateError> {
    let panel = mandate.panel_with_recession(&MEMBERS, None, None).await?;
    let shading = recessions(&panel)?;
    let growth = growth_since_anchor(&panel)?;
    let chart = |columns: Vec<(&'static str, &'static str)>, legend_font| {
        line_chart(&growth, &shading, &columns, legend_font)
    };

    Ok(vec![
        vec![
            Chart::new(
                "Private Wages Vs CPI",
                chart(vec![("Total Private", palette::TEAL), ("CPI", palette::NAVY)], None)?,
            ),
            Chart::new(
                "Goods & Services Vs CPI",
                chart(paired(&GOODS_SERVICES, &palette::GOODS_SERVICES), None)?,
            ),
        ],
        vec![
            Chart::new(
                "Services by Sub-Sector",
                chart(paired(&SERVICES_DETAIL, &palette::SERVICES_DETAIL), Some(11))?,
            ),
            Chart::new(
                "Goods By Sub-Sector",
                chart(paired(&GOODS_DETAIL, &palette::GOODS_DETAIL), None)?,
            ),
        ],
        vec![
            Chart::new(
                "Non-Supervisory Wages Vs CPI",
                chart(vec![("Non-supervisory", palette::TEAL), ("CPI", palette::NAVY)], None)?,
            ),
            Chart::new(
                "Employment Cost Index – Wages (YoY)",
                eci_yoy(&panel, &shading)?,
            ),
        ],
    ])
}

fn paired(cols: &[&'static str], colors: &[&'static str]) -> Vec<(&'static str, &'static str)> {
    cols.iter().copied().zip(colors.iter().copied()).collect()
}

/// Percent change of every wage column (and CPI) since the anchor.
fn growth_since_anchor(panel: &Frame) -> Result<Frame, MandateError> {
    let anchor = style::pandemic_anchor();
    Ok(panel
        .drop_column(RECESSION_CODE)
        .try_map_columns(|s| rebase_pct(s, anchor))?
        .from_date(anchor))
}

fn layout(end: chrono::NaiveDate, legend_font: Option<u32>) -> Layout {
    let mut legend = Legend::above(1.02);
    if let Some(size) = legend_font {
        legend = legend.font(Font::sized(size));
    }
    Layout::default()
        .legend(legend)
        .xaxis(Axis::default().dates(style::pandemic_anchor(), end))
        .yaxis(Axis::percent("Percent"))
}

fn line_chart(
    growth: &Frame,
    shading: &[Period],
    columns: &[(&str, &str)],
    legend_font: Option<u32>,
) -> Result<Figure, MandateError> {
    let end = last_date(growth)?;
    let mut fig = with_traces(Figure::new(layout(end, legend_font)), lines(growth, columns)?);
    fig.add_recessions(shading, style::RECESSION);
    Ok(fig)
}

fn eci_yoy(panel: &Frame, shading: &[Period]) -> Result<Figure, MandateError> {
    let eci = pct_change(&panel.series("ECI Wages")?, ECI_YOY_PERIODS)
        .from_date(style::pandemic_anchor())
        .dropna();
    let end = eci
        .last_date()
        .ok_or_else(|| MandateError::Data("ECI Wages: no year-over-year values".into()))?;
    let mut fig =
        Figure::new(layout(end, None)).trace(Trace::line("ECI Wages YoY", &eci, palette::GOLD));
    fig.add_recessions(shading, style::RECESSION);
    Ok(fig)
}
