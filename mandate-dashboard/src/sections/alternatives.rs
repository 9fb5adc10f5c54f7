//! Employment / Alternatives: prime-age employment, long-term unemployment,
//! overtime, involuntary part-time work and quits.

use chrono::NaiveDate;
use mandate::{Frame, Mandate, MandateError};
use mandate_core::{Period, scale};

use super::{Chart, bars, last_date, recessions, with_traces};
use crate::chart::{Axis, Figure, Font, Layout, Legend, Trace};
use crate::style::{self, palette};

const PRIME_AGE: [(&str, &str); 2] = [
    ("EPOP 25-54 Yrs", "LNS12300060"),
    ("Unemployed ≥15wks (U-1)", "U1RATE"),
];

const HOURS: [(&str, &str); 3] = [
    ("OT – Manufacturing", "CES3000000004"),
    ("OT – Nondurable Goods", "CES3200000004"),
    ("Part-Time Econ Reasons", "LNS12032194"),
];

const QUITS: [(&str, &str); 5] = [
    ("Quits – Total", "JTSQUL"),
    ("Professional and Business Services", "JTS540099QUL"),
    ("Manufacturing", "JTS3000QUL"),
    ("Leisure and Hospitality", "JTS7000QUL"),
    ("Retail Trade", "JTS4400QUL"),
];

pub(crate) async fn render(mandate: &Mandate) -> Result<Vec<Vec<Chart>>, MandateError> {
    let (prime, hours, quits) = tokio::try_join!(
        mandate.panel_with_recession(&PRIME_AGE, None, None),
        mandate.panel_with_recession(&HOURS, None, None),
        mandate.panel_with_recession(&QUITS, None, None),
    )?;
    let mut rows = prime_age_rows(&prime)?;
    rows.push(hours_row(&hours)?);
    rows.push(quits_row(&quits)?);
    Ok(rows)
}

fn since(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn shaded(mut fig: Figure, shading: &[Period]) -> Figure {
    fig.add_recessions(shading, style::RECESSION);
    fig
}

fn single_rate(panel: &Frame, column: &str, name: &str, color: &str) -> Result<Figure, MandateError> {
    let layout = Layout::default().yaxis(Axis::percent("Percent"));
    let fig = Figure::new(layout).trace(Trace::line(name, &panel.series(column)?, color));
    Ok(shaded(fig, &recessions(panel)?))
}

fn prime_age_rows(panel: &Frame) -> Result<Vec<Vec<Chart>>, MandateError> {
    Ok(vec![vec![
        Chart::new(
            "% of Employed Persons (Aged 25-54)",
            single_rate(panel, "EPOP 25-54 Yrs", "EPOP 25-54", palette::TEAL)?,
        ),
        Chart::new(
            "Labor Force Unemployed 15 Weeks + (U-1)",
            single_rate(panel, "Unemployed ≥15wks (U-1)", "U-1", palette::NAVY)?,
        ),
    ]])
}

fn hours_row(panel: &Frame) -> Result<Vec<Chart>, MandateError> {
    let shading = recessions(panel)?;
    let x = Axis::default().dates(since(2021), last_date(panel)?);

    let overtime = Figure::new(
        Layout::default()
            .legend(Legend::above(1.02))
            .xaxis(x.clone())
            .yaxis(Axis::default().title("Hours").ticks(".1f", None)),
    )
    .trace(Trace::line(
        "Manufacturing",
        &panel.series("OT – Manufacturing")?,
        palette::TEAL,
    ))
    .trace(Trace::line(
        "Nondurable Goods",
        &panel.series("OT – Nondurable Goods")?,
        palette::NAVY,
    ));

    let part_time = scale(&panel.series("Part-Time Econ Reasons")?, 1e-3);
    let part_time = Figure::new(
        Layout::default()
            .xaxis(x)
            .yaxis(Axis::default().title("Millions of People").ticks(".1f", None)),
    )
    .trace(Trace::bar("Part-Time Econ Reasons", &part_time, palette::PART_TIME));

    Ok(vec![
        Chart::new("Average Weekly Overtime Hours of All Employees", shaded(overtime, &shading)),
        Chart::new("Part-Time Labor for Economic Reasons", shaded(part_time, &shading)),
    ])
}

fn quits_row(panel: &Frame) -> Result<Vec<Chart>, MandateError> {
    let shading = recessions(panel)?;
    let x = Axis::default().date().dates(since(2020), last_date(panel)?);
    let y = Axis::default().title("Thousands of People").ticks(".0f", None);

    let total = Figure::new(Layout::default().xaxis(x.clone()).yaxis(y.clone())).trace(Trace::bar(
        "Total Quits",
        &panel.series("Quits – Total")?,
        palette::QUITS_TOTAL,
    ));

    let sectors: Vec<(&str, &str)> = QUITS[1..]
        .iter()
        .map(|(label, _)| *label)
        .zip(palette::QUITS_SECTORS)
        .collect();
    let by_sector = with_traces(
        Figure::new(
            Layout::default()
                .stacked()
                .legend(Legend::above(1.02).font(Font::sized(11)))
                .xaxis(x)
                .yaxis(y),
        ),
        bars(panel, &sectors)?,
    );

    Ok(vec![
        Chart::new("People Quitting Their Job", shaded(total, &shading)),
        Chart::new("Quits – Selected Sectors", shaded(by_sector, &shading)),
    ])
}
