//! Inflation / CPI: core against its excluded components, and housing.

use mandate::{Frame, Mandate, MandateError};
use mandate_core::months_back;

use super::{Chart, inflation_panel, last_date, recessions, with_traces};
use crate::chart::{Axis, Figure, Layout, Legend, Trace};
use crate::style::{self, palette};

const COMPONENTS: [(&str, &str); 3] = [
    ("Core CPI", "CPILFESL"),
    ("Food CPI", "CPIUFDSL"),
    ("Energy CPI", "CPIENGSL"),
];

const HOUSING: [(&str, &str); 2] = [
    ("Rent of Primary Residence", "CUSR0000SEHA"),
    ("OER", "CUSR0000SEHC"),
];

/// How one horizon of a CPI chart is drawn.
struct Horizon {
    suffix: &'static str,
    y_title: &'static str,
    window_months: Option<u32>,
    y_range: Option<[f64; 2]>,
    zero_line: bool,
}

const YOY: Horizon = Horizon {
    suffix: " YoY",
    y_title: "YoY",
    window_months: None,
    y_range: None,
    zero_line: true,
};

pub(crate) async fn render(mandate: &Mandate) -> Result<Vec<Vec<Chart>>, MandateError> {
    let (components, housing) = tokio::try_join!(
        inflation_panel(mandate, &COMPONENTS),
        inflation_panel(mandate, &HOUSING),
    )?;

    let component_traces: Vec<(&str, &str, &str)> = COMPONENTS
        .iter()
        .zip(palette::CPI_COMPONENTS)
        .map(|((label, _), color)| (*label, short_name(*label), color))
        .collect();
    let housing_traces = [
        (HOUSING[0].0, HOUSING[0].0, palette::TEAL),
        (HOUSING[1].0, HOUSING[1].0, palette::NAVY),
    ];

    let short_components = Horizon {
        suffix: " 3M",
        y_title: "3M Annualized",
        window_months: Some(36),
        y_range: Some([-40.0, 60.0]),
        zero_line: false,
    };
    let short_housing = Horizon {
        window_months: Some(48),
        y_range: None,
        ..short_components
    };

    Ok(vec![
        vec![
            Chart::new(
                "CPI Core vs Ex Component",
                figure(&components, &component_traces, &YOY, Some(10))?,
            ),
            Chart::new(
                "Core and Ex Short term",
                figure(&components, &component_traces, &short_components, None)?,
            ),
        ],
        vec![
            Chart::new(
                "Housing Components",
                figure(&housing, &housing_traces, &YOY, None)?,
            ),
            Chart::new(
                "Short Term Housing",
                figure(&housing, &housing_traces, &short_housing, None)?,
            ),
        ],
    ])
}

/// "Core CPI" → "Core".
fn short_name(label: &str) -> &str {
    label.strip_suffix(" CPI").unwrap_or(label)
}

/// `traces` are `(panel label, trace name, colour)`.
fn figure(
    panel: &Frame,
    traces: &[(&str, &str, &str)],
    horizon: &Horizon,
    margin_right: Option<u32>,
) -> Result<Figure, MandateError> {
    let end = last_date(panel)?;
    let mut x = Axis::default();
    if let Some(months) = horizon.window_months {
        x = x.dates(months_back(end, months), end);
    }
    let mut y = Axis::percent(horizon.y_title);
    if let Some(range) = horizon.y_range {
        y = y.span(range);
    }
    let mut layout = Layout::default().legend(Legend::above(1.02)).xaxis(x).yaxis(y);
    if let Some(r) = margin_right {
        layout = layout.margin_right(r);
    }

    let data = traces
        .iter()
        .map(|(label, name, color)| {
            let column = format!("{label}{}", horizon.suffix);
            Ok(Trace::line(*name, &panel.series(&column)?, color))
        })
        .collect::<Result<Vec<_>, MandateError>>()?;
    let mut fig = with_traces(Figure::new(layout), data);
    fig.add_fed_ait_band();
    if horizon.zero_line {
        fig.add_zero_line();
    }
    fig.add_recessions(&recessions(panel)?, style::RECESSION);
    Ok(fig)
}
