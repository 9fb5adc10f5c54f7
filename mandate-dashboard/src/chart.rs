//! Minimal Plotly figure model.
//!
//! Only the attributes the dashboard sets are modelled. Everything serializes
//! to the JSON shape `Plotly.newPlot` accepts: dates as `YYYY-MM-DD`, missing
//! observations as `null`, unset attributes omitted.

use chrono::NaiveDate;
use mandate_core::{Period, TimeSeries};
use serde::Serialize;

use crate::style::{self, RecessionStyle};

/// A position on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coord {
    /// Calendar position on a date axis.
    Date(NaiveDate),
    /// Data or paper-relative position.
    Number(f64),
}

impl From<NaiveDate> for Coord {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d)
    }
}

impl From<f64> for Coord {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: String,
}

/// One plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub name: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    /// Line trace over `s`, drawn at the standard section width.
    #[must_use]
    pub fn line(name: impl Into<String>, s: &TimeSeries, color: &str) -> Self {
        Self {
            kind: TraceKind::Scatter,
            name: name.into(),
            x: s.dates(),
            y: s.values(),
            mode: Some("lines".into()),
            line: Some(Line {
                color: color.into(),
                width: style::LINE_WIDTH,
                dash: None,
            }),
            marker: None,
        }
    }

    /// Bar trace over `s`.
    #[must_use]
    pub fn bar(name: impl Into<String>, s: &TimeSeries, color: &str) -> Self {
        Self {
            kind: TraceKind::Bar,
            name: name.into(),
            x: s.dates(),
            y: s.values(),
            mode: None,
            line: None,
            marker: Some(Marker {
                color: color.into(),
            }),
        }
    }

    /// Override the line width.
    #[must_use]
    pub fn width(mut self, width: f64) -> Self {
        if let Some(line) = self.line.as_mut() {
            line.width = width;
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Font {
    #[must_use]
    pub const fn sized(size: u32) -> Self {
        Self {
            size: Some(size),
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Margin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Legend {
    /// Horizontal legend sitting just above the plot area.
    #[must_use]
    pub fn above(y: f64) -> Self {
        Self {
            orientation: Some("h".into()),
            yanchor: Some("bottom".into()),
            y: Some(y),
            x: Some(0.01),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[Coord; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticksuffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
}

impl Axis {
    #[must_use]
    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(AxisTitle { text: text.into() });
        self
    }

    #[must_use]
    pub fn date(mut self) -> Self {
        self.kind = Some("date".into());
        self
    }

    #[must_use]
    pub fn dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.range = Some([start.into(), end.into()]);
        self
    }

    #[must_use]
    pub fn span(mut self, range: [f64; 2]) -> Self {
        self.range = Some([range[0].into(), range[1].into()]);
        self
    }

    #[must_use]
    pub fn ticks(mut self, format: &str, suffix: Option<&str>) -> Self {
        self.tickformat = Some(format.into());
        self.ticksuffix = suffix.map(Into::into);
        self
    }

    /// Percent axis with one decimal, the default for rate charts.
    #[must_use]
    pub fn percent(title: &str) -> Self {
        Self::default().title(title).ticks(".1f", Some("%"))
    }
}

/// Figure-wide layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barmode: Option<String>,
    pub margin: Margin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            height: style::FIG_HEIGHT,
            template: style::TEMPLATE.into(),
            barmode: None,
            margin: Margin {
                t: Some(20),
                b: Some(25),
                ..Margin::default()
            },
            font: None,
            legend: None,
            showlegend: None,
            xaxis: Axis::default(),
            yaxis: Axis::default(),
            shapes: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

impl Layout {
    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.barmode = Some("stack".into());
        self
    }

    #[must_use]
    pub fn legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn xaxis(mut self, axis: Axis) -> Self {
        self.xaxis = axis;
        self
    }

    #[must_use]
    pub fn yaxis(mut self, axis: Axis) -> Self {
        self.yaxis = axis;
        self
    }

    #[must_use]
    pub const fn margin_right(mut self, r: u32) -> Self {
        self.margin.r = Some(r);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLine {
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

/// Rectangle or line drawn in data or axis-domain coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: String,
    pub xref: String,
    pub yref: String,
    pub x0: Coord,
    pub x1: Coord,
    pub y0: Coord,
    pub y1: Coord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fillcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    pub line: ShapeLine,
}

impl Shape {
    /// Full-height band between two dates.
    #[must_use]
    pub fn vrect(x0: NaiveDate, x1: NaiveDate, fill: &str, opacity: f64, below: bool) -> Self {
        Self {
            kind: "rect".into(),
            xref: "x".into(),
            yref: "y domain".into(),
            x0: x0.into(),
            x1: x1.into(),
            y0: 0.0.into(),
            y1: 1.0.into(),
            fillcolor: Some(fill.into()),
            opacity: Some(opacity),
            layer: below.then(|| "below".into()),
            line: ShapeLine {
                width: 0.0,
                color: None,
                dash: None,
            },
        }
    }

    /// Full-width band between two values.
    #[must_use]
    pub fn hrect(y0: f64, y1: f64, fill: &str, opacity: f64) -> Self {
        Self {
            kind: "rect".into(),
            xref: "x domain".into(),
            yref: "y".into(),
            x0: 0.0.into(),
            x1: 1.0.into(),
            y0: y0.into(),
            y1: y1.into(),
            fillcolor: Some(fill.into()),
            opacity: Some(opacity),
            layer: Some("below".into()),
            line: ShapeLine {
                width: 0.0,
                color: None,
                dash: None,
            },
        }
    }

    /// Full-width horizontal rule at `y`.
    #[must_use]
    pub fn hline(y: f64, width: f64, color: Option<&str>, dash: Option<&str>) -> Self {
        Self {
            kind: "line".into(),
            xref: "x domain".into(),
            yref: "y".into(),
            x0: 0.0.into(),
            x1: 1.0.into(),
            y0: y.into(),
            y1: y.into(),
            fillcolor: None,
            opacity: None,
            layer: None,
            line: ShapeLine {
                width,
                color: color.map(Into::into),
                dash: dash.map(Into::into),
            },
        }
    }
}

/// Text placed on the figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yref: Option<String>,
    pub x: Coord,
    pub y: Coord,
    pub showarrow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yshift: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
}

/// A complete Plotly figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    #[must_use]
    pub const fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    #[must_use]
    pub fn trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    /// Shade each recession period.
    pub fn add_recessions(&mut self, periods: &[Period], style: RecessionStyle) {
        self.layout.shapes.extend(
            periods
                .iter()
                .map(|p| Shape::vrect(p.start, p.end, style.fill, style.opacity, style.below)),
        );
    }

    /// Grey band over the Fed's 2 to 2.5 percent average-inflation target, with its label.
    pub fn add_fed_ait_band(&mut self) {
        self.layout.shapes.push(Shape::hrect(
            style::AIT_LOW,
            style::AIT_HIGH,
            style::AIT_FILL,
            style::AIT_OPACITY,
        ));
        self.layout.annotations.push(Annotation {
            text: style::AIT_LABEL.into(),
            xref: Some("paper".into()),
            yref: None,
            x: 0.01.into(),
            y: ((style::AIT_LOW + style::AIT_HIGH) / 2.0).into(),
            showarrow: false,
            xanchor: None,
            yanchor: None,
            yshift: None,
            font: Some(Font {
                size: Some(11),
                color: Some(style::AIT_LABEL_COLOR.into()),
            }),
            bgcolor: Some("rgba(0,0,0,0)".into()),
        });
    }

    /// Thin dashed rule at zero.
    pub fn add_zero_line(&mut self) {
        self.layout
            .shapes
            .push(Shape::hline(0.0, 1.0, Some("#000"), Some("dash")));
    }

    /// Dashed rule at `y` labelled at its top-left corner.
    pub fn add_labelled_hline(&mut self, y: f64, label: impl Into<String>, yshift: f64) {
        self.layout
            .shapes
            .push(Shape::hline(y, 2.0, None, Some("dash")));
        self.layout.annotations.push(Annotation {
            text: label.into(),
            xref: Some("x domain".into()),
            yref: Some("y".into()),
            x: 0.0.into(),
            y: y.into(),
            showarrow: false,
            xanchor: Some("left".into()),
            yanchor: Some("bottom".into()),
            yshift: Some(yshift),
            font: None,
            bgcolor: None,
        });
    }
}
