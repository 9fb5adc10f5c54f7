//! Visual constants shared by every section.

use chrono::NaiveDate;

/// Height of every dashboard figure, in pixels.
pub const FIG_HEIGHT: u32 = 390;
/// Plotly template name; the page shell expands it into a template object.
pub const TEMPLATE: &str = "simple_white";
/// Stroke width of the section line traces.
pub const LINE_WIDTH: f64 = 3.0;

/// Lower edge of the Fed average-inflation-target band, in percent.
pub const AIT_LOW: f64 = 2.0;
/// Upper edge of the Fed average-inflation-target band, in percent.
pub const AIT_HIGH: f64 = 2.5;
/// Fill of the AIT band.
pub const AIT_FILL: &str = "#D9D9D9";
/// Opacity of the AIT band.
pub const AIT_OPACITY: f64 = 0.4;
/// Label drawn inside the AIT band.
pub const AIT_LABEL: &str = "FED&nbsp;AIT";
/// Label colour.
pub const AIT_LABEL_COLOR: &str = "#444";

/// How recession spans are painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecessionStyle {
    /// Fill colour.
    pub fill: &'static str,
    /// Fill opacity.
    pub opacity: f64,
    /// Draw under the traces rather than over them.
    pub below: bool,
}

/// Shading used on section charts.
pub const RECESSION: RecessionStyle = RecessionStyle {
    fill: "grey",
    opacity: 0.25,
    below: true,
};

/// Lighter shading drawn over the unemployment-rate chart.
pub const RECESSION_LIGHT: RecessionStyle = RecessionStyle {
    fill: "lightgrey",
    opacity: 0.30,
    below: false,
};

/// Baseline for "since the pandemic" rebasing.
#[must_use]
pub fn pandemic_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or(NaiveDate::MIN)
}

pub mod palette {
    //! Trace colours, grouped by where they are used.

    pub const TEAL: &str = "#18A5C2";
    pub const NAVY: &str = "#0D1F2D";
    pub const GOLD: &str = "#F4B400";
    pub const SKY: &str = "#9EC9E2";

    pub const EMP_GROWTH: &str = "#049CA4";
    pub const EMP_GROWTH_MA: &str = "black";
    pub const UNRATE: &str = "#1B65C0";

    pub const PRIVATE: &str = "#0E84C8";
    pub const GOVERNMENT: &str = "#002B45";
    /// Goods, private services, local, state, federal.
    pub const SERVICE_LED: [&str; 5] = ["#FDBE4C", "#0E84C8", "#6C8EBF", "#2A4B7C", "#F28E2B"];

    /// Goods-producing, private service-providing, CPI.
    pub const GOODS_SERVICES: [&str; 3] = [TEAL, SKY, GOLD];
    /// Trade, information, financial, business, education & health, leisure, CPI.
    pub const SERVICES_DETAIL: [&str; 7] = [
        "#0E84C8", "#6C8EBF", "#2A7F9C", "#002B45", "#FABB2A", "#FDBE4C", "#F28E2B",
    ];
    /// Manufacturing, construction, mining, CPI.
    pub const GOODS_DETAIL: [&str; 4] = [SKY, TEAL, GOLD, "#F28E2B"];

    pub const PART_TIME: &str = SKY;
    pub const QUITS_TOTAL: &str = "#84C2E5";
    /// Professional services, manufacturing, leisure, retail.
    pub const QUITS_SECTORS: [&str; 4] = ["#EF6F00", "#F3C400", "#008FD5", SKY];

    /// Core, food, energy.
    pub const CPI_COMPONENTS: [&str; 3] = ["#86C7DE", "#0794C6", GOLD];
}
