//! Synthetic but plausible shapes for every code the dashboard reads.

use chrono::{Days, Months, NaiveDate};
use mandate_core::{DatasetId, Frame, Point, TimeSeries};

const MONTHS: u32 = 300;
const WEEKS: u64 = 1304;
const QUARTERS: u32 = 100;

#[derive(Clone, Copy)]
enum Freq {
    Monthly,
    Weekly,
    Quarterly,
}

#[derive(Clone, Copy)]
enum Shape {
    /// Compounding level: `base * (1 + growth)^i` with a small ripple.
    Level { base: f64, growth: f64 },
    /// Oscillating rate around `mean`.
    Rate { mean: f64, amplitude: f64, period: f64 },
}

struct Profile {
    freq: Freq,
    shape: Shape,
}

const fn level(base: f64, growth: f64) -> Profile {
    Profile {
        freq: Freq::Monthly,
        shape: Shape::Level { base, growth },
    }
}

const fn rate(mean: f64, amplitude: f64, period: f64) -> Profile {
    Profile {
        freq: Freq::Monthly,
        shape: Shape::Rate {
            mean,
            amplitude,
            period,
        },
    }
}

/// Codes with a fixture, including the recession flag series.
pub const CODES: &[&str] = &[
    "PAYEMS",
    "UNRATE",
    "USREC",
    "USPRIV",
    "USGOVT",
    "USGOOD",
    "CES0800000001",
    "CES9091000001",
    "CES9092000001",
    "CES9093000001",
    "CES0500000003",
    "CES0600000003",
    "CES0800000003",
    "CES1000000003",
    "CES2000000003",
    "CES3000000003",
    "CES4000000003",
    "CES5000000003",
    "CES5500000003",
    "CES6000000003",
    "CES6500000003",
    "CES7000000003",
    "AHETPI",
    "ECIWAG",
    "CPIAUCSL",
    "CPILFESL",
    "CPIUFDSL",
    "CPIENGSL",
    "CUSR0000SEHA",
    "CUSR0000SEHC",
    "LNS12300060",
    "U1RATE",
    "CES3000000004",
    "CES3200000004",
    "LNS12032194",
    "JTSQUL",
    "JTS540099QUL",
    "JTS3000QUL",
    "JTS7000QUL",
    "JTS4400QUL",
    "JTSJOL",
    "CLF16OV",
    "CCSA",
    "ICSA",
];

fn profile(code: &str) -> Option<Profile> {
    let p = match code {
        "PAYEMS" => level(131_000.0, 0.0008),
        "USPRIV" => level(110_000.0, 0.0009),
        "USGOVT" => level(21_000.0, 0.0004),
        "USGOOD" => level(24_000.0, -0.0002),
        "CES0800000001" => level(86_000.0, 0.0011),
        "CES9091000001" => level(2_900.0, 0.0001),
        "CES9092000001" => level(4_900.0, 0.0003),
        "CES9093000001" => level(13_500.0, 0.0005),
        "CES0500000003" => level(16.0, 0.0028),
        "CES0600000003" => level(17.5, 0.0026),
        "CES0800000003" => level(15.6, 0.0029),
        "CES1000000003" => level(19.0, 0.0030),
        "CES2000000003" => level(18.5, 0.0027),
        "CES3000000003" => level(16.8, 0.0025),
        "CES4000000003" => level(14.5, 0.0027),
        "CES5000000003" => level(22.0, 0.0031),
        "CES5500000003" => level(18.0, 0.0032),
        "CES6000000003" => level(18.8, 0.0030),
        "CES6500000003" => level(15.2, 0.0027),
        "CES7000000003" => level(9.5, 0.0030),
        "AHETPI" => level(13.8, 0.0029),
        "CPIAUCSL" => level(169.3, 0.0021),
        "CPILFESL" => level(179.3, 0.0020),
        "CPIUFDSL" => level(167.5, 0.0023),
        "CPIENGSL" => level(116.0, 0.0030),
        "CUSR0000SEHA" => level(183.0, 0.0029),
        "CUSR0000SEHC" => level(198.0, 0.0028),
        "CLF16OV" => level(142_000.0, 0.0006),
        "JTSJOL" => level(5_200.0, 0.0012),
        "LNS12032194" => level(3_200.0, 0.0005),
        "JTSQUL" => level(2_900.0, 0.0007),
        "JTS540099QUL" => level(520.0, 0.0008),
        "JTS3000QUL" => level(240.0, 0.0004),
        "JTS7000QUL" => level(560.0, 0.0010),
        "JTS4400QUL" => level(430.0, 0.0006),
        "UNRATE" => rate(5.5, 1.8, 96.0),
        "LNS12300060" => rate(79.0, 1.5, 120.0),
        "U1RATE" => rate(1.8, 0.9, 96.0),
        "CES3000000004" => rate(3.9, 0.5, 60.0),
        "CES3200000004" => rate(3.7, 0.4, 60.0),
        "ECIWAG" => Profile {
            freq: Freq::Quarterly,
            shape: Shape::Level {
                base: 85.0,
                growth: 0.0075,
            },
        },
        "CCSA" => Profile {
            freq: Freq::Weekly,
            shape: Shape::Rate {
                mean: 2_400_000.0,
                amplitude: 600_000.0,
                period: 260.0,
            },
        },
        "ICSA" => Profile {
            freq: Freq::Weekly,
            shape: Shape::Rate {
                mean: 320_000.0,
                amplitude: 60_000.0,
                period: 260.0,
            },
        },
        _ => return None,
    };
    Some(p)
}

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn month(i: u32) -> NaiveDate {
    origin()
        .checked_add_months(Months::new(i))
        .unwrap_or(NaiveDate::MAX)
}

fn dates(freq: Freq) -> Vec<NaiveDate> {
    match freq {
        Freq::Monthly => (0..MONTHS).map(month).collect(),
        Freq::Quarterly => (0..QUARTERS).map(|q| month(q * 3)).collect(),
        Freq::Weekly => (0..WEEKS)
            .map(|w| {
                origin()
                    .checked_add_days(Days::new(w * 7))
                    .unwrap_or(NaiveDate::MAX)
            })
            .collect(),
    }
}

fn phase(code: &str) -> f64 {
    f64::from(code.bytes().map(u32::from).sum::<u32>() % 17)
}

fn value(shape: Shape, i: usize, phase: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let x = i as f64;
    match shape {
        Shape::Level { base, growth } => {
            base * (1.0 + growth).powf(x) * (1.0 + 0.003 * (x / 3.0 + phase).sin())
        }
        Shape::Rate {
            mean,
            amplitude,
            period,
        } => mean + amplitude * (std::f64::consts::TAU * x / period + phase).sin(),
    }
}

fn in_recession(d: NaiveDate) -> bool {
    const RUNS: &[((i32, u32), (i32, u32))] =
        &[((2001, 4), (2001, 11)), ((2008, 1), (2009, 6)), ((2020, 3), (2020, 4))];
    RUNS.iter().any(|((sy, sm), (ey, em))| {
        let start = NaiveDate::from_ymd_opt(*sy, *sm, 1);
        let end = NaiveDate::from_ymd_opt(*ey, *em, 1);
        matches!((start, end), (Some(s), Some(e)) if s <= d && d <= e)
    })
}

/// Full fixture history for `code`, named after the code.
pub fn series(code: &str) -> Option<TimeSeries> {
    if code == "USREC" {
        let points = dates(Freq::Monthly)
            .into_iter()
            .map(|d| Point::new(d, if in_recession(d) { 1.0 } else { 0.0 }));
        return Some(TimeSeries::new(code, points));
    }
    let p = profile(code)?;
    let ph = phase(code);
    let points = dates(p.freq)
        .into_iter()
        .enumerate()
        .map(|(i, d)| Point::new(d, value(p.shape, i, ph)));
    Some(TimeSeries::new(code, points))
}

/// Fixture frame for a dataset with `Cyclical` and `Acyclical` columns.
pub fn dataset(id: DatasetId) -> Frame {
    let (cyc, acyc) = match id {
        DatasetId::CyclicalAcyclicalYoy => (
            Shape::Rate {
                mean: 2.6,
                amplitude: 1.2,
                period: 84.0,
            },
            Shape::Rate {
                mean: 1.4,
                amplitude: 0.6,
                period: 60.0,
            },
        ),
        DatasetId::CyclicalAcyclicalMom => (
            Shape::Rate {
                mean: 1.5,
                amplitude: 1.0,
                period: 18.0,
            },
            Shape::Rate {
                mean: 0.9,
                amplitude: 0.8,
                period: 11.0,
            },
        ),
    };
    let idx = dates(Freq::Monthly);
    let col = |name: &str, shape: Shape, ph: f64| {
        TimeSeries::new(
            name,
            idx.iter()
                .enumerate()
                .map(|(i, d)| Point::new(*d, value(shape, i, ph))),
        )
    };
    let c = col("Cyclical", cyc, 0.0);
    let a = col("Acyclical", acyc, 1.0);
    Frame::from_series([&c, &a])
}
