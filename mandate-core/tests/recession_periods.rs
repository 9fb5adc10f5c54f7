use chrono::{Months, NaiveDate};
use mandate_core::{Period, Point, TimeSeries, recession_periods, recession_runs};

fn month(i: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .checked_add_months(Months::new(i))
        .unwrap()
}

fn flags(values: &[f64]) -> TimeSeries {
    TimeSeries::new(
        "USREC",
        values
            .iter()
            .zip(0u32..)
            .map(|(v, i)| Point::new(month(i), *v)),
    )
}

#[test]
fn two_runs_give_two_periods() {
    let s = flags(&[0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0]);
    let periods = recession_periods(&s);
    assert_eq!(
        periods,
        vec![
            Period {
                start: month(2),
                end: month(4)
            },
            Period {
                start: month(5),
                end: month(6)
            },
        ]
    );
}

#[test]
fn open_run_closes_on_last_date() {
    let s = flags(&[0.0, 1.0, 1.0]);
    assert_eq!(
        recession_periods(&s),
        vec![Period {
            start: month(1),
            end: month(2)
        }]
    );
}

#[test]
fn run_starting_on_first_observation_is_kept() {
    let s = flags(&[1.0, 1.0, 0.0, 0.0]);
    assert_eq!(
        recession_periods(&s),
        vec![Period {
            start: month(0),
            end: month(2)
        }]
    );
}

#[test]
fn runs_end_on_last_flagged_date() {
    let s = flags(&[0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0]);
    assert_eq!(
        recession_runs(&s),
        vec![
            Period {
                start: month(2),
                end: month(3)
            },
            Period {
                start: month(5),
                end: month(5)
            },
        ]
    );
}

#[test]
fn no_flags_no_periods() {
    assert!(recession_periods(&flags(&[0.0, 0.0, 0.0])).is_empty());
    assert!(recession_runs(&flags(&[])).is_empty());
}

#[test]
fn missing_values_count_as_expansion() {
    let s = TimeSeries::new(
        "USREC",
        vec![
            Point::new(month(0), 1.0),
            Point::missing(month(1)),
            Point::new(month(2), 1.0),
        ],
    );
    assert_eq!(recession_periods(&s).len(), 2);
}
