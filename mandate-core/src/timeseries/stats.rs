use crate::TimeSeries;

/// Share of observations strictly below the latest observation, as a percentage.
///
/// The latest observation is the last present value. Missing values never count
/// as below it but stay in the denominator, which is the full series length.
/// Returns `None` for an all-missing series.
#[must_use]
pub fn percentile_rank_latest(s: &TimeSeries) -> Option<f64> {
    let (_, latest) = s.last_valid()?;
    let below = s.valid_values().filter(|v| *v < latest).count();
    #[allow(clippy::cast_precision_loss)]
    Some(below as f64 / s.len() as f64 * 100.0)
}

/// Arithmetic mean of the present values.
#[must_use]
pub fn mean(s: &TimeSeries) -> Option<f64> {
    let (sum, n) = s
        .valid_values()
        .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    #[allow(clippy::cast_precision_loss)]
    (n > 0).then(|| sum / n as f64)
}

/// Smallest and largest of the given values, ignoring non-finite ones.
pub fn min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Axis range covering `values` with `pad_fraction` of the span added on both sides.
pub fn padded_range(values: impl IntoIterator<Item = f64>, pad_fraction: f64) -> Option<[f64; 2]> {
    let (lo, hi) = min_max(values)?;
    let pad = pad_fraction * (hi - lo);
    Some([lo - pad, hi + pad])
}
