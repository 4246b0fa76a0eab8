//! Mean, sample standard deviation, percentiles and box statistics.
//!
//! NaN samples are skipped, the way a data-frame aggregation treats missing
//! values.

/// Arithmetic mean of the non-NaN values; NaN when there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> f64 {
    let (sum, count) = values
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Sample standard deviation (n - 1 denominator) of the non-NaN values.
///
/// Fewer than two samples have no sample variance; this reports 0 instead.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_std(values: &[f64]) -> f64 {
    let present: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if present.len() < 2 {
        return 0.0;
    }
    let m = mean(&present);
    let squares: f64 = present.iter().map(|v| (v - m).powi(2)).sum();
    let std = (squares / (present.len() - 1) as f64).sqrt();
    if std.is_nan() { 0.0 } else { std }
}

/// Percentile `q` (0..=100) of ascending `sorted` values, linearly
/// interpolated between closest ranks. NaN for an empty slice.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        len => {
            let rank = (q.clamp(0.0, 100.0) / 100.0) * (len - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let fraction = rank - lower as f64;
            (sorted[upper] - sorted[lower]).mul_add(fraction, sorted[lower])
        }
    }
}

/// Five-number summary for one box of a boxplot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    /// Lower whisker end
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Upper whisker end
    pub whisker_high: f64,
}

impl BoxStats {
    /// Summarize `samples` with whiskers at the given percentiles.
    ///
    /// Each whisker ends at the most extreme sample that still lies inside
    /// its percentile bound. Returns `None` when no non-NaN sample exists.
    #[must_use]
    pub fn from_samples(samples: &[f64], whisker_percentiles: (f64, f64)) -> Option<Self> {
        let mut sorted: Vec<f64> = samples.iter().copied().filter(|v| !v.is_nan()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(f64::total_cmp);

        let q1 = percentile(&sorted, 25.0);
        let median = percentile(&sorted, 50.0);
        let q3 = percentile(&sorted, 75.0);

        let low_bound = percentile(&sorted, whisker_percentiles.0);
        let high_bound = percentile(&sorted, whisker_percentiles.1);

        let whisker_low = sorted
            .iter()
            .copied()
            .find(|v| *v >= low_bound)
            .map_or(q1, |v| v.min(q1));
        let whisker_high = sorted
            .iter()
            .rev()
            .copied()
            .find(|v| *v <= high_bound)
            .map_or(q3, |v| v.max(q3));

        Some(Self {
            whisker_low,
            q1,
            median,
            q3,
            whisker_high,
        })
    }
}

#[cfg(test)]
#[path = "descriptive_tests.rs"]
mod tests;
