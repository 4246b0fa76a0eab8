//! Linear-versus-logarithmic value axis decision.

/// Spread (max / min) at which a value axis switches to log scale.
pub const LOG_RATIO_THRESHOLD: f64 = 200.0;

/// Value axis scale of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

impl AxisScale {
    #[must_use]
    pub const fn is_log(self) -> bool {
        matches!(self, Self::Log)
    }
}

/// Pick log scale when the strictly positive, finite values span a ratio of
/// at least `threshold`. Fewer than two such values keep the axis linear.
#[must_use]
pub fn choose_scale<I>(values: I, threshold: f64) -> AxisScale
where
    I: IntoIterator<Item = f64>,
{
    let mut count = 0usize;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for value in values.into_iter().filter(|v| v.is_finite() && *v > 0.0) {
        count += 1;
        min = min.min(value);
        max = max.max(value);
    }

    if count >= 2 && max / min >= threshold {
        AxisScale::Log
    } else {
        AxisScale::Linear
    }
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
