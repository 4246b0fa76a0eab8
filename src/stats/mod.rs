//! Descriptive statistics over benchmark timings.

mod aggregate;
mod descriptive;
mod scale;

pub use aggregate::{AggregatedGroup, SeriesStats, aggregate};
pub use descriptive::{BoxStats, mean, percentile, sample_std};
pub use scale::{AxisScale, LOG_RATIO_THRESHOLD, choose_scale};
