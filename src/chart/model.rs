//! Backend-independent chart descriptions built from aggregated data.

use crate::dataset::Record;
use crate::stats::{AggregatedGroup, AxisScale, BoxStats, SeriesStats, choose_scale};

pub const EDMONDS_KARP: &str = "Edmonds–Karp";
pub const DINIC: &str = "Dinic";
pub const NODES_AXIS: &str = "V (nodes)";
pub const TIME_AXIS: &str = "time (ms)";

/// The three charts rendered per graph type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Box,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Bar, Self::Line, Self::Box];

    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Box => "box",
        }
    }

    /// Image file name for a category slug, e.g. `bar_dicht.png`.
    #[must_use]
    pub fn file_name(self, slug: &str) -> String {
        format!("{}_{slug}.png", self.prefix())
    }
}

/// Grouped bars: one Edmonds-Karp/Dinic pair of means per node count.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub nodes: Vec<u32>,
    pub edmonds_karp: Vec<f64>,
    pub dinic: Vec<f64>,
}

impl BarChart {
    #[must_use]
    pub fn new(category: &str, groups: &[AggregatedGroup]) -> Self {
        let max_instances = groups.iter().map(|g| g.instances).max().unwrap_or(0);
        Self {
            title: format!("{category}: mean per V (over {max_instances} instances)"),
            nodes: groups.iter().map(|g| g.nodes).collect(),
            edmonds_karp: groups.iter().map(|g| g.edmonds_karp.mean).collect(),
            dinic: groups.iter().map(|g| g.dinic.mean).collect(),
        }
    }

    /// Value axis range; bars always start at zero.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        value_range(
            self.edmonds_karp.iter().chain(&self.dinic).copied(),
            AxisScale::Linear,
            true,
        )
    }
}

/// One point of a mean line with its ± std band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPoint {
    pub x: f64,
    pub mean: f64,
    pub low: f64,
    pub high: f64,
}

impl BandPoint {
    fn new(nodes: u32, stats: SeriesStats) -> Self {
        Self {
            x: f64::from(nodes),
            mean: stats.mean,
            low: stats.band_low(),
            high: stats.band_high(),
        }
    }
}

/// Mean runtime over node count with a shaded ± std band per algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub title: String,
    pub edmonds_karp: Vec<BandPoint>,
    pub dinic: Vec<BandPoint>,
    pub scale: AxisScale,
}

impl LineChart {
    #[must_use]
    pub fn new(category: &str, groups: &[AggregatedGroup], log_threshold: f64) -> Self {
        let scale = choose_scale(
            groups
                .iter()
                .map(|g| g.edmonds_karp.mean)
                .chain(groups.iter().map(|g| g.dinic.mean)),
            log_threshold,
        );
        Self {
            title: format!("{category}: runtime over V (mean ± std)"),
            edmonds_karp: groups
                .iter()
                .map(|g| BandPoint::new(g.nodes, g.edmonds_karp))
                .collect(),
            dinic: groups
                .iter()
                .map(|g| BandPoint::new(g.nodes, g.dinic))
                .collect(),
            scale,
        }
    }

    fn points(&self) -> impl Iterator<Item = &BandPoint> {
        self.edmonds_karp.iter().chain(&self.dinic)
    }

    /// Node-count axis range, padded so edge markers stay inside.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        value_range(self.points().map(|p| p.x), AxisScale::Linear, false)
    }

    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        value_range(
            self.points().flat_map(|p| [p.mean, p.low, p.high]),
            self.scale,
            self.scale == AxisScale::Linear,
        )
    }
}

/// A box with its axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledBox {
    pub label: &'static str,
    pub stats: BoxStats,
}

/// Distribution of every raw timing sample of a graph type, one box per
/// algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChart {
    pub title: String,
    pub boxes: Vec<LabeledBox>,
    pub scale: AxisScale,
}

impl BoxChart {
    #[must_use]
    pub fn new(
        category: &str,
        records: &[&Record],
        whisker_percentiles: (f64, f64),
        log_threshold: f64,
    ) -> Self {
        let edmonds_karp: Vec<f64> = records.iter().map(|r| r.edmonds_karp_ms).collect();
        let dinic: Vec<f64> = records.iter().map(|r| r.dinic_ms).collect();

        let scale = choose_scale(
            edmonds_karp.iter().chain(&dinic).copied(),
            log_threshold,
        );

        let boxes = [(EDMONDS_KARP, &edmonds_karp), (DINIC, &dinic)]
            .into_iter()
            .filter_map(|(label, samples)| {
                BoxStats::from_samples(samples, whisker_percentiles)
                    .map(|stats| LabeledBox { label, stats })
            })
            .collect();

        Self {
            title: format!("{category}: distribution over all instances"),
            boxes,
            scale,
        }
    }

    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        value_range(
            self.boxes
                .iter()
                .flat_map(|b| [b.stats.whisker_low, b.stats.whisker_high]),
            self.scale,
            false,
        )
    }
}

/// Padded axis range over the finite values (positive ones on a log axis).
///
/// A linear range with `include_zero` is anchored at zero when all values
/// are non-negative.
#[must_use]
pub fn value_range<I>(values: I, scale: AxisScale, include_zero: bool) -> (f64, f64)
where
    I: IntoIterator<Item = f64>,
{
    let usable = |v: &f64| v.is_finite() && (scale == AxisScale::Linear || *v > 0.0);
    let (lo, hi) = values
        .into_iter()
        .filter(usable)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or(match scale {
            AxisScale::Linear => (0.0, 0.0),
            AxisScale::Log => (1.0, 10.0),
        });

    match scale {
        AxisScale::Linear => {
            let (lo, hi) = if include_zero {
                (lo.min(0.0), hi.max(0.0))
            } else {
                (lo, hi)
            };
            let span = hi - lo;
            let pad = if span > 0.0 {
                span * 0.05
            } else if hi.abs() > 0.0 {
                hi.abs() * 0.05
            } else {
                1.0
            };
            let low = if include_zero && lo >= 0.0 { lo } else { lo - pad };
            (low, hi + pad)
        }
        AxisScale::Log => {
            let factor = (hi / lo).powf(0.05).max(1.1);
            (lo / factor, hi * factor)
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
