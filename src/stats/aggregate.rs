//! Per-size aggregation of a graph type's measurements.

use std::collections::{BTreeMap, HashSet};

use super::descriptive::{mean, sample_std};
use crate::dataset::Record;

/// Mean and sample standard deviation of one algorithm's timings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    pub mean: f64,
    /// Zero when fewer than two samples contributed
    pub std: f64,
}

impl SeriesStats {
    fn from_samples(samples: &[f64]) -> Self {
        Self {
            mean: mean(samples),
            std: sample_std(samples),
        }
    }

    /// Lower edge of the mean ± std band, never below zero.
    #[must_use]
    pub fn band_low(&self) -> f64 {
        (self.mean - self.std).max(0.0)
    }

    #[must_use]
    pub fn band_high(&self) -> f64 {
        self.mean + self.std
    }
}

/// Statistics of all records sharing one node count.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedGroup {
    pub nodes: u32,
    pub edmonds_karp: SeriesStats,
    pub dinic: SeriesStats,
    /// Distinct instance ids in the group
    pub instances: usize,
}

#[derive(Default)]
struct GroupSamples<'a> {
    edmonds_karp: Vec<f64>,
    dinic: Vec<f64>,
    instances: HashSet<&'a str>,
}

/// Group records by node count, ascending.
#[must_use]
pub fn aggregate<'a, I>(records: I) -> Vec<AggregatedGroup>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups: BTreeMap<u32, GroupSamples<'a>> = BTreeMap::new();
    for record in records {
        let group = groups.entry(record.nodes).or_default();
        group.edmonds_karp.push(record.edmonds_karp_ms);
        group.dinic.push(record.dinic_ms);
        group.instances.insert(record.instance.as_str());
    }

    groups
        .into_iter()
        .map(|(nodes, samples)| AggregatedGroup {
            nodes,
            edmonds_karp: SeriesStats::from_samples(&samples.edmonds_karp),
            dinic: SeriesStats::from_samples(&samples.dinic),
            instances: samples.instances.len(),
        })
        .collect()
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
