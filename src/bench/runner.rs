//! The benchmark sweep: sizes x graph classes x instances.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use super::generator::random_network;
use super::network::FlowNetwork;
use crate::dataset::Record;
use crate::error::{ReportError, Result};

/// A family of random graphs: edge density and capacity range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphClass {
    pub label: &'static str,
    pub edges_per_node: usize,
    pub max_cap: i64,
}

impl GraphClass {
    /// Edge count for `nodes`, capped at the number of distinct ordered pairs.
    #[must_use]
    pub const fn edge_count(&self, nodes: usize) -> usize {
        let wanted = self.edges_per_node.saturating_mul(nodes);
        let max = nodes.saturating_mul(nodes.saturating_sub(1));
        if wanted < max { wanted } else { max }
    }
}

pub const GRAPH_CLASSES: [GraphClass; 3] = [
    GraphClass {
        label: "Dünn",
        edges_per_node: 2,
        max_cap: 1000,
    },
    GraphClass {
        label: "Dicht",
        edges_per_node: 50,
        max_cap: 1000,
    },
    GraphClass {
        label: "Unit-Cap",
        edges_per_node: 5,
        max_cap: 1,
    },
];

/// Sweep parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Size `k` has `k * node_step` nodes, for `k` in `1..=steps`
    pub steps: u32,
    pub node_step: u32,
    /// Random graphs per (size, class)
    pub instances: u32,
    /// Timed runs per algorithm and graph
    pub runs: u32,
    /// Fixed seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            node_step: 100,
            instances: 20,
            runs: 5,
            seed: None,
        }
    }
}

impl BenchConfig {
    /// # Errors
    /// Returns an error if a count is zero or the largest size overflows.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("steps", self.steps),
            ("node step", self.node_step),
            ("instances", self.instances),
            ("runs", self.runs),
        ] {
            if value == 0 {
                return Err(ReportError::InvalidParameters(format!(
                    "{name} must be at least 1"
                )));
            }
        }
        if self.steps.checked_mul(self.node_step).is_none() {
            return Err(ReportError::InvalidParameters(format!(
                "{} steps of {} nodes exceed the node limit",
                self.steps, self.node_step
            )));
        }
        Ok(())
    }

    /// Node counts of the sweep, ascending.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + use<> {
        let step = self.node_step;
        (1..=self.steps).map(move |k| k * step)
    }

    fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }
}

/// Flow value and mean wall time of one algorithm over `runs` fresh copies.
pub fn time_algorithm<F>(
    network: &FlowNetwork,
    source: usize,
    sink: usize,
    runs: u32,
    algorithm: F,
) -> (i64, Duration)
where
    F: Fn(&mut FlowNetwork, usize, usize) -> i64,
{
    let mut total = Duration::ZERO;
    let mut flow = 0;
    for _ in 0..runs.max(1) {
        let mut residual = network.clone();
        let start = Instant::now();
        flow = algorithm(&mut residual, source, sink);
        total += start.elapsed();
    }
    (flow, total / runs.max(1))
}

/// Runs the sweep, writing one CSV row per instance to `output` and a
/// progress table to `progress`.
pub struct BenchRunner<W: Write, P: Write> {
    config: BenchConfig,
    writer: csv::Writer<W>,
    progress: P,
    rng: StdRng,
}

impl<W: Write, P: Write> BenchRunner<W, P> {
    /// # Errors
    /// Returns an error if `config` is invalid.
    pub fn new(config: BenchConfig, output: W, progress: P) -> Result<Self> {
        config.validate()?;
        let rng = config.rng();
        Ok(Self {
            config,
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(output),
            progress,
            rng,
        })
    }

    /// Returns the number of rows written.
    ///
    /// # Errors
    /// Returns an error if writing fails or the two algorithms disagree on
    /// a flow value.
    pub fn run(mut self) -> Result<usize> {
        self.write_header()?;

        let mut rows = 0;
        for nodes in self.config.sizes() {
            for class in GRAPH_CLASSES {
                rows += self.run_class(nodes, class)?;
                self.writer.flush()?;
            }
            info!(nodes, rows, "size done");
        }
        self.writer.flush()?;
        Ok(rows)
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(
            self.progress,
            "{:>10}{:>10}{:>15}{:>12}{:>15}{:>15}",
            "V", "E", "Typ", "Inst", "EK (ms)", "Dinic (ms)"
        )?;
        writeln!(self.progress, "{}", "-".repeat(77))?;
        // Explicit so that the header is present even without rows.
        self.writer
            .write_record(crate::dataset::REQUIRED_COLUMNS)
            .map_err(io::Error::from)?;
        Ok(())
    }

    fn run_class(&mut self, nodes: u32, class: GraphClass) -> Result<usize> {
        let node_count = nodes as usize;
        let edges = class.edge_count(node_count);
        let (source, sink) = (0, node_count - 1);

        for instance in 1..=self.config.instances {
            let network = random_network(node_count, edges, class.max_cap, &mut self.rng)?;
            let (ek_flow, ek_time) =
                time_algorithm(&network, source, sink, self.config.runs, FlowNetwork::edmonds_karp);
            let (dinic_flow, dinic_time) =
                time_algorithm(&network, source, sink, self.config.runs, FlowNetwork::dinic);
            if ek_flow != dinic_flow {
                return Err(ReportError::FlowMismatch {
                    graph: format!("{} V={nodes} E={edges} instance {instance}", class.label),
                    edmonds_karp: ek_flow,
                    dinic: dinic_flow,
                });
            }
            debug!(nodes, edges, class = class.label, instance, flow = ek_flow, "instance done");

            let record = Record {
                nodes,
                edges: edges as u64,
                category: class.label.to_string(),
                instance: instance.to_string(),
                edmonds_karp_ms: millis(ek_time),
                dinic_ms: millis(dinic_time),
            };
            self.write_row(&record)?;
        }
        Ok(self.config.instances as usize)
    }

    fn write_row(&mut self, record: &Record) -> Result<()> {
        writeln!(
            self.progress,
            "{:>10}{:>10}{:>15}{:>12}{:>15.3}{:>15.3}",
            record.nodes,
            record.edges,
            record.category,
            record.instance,
            record.edmonds_karp_ms,
            record.dinic_ms
        )?;
        self.writer.serialize(record).map_err(io::Error::from)?;
        Ok(())
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
