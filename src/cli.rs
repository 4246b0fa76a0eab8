use std::path::PathBuf;

use clap::Parser;

/// Default input consumed by `flow-report` and written by `flow-bench`.
pub const DEFAULT_RESULTS_FILE: &str = "results.csv";

#[derive(Parser, Debug)]
#[command(name = "flow-report")]
#[command(author, version, about = "Render max-flow benchmark charts per graph class")]
#[command(long_about = "Reads benchmark measurements (V, E, Typ, Instance, EK_ms, Dinic_ms) \
    and writes bar_<type>.png, line_<type>.png and box_<type>.png for every graph type \
    into the current directory.\n\n\
    Exit codes:\n  \
    0 - Charts written\n  \
    1 - Invalid input (missing columns, unparsable values)\n  \
    2 - Rendering or IO error")]
pub struct Cli {
    /// Benchmark results CSV
    #[arg(default_value = DEFAULT_RESULTS_FILE)]
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
#[command(name = "flow-bench")]
#[command(author, version, about = "Benchmark Edmonds-Karp against Dinic on random graphs")]
pub struct BenchCli {
    /// CSV file to write measurements to
    #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
    pub output: PathBuf,

    /// Number of graph sizes; size k has 100*k nodes
    #[arg(long, default_value_t = 20)]
    pub steps: u32,

    /// Random graphs per (size, graph type)
    #[arg(long, default_value_t = 20)]
    pub instances: u32,

    /// Timed runs per algorithm and graph, averaged
    #[arg(long, default_value_t = 5)]
    pub runs: u32,

    /// Seed for reproducible graphs (seeded from the OS otherwise)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
