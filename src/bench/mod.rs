//! Max-flow benchmark: Edmonds-Karp against Dinic on random networks.
//!
//! Produces the results file that the report renders.

mod generator;
mod network;
mod runner;

pub use generator::random_network;
pub use network::{Edge, FlowNetwork};
pub use runner::{BenchConfig, BenchRunner, GRAPH_CLASSES, GraphClass, time_algorithm};
