//! Random benchmark graphs.

use rand::Rng;

use super::network::FlowNetwork;
use crate::error::{ReportError, Result};

/// Network with exactly `edges` directed edges between uniformly drawn
/// endpoints and capacities uniform in `1..=max_cap`.
///
/// Self-loops are redrawn; parallel edges are kept.
///
/// # Errors
/// Returns an error if edges are requested on fewer than two nodes or
/// `max_cap` is below 1.
pub fn random_network<R: Rng + ?Sized>(
    nodes: usize,
    edges: usize,
    max_cap: i64,
    rng: &mut R,
) -> Result<FlowNetwork> {
    if edges > 0 && nodes < 2 {
        return Err(ReportError::InvalidParameters(format!(
            "{edges} edges need at least 2 nodes, got {nodes}"
        )));
    }
    if max_cap < 1 {
        return Err(ReportError::InvalidParameters(format!(
            "maximum capacity must be at least 1, got {max_cap}"
        )));
    }

    let mut network = FlowNetwork::new(nodes);
    let mut added = 0;
    while added < edges {
        let from = rng.random_range(0..nodes);
        let to = rng.random_range(0..nodes);
        if from == to {
            continue;
        }
        network.add_edge(from, to, rng.random_range(1..=max_cap));
        added += 1;
    }
    Ok(network)
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
