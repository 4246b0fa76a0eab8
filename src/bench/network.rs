//! Residual flow networks and the two max-flow algorithms.

use std::collections::VecDeque;

const UNREACHED: usize = usize::MAX;

/// Residual edge. The paired edge lives at `adjacency[to][rev]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub rev: usize,
    /// Remaining capacity
    pub cap: i64,
}

/// Directed network stored as a residual graph.
///
/// Both algorithms consume the residual capacities, so run them on a clone
/// when the original network is needed again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowNetwork {
    adjacency: Vec<Vec<Edge>>,
}

impl FlowNetwork {
    #[must_use]
    pub fn new(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges added with [`add_edge`](Self::add_edge).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Residual edges leaving `node`, reverse edges included.
    #[must_use]
    pub fn edges(&self, node: usize) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Add `from -> to` with capacity `cap` and its zero-capacity reverse edge.
    ///
    /// # Panics
    /// Panics if either node is out of range.
    pub fn add_edge(&mut self, from: usize, to: usize, cap: i64) {
        debug_assert!(cap >= 0, "negative capacity {cap}");
        // On a self-loop both edges land in the same list.
        let forward_rev = self.adjacency[to].len() + usize::from(from == to);
        let backward_rev = self.adjacency[from].len();
        self.adjacency[from].push(Edge {
            to,
            rev: forward_rev,
            cap,
        });
        self.adjacency[to].push(Edge {
            to: from,
            rev: backward_rev,
            cap: 0,
        });
    }

    /// Maximum flow by shortest augmenting paths (Edmonds-Karp).
    pub fn edmonds_karp(&mut self, source: usize, sink: usize) -> i64 {
        if source == sink {
            return 0;
        }

        let mut flow = 0;
        // For every reached node: the node it was reached from and the edge index.
        let mut parent: Vec<Option<(usize, usize)>> = vec![None; self.node_count()];
        loop {
            parent.fill(None);
            let Some(bottleneck) = self.shortest_path(source, sink, &mut parent) else {
                return flow;
            };

            let mut node = sink;
            while node != source {
                let Some((prev, index)) = parent[node] else {
                    break;
                };
                let edge = &mut self.adjacency[prev][index];
                edge.cap -= bottleneck;
                let rev = edge.rev;
                self.adjacency[node][rev].cap += bottleneck;
                node = prev;
            }
            flow += bottleneck;
        }
    }

    /// BFS for an augmenting path; returns its bottleneck capacity.
    fn shortest_path(
        &self,
        source: usize,
        sink: usize,
        parent: &mut [Option<(usize, usize)>],
    ) -> Option<i64> {
        let mut queue = VecDeque::from([(source, i64::MAX)]);
        parent[source] = Some((source, usize::MAX));

        while let Some((node, limit)) = queue.pop_front() {
            if node == sink {
                return Some(limit);
            }
            for (index, edge) in self.adjacency[node].iter().enumerate() {
                if edge.cap > 0 && parent[edge.to].is_none() {
                    parent[edge.to] = Some((node, index));
                    queue.push_back((edge.to, limit.min(edge.cap)));
                }
            }
        }
        None
    }

    /// Maximum flow by level graphs and blocking flows (Dinic).
    pub fn dinic(&mut self, source: usize, sink: usize) -> i64 {
        if source == sink {
            return 0;
        }

        let mut flow = 0;
        let mut level = vec![UNREACHED; self.node_count()];
        let mut next_edge = vec![0; self.node_count()];
        while self.build_levels(source, sink, &mut level) {
            next_edge.fill(0);
            loop {
                let pushed = self.push_blocking(source, sink, i64::MAX, &level, &mut next_edge);
                if pushed == 0 {
                    break;
                }
                flow += pushed;
            }
        }
        flow
    }

    /// BFS distances from `source` over edges with capacity left.
    fn build_levels(&self, source: usize, sink: usize, level: &mut [usize]) -> bool {
        level.fill(UNREACHED);
        level[source] = 0;
        let mut queue = VecDeque::from([source]);

        while let Some(node) = queue.pop_front() {
            for edge in &self.adjacency[node] {
                if edge.cap > 0 && level[edge.to] == UNREACHED {
                    level[edge.to] = level[node] + 1;
                    queue.push_back(edge.to);
                }
            }
        }
        level[sink] != UNREACHED
    }

    /// Push one path of flow along the level graph. `next_edge` is the
    /// current-arc pointer per node; edges before it are exhausted for this phase.
    fn push_blocking(
        &mut self,
        node: usize,
        sink: usize,
        limit: i64,
        level: &[usize],
        next_edge: &mut [usize],
    ) -> i64 {
        if node == sink {
            return limit;
        }

        while next_edge[node] < self.adjacency[node].len() {
            let index = next_edge[node];
            let Edge { to, rev, cap } = self.adjacency[node][index];
            if cap > 0 && level[to] == level[node] + 1 {
                let pushed = self.push_blocking(to, sink, limit.min(cap), level, next_edge);
                if pushed > 0 {
                    self.adjacency[node][index].cap -= pushed;
                    self.adjacency[to][rev].cap += pushed;
                    return pushed;
                }
            }
            next_edge[node] += 1;
        }
        0
    }
}

#[cfg(test)]
#[path = "network_tests.rs"]
mod tests;
