//! Benchmark parameter types.
//!
//! Rendered through `Display` as Criterion benchmark identifiers.

use std::fmt;

/// Parameters for a spanning forest benchmark run.
#[derive(Clone, Debug)]
pub struct ForestBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
}

impl fmt::Display for ForestBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},extra={}",
            self.vertex_count, self.extra_edges_per_vertex
        )
    }
}

/// Parameters for a clustering benchmark run.
#[derive(Clone, Debug)]
pub struct ClusterBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Requested number of clusters.
    pub cluster_count: usize,
}

impl fmt::Display for ClusterBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.vertex_count, self.cluster_count)
    }
}
