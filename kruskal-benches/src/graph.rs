//! Seeded synthetic graphs for benchmarking.
//!
//! Each graph is a random spanning tree over `vertex_count` vertices plus
//! `extra_edges_per_vertex * vertex_count` uniformly random edges, so the
//! whole graph is connected and most random edges end up redundant. Random
//! edges may be self-loops or repeat an existing pair.

use kruskal_core::Edge;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Edge type of every synthetic graph.
pub type GraphEdge = Edge<u32, u32>;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, at least two.
    pub vertex_count: usize,
    /// Random edges added per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Errors raised while generating a synthetic graph.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GraphError {
    /// Fewer than two vertices were requested.
    #[error("a synthetic graph needs at least two vertices, got {got}")]
    TooFewVertices {
        /// Requested vertex count.
        got: usize,
    },
    /// The vertex count does not fit the `u32` vertex identifiers.
    #[error("vertex count {got} exceeds u32::MAX")]
    TooManyVertices {
        /// Requested vertex count.
        got: usize,
    },
    /// The maximum weight was zero.
    #[error("max_weight must be greater than zero")]
    ZeroMaxWeight,
}

/// A generated edge list with its vertex count.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<GraphEdge>,
}

impl SyntheticGraph {
    /// Generates a connected graph from `config`.
    ///
    /// # Errors
    /// Returns [`GraphError`] when the configuration is out of range.
    ///
    /// # Examples
    /// ```
    /// use kruskal_benches::graph::{SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let graph = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     vertex_count: 10,
    ///     extra_edges_per_vertex: 2,
    ///     max_weight: 100,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(graph.edges().len(), 9 + 20);
    /// # Ok::<(), kruskal_benches::graph::GraphError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, GraphError> {
        if config.vertex_count < 2 {
            return Err(GraphError::TooFewVertices {
                got: config.vertex_count,
            });
        }
        if config.max_weight == 0 {
            return Err(GraphError::ZeroMaxWeight);
        }
        let vertices = u32::try_from(config.vertex_count).map_err(|_| {
            GraphError::TooManyVertices {
                got: config.vertex_count,
            }
        })?;

        let extra = config
            .vertex_count
            .saturating_mul(config.extra_edges_per_vertex);
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges = Vec::with_capacity(config.vertex_count.saturating_add(extra));

        for vertex in 1..vertices {
            let parent = rng.gen_range(0..vertex);
            let weight = rng.gen_range(1..=config.max_weight);
            edges.push(Edge::new(weight, parent, vertex));
        }
        for _ in 0..extra {
            let source = rng.gen_range(0..vertices);
            let target = rng.gen_range(0..vertices);
            let weight = rng.gen_range(1..=config.max_weight);
            edges.push(Edge::new(weight, source, target));
        }

        Ok(Self {
            vertex_count: config.vertex_count,
            edges,
        })
    }

    /// Number of vertices in the graph.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Generated edges in generation order.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }
}
