//! Minimum spanning forest construction with sequential Kruskal.
//!
//! Edges are sorted once by `(weight, source, target)` and scanned in that
//! order; an edge is accepted when its endpoints still lie in different
//! components. Disconnected inputs yield one tree per connected component.

use tracing::{debug, instrument};

use crate::{
    Result,
    disjoint_set::DisjointSet,
    edge::{Edge, Vertex, Weight, collect_finite, sort_edges, sum_weights, vertices},
};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug)]
pub struct SpanningForest<W, V> {
    edges: Vec<Edge<W, V>>,
    vertex_count: usize,
    component_count: usize,
}

impl<W: Weight, V: Vertex> SpanningForest<W, V> {
    /// Returns the accepted edges in ascending edge order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W, V>] { &self.edges }

    /// Returns the number of distinct vertices touched by the input edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> W {
        sum_weights(&self.edges)
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<W, V>> {
        self.edges
    }
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// Ties between equal weights are broken by the endpoints, so the result is
/// deterministic for a given edge collection. Self-loops and duplicate edges
/// are never accepted because their endpoints already share a component.
///
/// # Errors
/// Returns [`crate::KruskalError::NonFiniteWeight`] when an edge weight is NaN
/// or infinite.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, minimum_spanning_tree};
///
/// let forest = minimum_spanning_tree(vec![
///     Edge::new(1, "a", "b"),
///     Edge::new(2, "b", "c"),
///     Edge::new(3, "a", "c"),
/// ])?;
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
pub fn minimum_spanning_tree<W, V>(
    edges: impl IntoIterator<Item = Edge<W, V>>,
) -> Result<SpanningForest<W, V>>
where
    W: Weight,
    V: Vertex,
{
    let edges = collect_finite(edges)?;
    build_forest(edges)
}

#[instrument(
    name = "core.minimum_spanning_tree",
    level = "debug",
    err,
    skip(edges),
    fields(edges = edges.len()),
)]
pub(crate) fn build_forest<W, V>(edges: Vec<Edge<W, V>>) -> Result<SpanningForest<W, V>>
where
    W: Weight,
    V: Vertex,
{
    let graph_vertices = vertices(&edges);
    let vertex_count = graph_vertices.len();
    let mut set = DisjointSet::with_capacity(vertex_count);
    for vertex in graph_vertices {
        set.make_set(vertex);
    }

    let mut accepted = Vec::with_capacity(vertex_count.saturating_sub(1));
    for edge in sort_edges(edges) {
        // Once everything is joined no later edge can be accepted.
        if set.component_count() <= 1 {
            break;
        }
        if set.union(edge.source(), edge.target())?.is_some() {
            accepted.push(edge);
        }
    }

    let forest = SpanningForest {
        edges: accepted,
        vertex_count,
        component_count: set.component_count(),
    };
    debug!(
        vertices = forest.vertex_count,
        accepted = forest.edges.len(),
        components = forest.component_count,
        "spanning forest completed"
    );
    Ok(forest)
}
