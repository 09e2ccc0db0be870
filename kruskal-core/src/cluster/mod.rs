//! k-way clustering by stopping Kruskal early.
//!
//! The loop scans edges in the same order as [`crate::minimum_spanning_tree`]
//! but halts once `vertex_count - k` merges have happened. Edges whose
//! endpoints already share a component are skipped and do not count towards
//! that budget, so the result holds exactly `k` clusters whenever the graph
//! has enough connecting edges.

use std::{
    collections::{BTreeMap, BTreeSet},
    num::NonZeroUsize,
};

use tracing::{Span, debug, field, instrument, warn};

use crate::{
    Result,
    builder::{KruskalBuilder, OversizedClusterPolicy},
    disjoint_set::DisjointSet,
    edge::{Edge, Vertex, Weight, sort_edges, sum_weights, vertices},
    error::KruskalError,
};

/// The output of a clustering run.
///
/// Clusters are keyed by their representative vertex, the root of the
/// component in the union-find at the moment merging stopped.
#[derive(Clone, Debug)]
pub struct Clustering<W, V> {
    edges: Vec<Edge<W, V>>,
    clusters: BTreeMap<V, BTreeSet<V>>,
}

impl<W: Weight, V: Vertex> Clustering<W, V> {
    /// Returns the accepted edges in ascending edge order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W, V>] { &self.edges }

    /// Returns the clusters keyed by representative vertex.
    #[must_use]
    #[rustfmt::skip]
    pub fn clusters(&self) -> &BTreeMap<V, BTreeSet<V>> { &self.clusters }

    /// Returns the number of clusters.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Returns the number of clustered vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.clusters.values().map(BTreeSet::len).sum()
    }

    /// Returns the representative of the cluster holding `vertex`.
    #[must_use]
    pub fn cluster_of(&self, vertex: &V) -> Option<&V> {
        self.clusters
            .iter()
            .find_map(|(root, members)| members.contains(vertex).then_some(root))
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> W {
        sum_weights(&self.edges)
    }

    /// Consumes the clustering and returns `(edges, clusters)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Edge<W, V>>, BTreeMap<V, BTreeSet<V>>) {
        (self.edges, self.clusters)
    }
}

/// Groups the vertices of `edges` into `cluster_count` clusters.
///
/// Requests for more clusters than there are vertices are clamped: every
/// vertex becomes its own cluster. Use [`KruskalBuilder`] with
/// [`OversizedClusterPolicy::Reject`] to fail instead.
///
/// # Errors
/// Returns [`KruskalError::InvalidClusterCount`] when `cluster_count` is zero
/// and [`KruskalError::NonFiniteWeight`] when an edge weight is NaN or
/// infinite. Both checks run before any merging.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, clustering};
///
/// let result = clustering(
///     vec![
///         Edge::new(1, "a", "b"),
///         Edge::new(2, "c", "d"),
///         Edge::new(10, "b", "c"),
///     ],
///     2,
/// )?;
/// assert_eq!(result.cluster_count(), 2);
/// assert_eq!(result.edges().len(), 2);
/// assert_ne!(result.cluster_of(&"a"), result.cluster_of(&"d"));
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
pub fn clustering<W, V>(
    edges: impl IntoIterator<Item = Edge<W, V>>,
    cluster_count: usize,
) -> Result<Clustering<W, V>>
where
    W: Weight,
    V: Vertex,
{
    KruskalBuilder::new()
        .with_cluster_count(cluster_count)
        .build()?
        .cluster(edges)
}

#[instrument(
    name = "core.clustering",
    level = "debug",
    err,
    skip(edges, policy),
    fields(edges = edges.len(), cluster_count = cluster_count.get(), target_unions = field::Empty),
)]
pub(crate) fn build_clusters<W, V>(
    edges: Vec<Edge<W, V>>,
    cluster_count: NonZeroUsize,
    policy: OversizedClusterPolicy,
) -> Result<Clustering<W, V>>
where
    W: Weight,
    V: Vertex,
{
    let graph_vertices = vertices(&edges);
    let vertex_count = graph_vertices.len();
    let requested = cluster_count.get();

    if requested > vertex_count {
        match policy {
            OversizedClusterPolicy::Reject => {
                return Err(KruskalError::ClusterCountExceedsVertices {
                    requested,
                    vertices: vertex_count,
                });
            }
            OversizedClusterPolicy::Clamp => warn!(
                requested,
                vertices = vertex_count,
                "cluster count exceeds vertex count; every vertex forms its own cluster"
            ),
        }
    }

    let target_unions = vertex_count.saturating_sub(requested);
    Span::current().record("target_unions", target_unions);

    let mut set = DisjointSet::with_capacity(vertex_count);
    for vertex in graph_vertices {
        set.make_set(vertex);
    }

    let mut accepted = Vec::with_capacity(target_unions);
    for edge in sort_edges(edges) {
        if accepted.len() >= target_unions {
            break;
        }
        if set.union(edge.source(), edge.target())?.is_some() {
            accepted.push(edge);
        }
    }

    let clustering = Clustering {
        edges: accepted,
        clusters: set.into_components(),
    };
    debug!(
        vertices = vertex_count,
        accepted = clustering.edges.len(),
        clusters = clustering.cluster_count(),
        "clustering completed"
    );
    Ok(clustering)
}
