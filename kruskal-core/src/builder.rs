//! Builder utilities for configuring Kruskal runs.
//!
//! Exposes the cluster-count policy surface and the validation performed
//! before constructing [`Kruskal`] instances.

use std::num::NonZeroUsize;

use crate::{
    Result,
    cluster::{Clustering, build_clusters},
    edge::{Edge, Vertex, Weight, collect_finite},
    error::KruskalError,
    forest::{SpanningForest, build_forest},
};

const DEFAULT_CLUSTER_COUNT: usize = 2;

/// Decides what happens when more clusters are requested than the graph has
/// vertices.
///
/// # Examples
/// ```
/// use kruskal_core::OversizedClusterPolicy;
///
/// assert_eq!(OversizedClusterPolicy::default(), OversizedClusterPolicy::Clamp);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OversizedClusterPolicy {
    /// Return every vertex as its own cluster.
    #[default]
    Clamp,
    /// Fail with [`KruskalError::ClusterCountExceedsVertices`].
    Reject,
}

/// Configures and constructs [`Kruskal`] instances.
///
/// # Examples
/// ```
/// use kruskal_core::{KruskalBuilder, OversizedClusterPolicy};
///
/// let kruskal = KruskalBuilder::new()
///     .with_cluster_count(4)
///     .with_oversized_policy(OversizedClusterPolicy::Reject)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(kruskal.cluster_count().get(), 4);
/// assert_eq!(kruskal.oversized_policy(), OversizedClusterPolicy::Reject);
/// ```
#[derive(Debug, Clone)]
pub struct KruskalBuilder {
    cluster_count: usize,
    oversized_policy: OversizedClusterPolicy,
}

impl Default for KruskalBuilder {
    fn default() -> Self {
        Self {
            cluster_count: DEFAULT_CLUSTER_COUNT,
            oversized_policy: OversizedClusterPolicy::Clamp,
        }
    }
}

impl KruskalBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{KruskalBuilder, OversizedClusterPolicy};
    ///
    /// let builder = KruskalBuilder::new();
    /// assert_eq!(builder.cluster_count(), 2);
    /// assert_eq!(builder.oversized_policy(), OversizedClusterPolicy::Clamp);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of clusters to stop at.
    #[must_use]
    pub fn with_cluster_count(mut self, count: usize) -> Self {
        self.cluster_count = count;
        self
    }

    /// Returns the configured cluster count.
    #[must_use]
    pub fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// Sets how oversized cluster requests are handled.
    #[must_use]
    pub fn with_oversized_policy(mut self, policy: OversizedClusterPolicy) -> Self {
        self.oversized_policy = policy;
        self
    }

    /// Returns the configured oversized cluster policy.
    #[must_use]
    pub fn oversized_policy(&self) -> OversizedClusterPolicy {
        self.oversized_policy
    }

    /// Validates the configuration and constructs a [`Kruskal`] instance.
    ///
    /// # Errors
    /// Returns [`KruskalError::InvalidClusterCount`] when the cluster count is
    /// zero.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::{KruskalBuilder, KruskalError};
    ///
    /// let err = KruskalBuilder::new().with_cluster_count(0).build().unwrap_err();
    /// assert_eq!(err, KruskalError::InvalidClusterCount { got: 0 });
    /// ```
    pub fn build(self) -> Result<Kruskal> {
        let cluster_count = NonZeroUsize::new(self.cluster_count).ok_or(
            KruskalError::InvalidClusterCount {
                got: self.cluster_count,
            },
        )?;
        Ok(Kruskal {
            cluster_count,
            oversized_policy: self.oversized_policy,
        })
    }
}

/// Validated Kruskal configuration.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, KruskalBuilder};
///
/// let kruskal = KruskalBuilder::new().with_cluster_count(2).build()?;
/// let clustering = kruskal.cluster(vec![
///     Edge::new(1, 'a', 'b'),
///     Edge::new(9, 'b', 'c'),
/// ])?;
/// assert_eq!(clustering.cluster_count(), 2);
/// assert_eq!(clustering.cluster_of(&'a'), clustering.cluster_of(&'b'));
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kruskal {
    cluster_count: NonZeroUsize,
    oversized_policy: OversizedClusterPolicy,
}

impl Kruskal {
    /// Returns the validated cluster count.
    #[must_use]
    pub fn cluster_count(&self) -> NonZeroUsize {
        self.cluster_count
    }

    /// Returns the oversized cluster policy.
    #[must_use]
    pub fn oversized_policy(&self) -> OversizedClusterPolicy {
        self.oversized_policy
    }

    /// Groups the graph into the configured number of clusters.
    ///
    /// # Errors
    /// Returns [`KruskalError::NonFiniteWeight`] for NaN or infinite weights and
    /// [`KruskalError::ClusterCountExceedsVertices`] when the policy is
    /// [`OversizedClusterPolicy::Reject`] and the graph is too small.
    pub fn cluster<W, V>(
        &self,
        edges: impl IntoIterator<Item = Edge<W, V>>,
    ) -> Result<Clustering<W, V>>
    where
        W: Weight,
        V: Vertex,
    {
        let edges = collect_finite(edges)?;
        build_clusters(edges, self.cluster_count, self.oversized_policy)
    }

    /// Computes the full minimum spanning forest, ignoring the cluster count.
    ///
    /// # Errors
    /// Returns [`KruskalError::NonFiniteWeight`] for NaN or infinite weights.
    pub fn spanning_forest<W, V>(
        &self,
        edges: impl IntoIterator<Item = Edge<W, V>>,
    ) -> Result<SpanningForest<W, V>>
    where
        W: Weight,
        V: Vertex,
    {
        let edges = collect_finite(edges)?;
        build_forest(edges)
    }
}
