//! Type definitions for the Kruskal property-based tests.

use test_strategy::Arbitrary;

use crate::Edge;

/// Edge type used by every generated graph.
pub(super) type TestEdge = Edge<u32, u16>;

/// Shape of a generated graph.
///
/// Each shape stresses a different part of the loop: ties exercise the
/// endpoint tie-break, disconnected graphs exercise forests and the cluster
/// budget running out of edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Every edge has a distinct weight.
    #[weight(2)]
    Unique,
    /// Weights drawn from a pool of one to three values.
    #[weight(3)]
    ManyIdentical,
    /// A random spanning tree plus a few extra edges.
    #[weight(2)]
    Sparse,
    /// Several components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Self-loops and repeated edges mixed into a random graph.
    #[weight(1)]
    Redundant,
}

/// Fixture for forest and clustering properties.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Generated edges, in generation order.
    pub edges: Vec<TestEdge>,
    /// Shape used during generation.
    pub shape: GraphShape,
}
