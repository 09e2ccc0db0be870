//! Kruskal core library.
//!
//! Computes minimum spanning forests and k-way clusterings of undirected
//! weighted graphs with Kruskal's algorithm over a keyed union-find.
//!
//! # Edge order
//!
//! Edges are processed ascending by weight. Equal weights are ordered by
//! source and then target vertex, so results do not depend on the order in
//! which the caller supplies edges.
//!
//! # Cluster budget
//!
//! [`clustering`] stops once `vertex_count - k` merges have happened. Only
//! edges that join two components count towards the budget.

mod builder;
mod cluster;
mod disjoint_set;
mod edge;
mod edge_list;
mod error;
mod forest;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{Kruskal, KruskalBuilder, OversizedClusterPolicy},
    cluster::{Clustering, clustering},
    disjoint_set::{DisjointSet, Union},
    edge::{Edge, Vertex, Weight, sort_edges, vertices},
    edge_list::{parse_edge_list, read_edge_list},
    error::{
        DisjointSetError, DisjointSetErrorCode, EdgeListError, EdgeListErrorCode, KruskalError,
        KruskalErrorCode, Result,
    },
    forest::{SpanningForest, minimum_spanning_tree},
};
