//! Exhaustive oracle for spanning forest minimality.
//!
//! Enumerates every subset of the input edges and keeps the lightest one
//! that is acyclic and spans every component of the input graph. Only
//! usable for a dozen or so edges.

use std::collections::BTreeMap;

use super::types::TestEdge;

/// Result of the exhaustive search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleResult {
    /// Minimum total weight over all spanning forests.
    pub total_weight: u64,
    /// Number of edges in any spanning forest of the input.
    pub edge_count: usize,
    /// Number of connected components of the input graph.
    pub component_count: usize,
}

/// Dense union-find over vertex indices.
pub(super) struct IndexForest {
    parent: Vec<usize>,
}

impl IndexForest {
    pub(super) fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    pub(super) fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Joins two nodes, returning `false` when they were already joined.
    pub(super) fn join(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        self.parent[right_root] = left_root;
        true
    }
}

/// Maps each distinct vertex to a dense index.
pub(super) fn index_vertices(edges: &[TestEdge]) -> BTreeMap<u16, usize> {
    let mut index = BTreeMap::new();
    for edge in edges {
        for vertex in [*edge.source(), *edge.target()] {
            let next = index.len();
            index.entry(vertex).or_insert(next);
        }
    }
    index
}

/// Counts the connected components formed by `edges` over the
/// indexed vertices, returning `None` if `edges` contain a cycle.
pub(super) fn forest_components(
    index: &BTreeMap<u16, usize>,
    edges: &[&TestEdge],
) -> Option<usize> {
    let mut forest = IndexForest::new(index.len());
    let mut components = index.len();
    for edge in edges {
        let source = index[edge.source()];
        let target = index[edge.target()];
        if !forest.join(source, target) {
            return None;
        }
        components -= 1;
    }
    Some(components)
}

/// Finds the minimum spanning forest weight by exhaustive search.
pub(super) fn brute_force_forest(edges: &[TestEdge]) -> OracleResult {
    let index = index_vertices(edges);
    let component_count = connected_components(&index, edges);
    let edge_count = index.len() - component_count;

    let mut best: Option<u64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != edge_count {
            continue;
        }
        let chosen: Vec<&TestEdge> = edges
            .iter()
            .enumerate()
            .filter(|(position, _)| mask & (1 << position) != 0)
            .map(|(_, edge)| edge)
            .collect();
        if forest_components(&index, &chosen) != Some(component_count) {
            continue;
        }
        let weight: u64 = chosen.iter().map(|edge| u64::from(edge.weight())).sum();
        best = Some(best.map_or(weight, |current| current.min(weight)));
    }

    OracleResult {
        total_weight: best.unwrap_or(0),
        edge_count,
        component_count,
    }
}

/// Counts connected components of the full input graph.
pub(super) fn connected_components(index: &BTreeMap<u16, usize>, edges: &[TestEdge]) -> usize {
    let mut forest = IndexForest::new(index.len());
    let mut components = index.len();
    for edge in edges {
        if forest.join(index[edge.source()], index[edge.target()]) {
            components -= 1;
        }
    }
    components
}
