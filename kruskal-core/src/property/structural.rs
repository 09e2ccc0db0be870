//! Property 2: structural invariants.
//!
//! For any generated graph:
//!
//! - the forest is a subset of the input edges and is acyclic;
//! - the forest has `V - C` edges for `C` input components;
//! - every clustering partitions exactly the input vertex set;
//! - clustering into `k` yields `max(k, C)` clusters and `V - that` edges;
//! - clustering into `V` clusters accepts nothing.

use std::collections::BTreeSet;

use proptest::prop_assert_eq;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{clustering, minimum_spanning_tree, vertices};

use super::oracle::{connected_components, forest_components, index_vertices};
use super::types::{GraphFixture, TestEdge};

/// Runs the forest structural property for the given fixture.
pub(super) fn run_forest_structural_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = minimum_spanning_tree(fixture.edges.clone())
        .map_err(|e| TestCaseError::fail(format!("minimum_spanning_tree failed: {e}")))?;
    let index = index_vertices(&fixture.edges);
    let expected_components = connected_components(&index, &fixture.edges);

    for edge in forest.edges() {
        if !fixture.edges.contains(edge) {
            return Err(TestCaseError::fail(format!(
                "forest edge {edge:?} is not part of the input (shape={:?})",
                fixture.shape
            )));
        }
    }

    let chosen: Vec<&TestEdge> = forest.edges().iter().collect();
    let components = forest_components(&index, &chosen).ok_or_else(|| {
        TestCaseError::fail(format!("forest contains a cycle (shape={:?})", fixture.shape))
    })?;

    prop_assert_eq!(components, expected_components);
    prop_assert_eq!(forest.component_count(), expected_components);
    prop_assert_eq!(forest.vertex_count(), index.len());
    prop_assert_eq!(forest.edges().len(), index.len() - expected_components);
    Ok(())
}

/// Runs the clustering partition property for the given fixture and `k`.
pub(super) fn run_clustering_partition_property(
    fixture: &GraphFixture,
    cluster_count: usize,
) -> TestCaseResult {
    let result = clustering(fixture.edges.clone(), cluster_count)
        .map_err(|e| TestCaseError::fail(format!("clustering failed: {e}")))?;
    let expected_vertices: BTreeSet<u16> = vertices(&fixture.edges);
    let index = index_vertices(&fixture.edges);
    let input_components = connected_components(&index, &fixture.edges);

    let mut seen = BTreeSet::new();
    for (root, members) in result.clusters() {
        if !members.contains(root) {
            return Err(TestCaseError::fail(format!(
                "cluster root {root} is not one of its members"
            )));
        }
        for member in members {
            if !seen.insert(*member) {
                return Err(TestCaseError::fail(format!(
                    "vertex {member} appears in two clusters"
                )));
            }
        }
    }
    prop_assert_eq!(&seen, &expected_vertices);

    let vertex_count = expected_vertices.len();
    let expected_clusters = cluster_count.min(vertex_count).max(input_components);
    prop_assert_eq!(result.cluster_count(), expected_clusters);
    prop_assert_eq!(result.edges().len(), vertex_count - expected_clusters);

    let chosen: Vec<&TestEdge> = result.edges().iter().collect();
    prop_assert_eq!(
        forest_components(&index, &chosen),
        Some(expected_clusters)
    );

    let singletons = clustering(fixture.edges.clone(), vertex_count.max(1))
        .map_err(|e| TestCaseError::fail(format!("clustering failed: {e}")))?;
    prop_assert_eq!(singletons.edges().len(), 0);
    prop_assert_eq!(singletons.cluster_count(), vertex_count);
    Ok(())
}
