//! Property 1: equivalence with the exhaustive oracle.
//!
//! For small generated graphs, the forest produced by Kruskal must weigh
//! exactly as much as the lightest spanning forest found by enumeration, and
//! clustering down to one cluster must pick the same weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{clustering, minimum_spanning_tree};

use super::oracle::brute_force_forest;
use super::types::GraphFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let oracle = brute_force_forest(&fixture.edges);
    let forest = minimum_spanning_tree(fixture.edges.clone())
        .map_err(|e| fail_with(fixture, &format!("minimum_spanning_tree failed: {e}")))?;

    let forest_weight = u64::from(forest.total_weight());
    if forest_weight != oracle.total_weight {
        return Err(fail_with(
            fixture,
            &format!(
                "total weight mismatch: kruskal={forest_weight}, oracle={}",
                oracle.total_weight
            ),
        ));
    }
    if forest.edges().len() != oracle.edge_count {
        return Err(fail_with(
            fixture,
            &format!(
                "edge count mismatch: kruskal={}, oracle={}",
                forest.edges().len(),
                oracle.edge_count
            ),
        ));
    }
    if forest.component_count() != oracle.component_count {
        return Err(fail_with(
            fixture,
            &format!(
                "component count mismatch: kruskal={}, oracle={}",
                forest.component_count(),
                oracle.component_count
            ),
        ));
    }

    let single = clustering(fixture.edges.clone(), 1)
        .map_err(|e| fail_with(fixture, &format!("clustering failed: {e}")))?;
    if u64::from(single.total_weight()) != oracle.total_weight {
        return Err(fail_with(
            fixture,
            &format!(
                "single-cluster weight {} differs from oracle {}",
                single.total_weight(),
                oracle.total_weight
            ),
        ));
    }

    Ok(())
}

fn fail_with(fixture: &GraphFixture, message: &str) -> TestCaseError {
    TestCaseError::fail(format!(
        "{message} (shape={:?}, edges={})",
        fixture.shape,
        fixture.edges.len()
    ))
}
