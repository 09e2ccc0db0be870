//! Shared test utilities for `kruskal-core`.

use kruskal_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::Edge;

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `KRUSKAL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Six-vertex reference graph with two weight ties.
///
/// Its minimum spanning tree weighs 11; stopping after three merges leaves
/// the clusters `{A, S}`, `{C, D}` and `{B, E}`.
#[must_use]
pub(crate) fn reference_graph() -> Vec<Edge<u32, &'static str>> {
    [
        (1, "A", "S"),
        (5, "A", "B"),
        (6, "A", "C"),
        (3, "S", "C"),
        (2, "C", "D"),
        (3, "B", "D"),
        (2, "E", "B"),
        (4, "E", "D"),
    ]
    .into_iter()
    .map(Edge::from)
    .collect()
}

/// Converts `(weight, source, target)` triples into edges.
#[must_use]
pub(crate) fn edges_from<V: crate::Vertex>(triples: &[(u32, V, V)]) -> Vec<Edge<u32, V>> {
    triples.iter().cloned().map(Edge::from).collect()
}
