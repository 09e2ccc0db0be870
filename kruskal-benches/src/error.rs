//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of `.expect()`.

use crate::graph::GraphError;
use kruskal_core::KruskalError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Graph(#[from] GraphError),
    /// Building a forest or clustering failed.
    #[error("kruskal operation failed: {0}")]
    Kruskal(#[from] KruskalError),
}
