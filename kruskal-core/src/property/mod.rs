//! Property-based tests for the spanning forest and clustering.
//!
//! Verifies Kruskal against a brute-force oracle on small graphs, checks
//! structural invariants of the forest (acyclicity, edge count, subset of
//! the input) and the partition invariants of the clustering.

mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
