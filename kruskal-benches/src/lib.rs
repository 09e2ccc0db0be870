//! Benchmark support crate for kruskal.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for the spanning forest, clustering and union-find.

pub mod error;
pub mod graph;
pub mod params;
