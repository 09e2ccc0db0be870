//! Command-line interface orchestration for the kruskal tools.
//!
//! `mst` prints the minimum spanning forest of an edge list and `cluster`
//! partitions its vertices into a requested number of single-linkage clusters.

mod commands;

pub use commands::{
    Cli, CliError, ClusterCommand, Command, ExecutionSummary, MstCommand, Outcome, TextEdge,
    render_summary, run_cli,
};
