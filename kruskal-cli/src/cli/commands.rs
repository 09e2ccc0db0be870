//! Command implementations and argument parsing for the kruskal CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use kruskal_core::{
    Clustering, Edge, EdgeListError, KruskalBuilder, KruskalError, OversizedClusterPolicy,
    SpanningForest, read_edge_list,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Edge type produced by the edge-list reader.
pub type TextEdge = Edge<f64, String>;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Build minimum spanning forests and single-linkage clusterings."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of an edge list.
    Mst(MstCommand),
    /// Partition the vertices of an edge list into clusters.
    Cluster(ClusterCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Path to an edge list with one `weight source target` line per edge.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options accepted by the `cluster` command.
#[derive(Debug, Args, Clone)]
pub struct ClusterCommand {
    /// Path to an edge list with one `weight source target` line per edge.
    pub path: PathBuf,

    /// Number of clusters to produce.
    #[arg(long, short = 'k')]
    pub clusters: usize,

    /// Fail instead of clamping when more clusters than vertices are requested.
    #[arg(long)]
    pub strict: bool,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge list could not be read or was malformed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// The forest or clustering could not be built.
    #[error(transparent)]
    Core(#[from] KruskalError),
}

impl CliError {
    /// Stable code of the underlying library error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EdgeList(err) => err.code().as_str(),
            Self::Core(err) => err.code().as_str(),
        }
    }
}

/// Result of a single command.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Output of `mst`.
    Forest(SpanningForest<f64, String>),
    /// Output of `cluster`.
    Clusters(Clustering<f64, String>),
}

impl Outcome {
    /// Accepted edges in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[TextEdge] {
        match self {
            Self::Forest(forest) => forest.edges(),
            Self::Clusters(clustering) => clustering.edges(),
        }
    }

    /// Sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        match self {
            Self::Forest(forest) => forest.total_weight(),
            Self::Clusters(clustering) => clustering.total_weight(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the input, derived from the path unless overridden.
    pub data_source: String,
    /// Number of edges read from the input.
    pub edges_read: usize,
    /// Forest or clustering produced by the command.
    pub outcome: Outcome,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or the requested
/// operation fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, MstCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1 a b\n2 b c\n3 a c\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstCommand {
///         path: file.path().to_path_buf(),
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.outcome.total_weight(), 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(command)
        }
        Command::Cluster(command) => {
            span.record("command", field::display("cluster"));
            run_cluster(command)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(path = %command.path.display(), edges = field::Empty),
)]
pub(super) fn run_mst(command: MstCommand) -> Result<ExecutionSummary, CliError> {
    let MstCommand { path, name } = command;
    let edges = load_edges(&path)?;
    let edges_read = edges.len();
    Span::current().record("edges", edges_read);

    let forest = KruskalBuilder::new().build()?.spanning_forest(edges)?;
    let data_source = derive_data_source_name(&path, name.as_deref());
    info!(
        data_source = data_source.as_str(),
        accepted = forest.edges().len(),
        components = forest.component_count(),
        "mst completed"
    );
    Ok(ExecutionSummary {
        data_source,
        edges_read,
        outcome: Outcome::Forest(forest),
    })
}

#[instrument(
    name = "cli.cluster",
    err,
    skip(command),
    fields(
        path = %command.path.display(),
        clusters = command.clusters,
        strict = command.strict,
        edges = field::Empty,
    ),
)]
pub(super) fn run_cluster(command: ClusterCommand) -> Result<ExecutionSummary, CliError> {
    let ClusterCommand {
        path,
        clusters,
        strict,
        name,
    } = command;
    let policy = if strict {
        OversizedClusterPolicy::Reject
    } else {
        OversizedClusterPolicy::Clamp
    };
    let kruskal = KruskalBuilder::new()
        .with_cluster_count(clusters)
        .with_oversized_policy(policy)
        .build()?;

    let edges = load_edges(&path)?;
    let edges_read = edges.len();
    Span::current().record("edges", edges_read);

    let clustering = kruskal.cluster(edges)?;
    let data_source = derive_data_source_name(&path, name.as_deref());
    info!(
        data_source = data_source.as_str(),
        clusters = clustering.cluster_count(),
        "cluster completed"
    );
    Ok(ExecutionSummary {
        data_source,
        edges_read,
        outcome: Outcome::Clusters(clustering),
    })
}

#[instrument(name = "cli.load_edges", err, fields(path = %path.display()))]
pub(super) fn load_edges(path: &Path) -> Result<Vec<TextEdge>, CliError> {
    Ok(read_edge_list::<f64>(path)?)
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "data_source".to_owned())
}

/// Renders `summary` to `writer` as plain text.
///
/// Accepted edges are written one per line as `weight\tsource\ttarget`; a
/// clustering additionally lists each cluster as `root\tmember member ...`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "edges: {}", summary.edges_read)?;
    writeln!(writer, "total weight: {}", summary.outcome.total_weight())?;
    writeln!(writer, "accepted: {}", summary.outcome.edges().len())?;
    for edge in summary.outcome.edges() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            edge.weight(),
            edge.source(),
            edge.target()
        )?;
    }

    if let Outcome::Clusters(clustering) = &summary.outcome {
        writeln!(writer, "clusters: {}", clustering.cluster_count())?;
        for (root, members) in clustering.clusters() {
            let members: Vec<&str> = members.iter().map(String::as_str).collect();
            writeln!(writer, "{root}\t{}", members.join(" "))?;
        }
    }
    Ok(())
}
