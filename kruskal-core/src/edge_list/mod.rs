//! Reader for textual edge lists.
//!
//! Each non-blank line holds one edge as `weight source target`, separated by
//! whitespace or commas. Lines starting with `#` are comments. Every edge
//! must have exactly three fields; anything else is rejected before a single
//! edge reaches the algorithms.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::{debug, instrument};

use crate::{
    edge::{Edge, Weight},
    error::EdgeListError,
};

const READER_PATH: &str = "<reader>";

/// Parses an edge list from `reader`.
///
/// # Errors
/// Returns [`EdgeListError::InvalidEdgeFormat`] for lines without exactly three
/// fields, [`EdgeListError::InvalidWeight`] when the weight does not parse,
/// [`EdgeListError::Io`] when reading fails and
/// [`EdgeListError::EmptyInput`] when no edge is found.
///
/// # Examples
/// ```
/// use kruskal_core::parse_edge_list;
///
/// let edges = parse_edge_list::<u32>("# weight source target\n1 a b\n2,b,c\n".as_bytes())?;
/// assert_eq!(edges.len(), 2);
/// assert_eq!(edges[1].target(), "c");
/// # Ok::<(), kruskal_core::EdgeListError>(())
/// ```
pub fn parse_edge_list<W>(reader: impl BufRead) -> Result<Vec<Edge<W, String>>, EdgeListError>
where
    W: Weight + FromStr,
{
    parse_lines(reader, Path::new(READER_PATH))
}

/// Reads and parses the edge list stored at `path`.
///
/// # Errors
/// Returns [`EdgeListError::Io`] when the file cannot be opened or read, and
/// the same format errors as [`parse_edge_list`].
#[instrument(name = "core.read_edge_list", level = "debug", err, fields(path = %path.display()))]
pub fn read_edge_list<W>(path: &Path) -> Result<Vec<Edge<W, String>>, EdgeListError>
where
    W: Weight + FromStr,
{
    let file = File::open(path).map_err(|source| EdgeListError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lines(BufReader::new(file), path)
}

fn parse_lines<W>(reader: impl BufRead, path: &Path) -> Result<Vec<Edge<W, String>>, EdgeListError>
where
    W: Weight + FromStr,
{
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| EdgeListError::Io {
            path: PathBuf::from(path),
            source,
        })?;
        if let Some(edge) = parse_line(&line, index.saturating_add(1))? {
            edges.push(edge);
        }
    }

    if edges.is_empty() {
        return Err(EdgeListError::EmptyInput);
    }
    debug!(edges = edges.len(), "edge list parsed");
    Ok(edges)
}

fn parse_line<W>(line: &str, line_number: usize) -> Result<Option<Edge<W, String>>, EdgeListError>
where
    W: Weight + FromStr,
{
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .collect();
    let [weight, source, target] = fields.as_slice() else {
        return Err(EdgeListError::InvalidEdgeFormat {
            line: line_number,
            fields: fields.len(),
        });
    };

    let weight = weight
        .parse::<W>()
        .map_err(|_| EdgeListError::InvalidWeight {
            line: line_number,
            value: (*weight).to_owned(),
        })?;
    Ok(Some(Edge::new(
        weight,
        (*source).to_owned(),
        (*target).to_owned(),
    )))
}
