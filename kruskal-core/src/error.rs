//! Error types for the Kruskal core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] lookups.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The vertex was never registered with `make_set`.
    #[error("vertex {vertex} is not registered in the disjoint set")]
    UnknownVertex {
        /// Debug rendering of the missing vertex.
        vertex: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The vertex was never registered with `make_set`.
        UnknownVertex => UnknownVertex { .. } => "DISJOINT_SET_UNKNOWN_VERTEX",
    }
}

/// Error type produced by [`crate::minimum_spanning_tree`],
/// [`crate::clustering`] and the [`crate::Kruskal`] runner.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KruskalError {
    /// The requested number of clusters must be at least one.
    #[error("cluster_count must be at least 1 (got {got})")]
    InvalidClusterCount {
        /// The invalid cluster count supplied by the caller.
        got: usize,
    },
    /// More clusters were requested than the graph has vertices.
    #[error("requested {requested} clusters but the graph only has {vertices} vertices")]
    ClusterCountExceedsVertices {
        /// Cluster count supplied by the caller.
        requested: usize,
        /// Number of distinct vertices found in the edge collection.
        vertices: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge at position {position} has a non-finite weight")]
    NonFiniteWeight {
        /// Zero-based position of the edge in the caller's input.
        position: usize,
    },
    /// A vertex was looked up before being registered. This indicates a logic
    /// error: every endpoint is registered from the same edge collection.
    #[error("union-find invariant violated: {source}")]
    UnknownVertex {
        #[source]
        /// Underlying disjoint-set lookup failure.
        source: DisjointSetError,
    },
}

impl From<DisjointSetError> for KruskalError {
    fn from(source: DisjointSetError) -> Self {
        Self::UnknownVertex { source }
    }
}

define_error_codes! {
    /// Stable codes describing [`KruskalError`] variants.
    enum KruskalErrorCode for KruskalError {
        /// The requested number of clusters must be at least one.
        InvalidClusterCount => InvalidClusterCount { .. } => "KRUSKAL_INVALID_CLUSTER_COUNT",
        /// More clusters were requested than the graph has vertices.
        ClusterCountExceedsVertices => ClusterCountExceedsVertices { .. } =>
            "KRUSKAL_CLUSTER_COUNT_EXCEEDS_VERTICES",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "KRUSKAL_NON_FINITE_WEIGHT",
        /// A vertex was looked up before being registered.
        UnknownVertex => UnknownVertex { .. } => "KRUSKAL_UNKNOWN_VERTEX",
    }
}

/// An error produced while reading a textual edge list.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list from `{path}`: {source}")]
    Io {
        /// Path of the edge list, or `<reader>` for in-memory sources.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line did not contain exactly `weight source target`.
    #[error("line {line}: expected 3 fields (weight, source, target) but found {fields}")]
    InvalidEdgeFormat {
        /// One-based line number.
        line: usize,
        /// Number of fields found on the line.
        fields: usize,
    },
    /// The weight field could not be parsed.
    #[error("line {line}: invalid weight `{value}`")]
    InvalidWeight {
        /// One-based line number.
        line: usize,
        /// Raw weight text.
        value: String,
    },
    /// The input contained no edges.
    #[error("edge list contains no edges")]
    EmptyInput,
}

define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// Reading from the underlying source failed.
        Io => Io { .. } => "EDGE_LIST_IO",
        /// A line did not contain exactly `weight source target`.
        InvalidEdgeFormat => InvalidEdgeFormat { .. } => "EDGE_LIST_INVALID_EDGE_FORMAT",
        /// The weight field could not be parsed.
        InvalidWeight => InvalidWeight { .. } => "EDGE_LIST_INVALID_WEIGHT",
        /// The input contained no edges.
        EmptyInput => EmptyInput => "EDGE_LIST_EMPTY",
    }
}

impl KruskalError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in
    /// a [`crate::DisjointSet`] lookup.
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::UnknownVertex { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KruskalError>;
