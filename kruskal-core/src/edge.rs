//! Weighted undirected edges and the ordering Kruskal consumes them in.
//!
//! Edges are ordered by weight first and then by their endpoints, so two runs
//! over the same edge collection always process ties in the same order
//! regardless of how the caller iterated the input.

use std::{
    cmp::Ordering,
    collections::BTreeSet,
    fmt,
    hash::Hash,
    ops::Add,
};

/// Identifier for a graph vertex.
///
/// Implemented for every type that can serve as a map key and be sorted for
/// tie-breaking, such as `String`, `&str` or integers.
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + fmt::Debug {}

/// Numeric edge weight with a total order.
///
/// Floating-point weights are ordered with `total_cmp`; NaN and infinities
/// are rejected before any processing via [`Weight::is_finite`].
pub trait Weight: Copy + Default + PartialOrd + Add<Output = Self> + fmt::Debug {
    /// Compares two weights under a total order.
    fn total_order(&self, other: &Self) -> Ordering;

    /// Returns `false` for weights Kruskal cannot order meaningfully.
    fn is_finite(&self) -> bool;
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                fn total_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn is_finite(&self) -> bool {
                    true
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Weight for $ty {
                fn total_order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }

                fn is_finite(&self) -> bool {
                    <$ty>::is_finite(*self)
                }
            }
        )+
    };
}

impl_integer_weight!(i32, i64, u32, u64, usize);
impl_float_weight!(f32, f64);

/// A weighted undirected edge `(weight, source, target)`.
///
/// `(w, a, b)` and `(w, b, a)` describe the same connection but are kept as
/// distinct values; nothing canonicalises or deduplicates them.
#[derive(Clone, Debug)]
pub struct Edge<W, V> {
    weight: W,
    source: V,
    target: V,
}

impl<W: Weight, V: Vertex> Edge<W, V> {
    /// Creates an edge.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Edge;
    ///
    /// let edge = Edge::new(3, "a", "b");
    /// assert_eq!(edge.weight(), 3);
    /// assert_eq!(edge.endpoints(), (&"a", &"b"));
    /// ```
    #[must_use]
    pub fn new(weight: W, source: V, target: V) -> Self {
        Self {
            weight,
            source,
            target,
        }
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Returns the second endpoint as supplied.
    #[must_use]
    pub fn target(&self) -> &V {
        &self.target
    }

    /// Returns both endpoints.
    #[must_use]
    pub fn endpoints(&self) -> (&V, &V) {
        (&self.source, &self.target)
    }

    /// Splits the edge into its `(weight, source, target)` parts.
    #[must_use]
    pub fn into_parts(self) -> (W, V, V) {
        (self.weight, self.source, self.target)
    }
}

impl<W: Weight, V: Vertex> From<(W, V, V)> for Edge<W, V> {
    fn from((weight, source, target): (W, V, V)) -> Self {
        Self::new(weight, source, target)
    }
}

impl<W: Weight, V: Vertex> PartialEq for Edge<W, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight, V: Vertex> Eq for Edge<W, V> {}

impl<W: Weight, V: Vertex> Ord for Edge<W, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_order(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl<W: Weight, V: Vertex> PartialOrd for Edge<W, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight + fmt::Display, V: Vertex + fmt::Display> fmt::Display for Edge<W, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.weight, self.source, self.target)
    }
}

/// Returns the edges sorted ascending by weight, ties broken by endpoints.
///
/// The sort is stable, so exact duplicates keep their input order.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, sort_edges};
///
/// let sorted = sort_edges(vec![
///     Edge::new(2, 'b', 'c'),
///     Edge::new(1, 'c', 'd'),
///     Edge::new(2, 'a', 'd'),
/// ]);
/// let weights: Vec<_> = sorted
///     .iter()
///     .map(|edge| (edge.weight(), *edge.source()))
///     .collect();
/// assert_eq!(weights, vec![(1, 'c'), (2, 'a'), (2, 'b')]);
/// ```
#[must_use]
pub fn sort_edges<W: Weight, V: Vertex>(mut edges: Vec<Edge<W, V>>) -> Vec<Edge<W, V>> {
    edges.sort();
    edges
}

/// Returns every vertex referenced by `edges`, in ascending order.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, vertices};
///
/// let found = vertices(&[Edge::new(1, "b", "a"), Edge::new(2, "a", "c")]);
/// assert_eq!(found.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn vertices<'a, W, V>(edges: impl IntoIterator<Item = &'a Edge<W, V>>) -> BTreeSet<V>
where
    W: Weight + 'a,
    V: Vertex + 'a,
{
    edges
        .into_iter()
        .flat_map(|edge| [edge.source.clone(), edge.target.clone()])
        .collect()
}

/// Sums the weights of `edges`, starting from `W::default()`.
pub(crate) fn sum_weights<'a, W, V>(edges: impl IntoIterator<Item = &'a Edge<W, V>>) -> W
where
    W: Weight + 'a,
    V: Vertex + 'a,
{
    edges
        .into_iter()
        .fold(W::default(), |total, edge| total + edge.weight)
}

/// Collects `edges`, rejecting any non-finite weight.
pub(crate) fn collect_finite<W, V>(
    edges: impl IntoIterator<Item = Edge<W, V>>,
) -> crate::Result<Vec<Edge<W, V>>>
where
    W: Weight,
    V: Vertex,
{
    edges
        .into_iter()
        .enumerate()
        .map(|(position, edge)| {
            if edge.weight.is_finite() {
                Ok(edge)
            } else {
                Err(crate::KruskalError::NonFiniteWeight { position })
            }
        })
        .collect()
}
