//! Union-find (disjoint set union) keyed by arbitrary vertex identifiers.
//!
//! Besides the usual parent and rank maps, every root carries the full set of
//! vertices in its component. The membership map always has exactly one entry
//! per current root, so cluster membership can be reported without rescanning
//! the graph once merging stops.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{edge::Vertex, error::DisjointSetError};

/// Outcome of a union that actually merged two components.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Union<V> {
    /// Root of the merged component.
    pub survivor: V,
    /// Former root that now points at `survivor`.
    pub absorbed: V,
}

/// Disjoint-set forest with union by rank, path compression and per-root
/// membership sets.
///
/// # Examples
/// ```
/// use kruskal_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// for vertex in ["a", "b", "c"] {
///     set.make_set(vertex);
/// }
/// let merged = set.union(&"a", &"b")?.expect("a and b start apart");
/// assert_eq!(set.find(&"a")?, merged.survivor);
/// assert_eq!(set.component_count(), 2);
/// # Ok::<(), kruskal_core::DisjointSetError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<V> {
    parent: HashMap<V, V>,
    rank: HashMap<V, u32>,
    members: HashMap<V, BTreeSet<V>>,
}

impl<V: Vertex> Default for DisjointSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> DisjointSet<V> {
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty disjoint set with room for `capacity` vertices.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: HashMap::with_capacity(capacity),
            rank: HashMap::with_capacity(capacity),
            members: HashMap::with_capacity(capacity),
        }
    }

    /// Registers `vertex` as a singleton component.
    ///
    /// Returns `false` and leaves the structure untouched when the vertex is
    /// already present.
    pub fn make_set(&mut self, vertex: V) -> bool {
        if self.parent.contains_key(&vertex) {
            return false;
        }
        self.parent.insert(vertex.clone(), vertex.clone());
        self.rank.insert(vertex.clone(), 0);
        self.members.insert(vertex.clone(), BTreeSet::from([vertex]));
        true
    }

    /// Returns the representative of `vertex`'s component.
    ///
    /// Every vertex visited on the way is repointed directly at the root.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownVertex`] when `vertex` was never
    /// registered.
    pub fn find(&mut self, vertex: &V) -> Result<V, DisjointSetError> {
        let mut root = self.parent_of(vertex)?.clone();
        loop {
            let next = self.parent_of(&root)?;
            if *next == root {
                break;
            }
            root = next.clone();
        }

        let mut node = vertex.clone();
        while node != root {
            let Some(parent) = self.parent.get_mut(&node) else {
                return Err(unknown_vertex(&node));
            };
            let next = std::mem::replace(parent, root.clone());
            node = next;
        }

        Ok(root)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// The root with the lower rank is attached under the other one. On equal
    /// ranks the root of `left` is attached under the root of `right`, whose
    /// rank then grows by one. The absorbed component's members move into the
    /// survivor's set. Returns `None` when both vertices already share a
    /// component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownVertex`] when either vertex was never
    /// registered.
    pub fn union(&mut self, left: &V, right: &V) -> Result<Option<Union<V>>, DisjointSetError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(None);
        }

        let left_rank = self.rank_of(&left_root)?;
        let right_rank = self.rank_of(&right_root)?;
        let (survivor, absorbed) = if left_rank > right_rank {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };

        self.parent.insert(absorbed.clone(), survivor.clone());
        if left_rank == right_rank {
            self.rank.insert(survivor.clone(), right_rank.saturating_add(1));
        }
        self.merge_members(&survivor, &absorbed)?;

        Ok(Some(Union { survivor, absorbed }))
    }

    /// Returns `true` when `left` and `right` share a component.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::UnknownVertex`] when either vertex was never
    /// registered.
    pub fn connected(&mut self, left: &V, right: &V) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns `true` when `vertex` has been registered.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.parent.contains_key(vertex)
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no vertex has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.members.len()
    }

    /// Returns the members of the component rooted at `root`, or `None` when
    /// `root` is not currently a root.
    #[must_use]
    pub fn members(&self, root: &V) -> Option<&BTreeSet<V>> {
        self.members.get(root)
    }

    /// Iterates over `(root, members)` pairs in unspecified order.
    pub fn components(&self) -> impl Iterator<Item = (&V, &BTreeSet<V>)> {
        self.members.iter()
    }

    /// Consumes the structure and returns the components keyed by root.
    #[must_use]
    pub fn into_components(self) -> BTreeMap<V, BTreeSet<V>> {
        self.members.into_iter().collect()
    }

    fn parent_of(&self, vertex: &V) -> Result<&V, DisjointSetError> {
        self.parent.get(vertex).ok_or_else(|| unknown_vertex(vertex))
    }

    fn rank_of(&self, root: &V) -> Result<u32, DisjointSetError> {
        self.rank
            .get(root)
            .copied()
            .ok_or_else(|| unknown_vertex(root))
    }

    fn merge_members(&mut self, survivor: &V, absorbed: &V) -> Result<(), DisjointSetError> {
        let mut moved = self
            .members
            .remove(absorbed)
            .ok_or_else(|| unknown_vertex(absorbed))?;
        let target = self
            .members
            .get_mut(survivor)
            .ok_or_else(|| unknown_vertex(survivor))?;
        // Append the smaller set into the larger one.
        if moved.len() > target.len() {
            std::mem::swap(target, &mut moved);
        }
        target.append(&mut moved);
        Ok(())
    }
}

fn unknown_vertex<V: Vertex>(vertex: &V) -> DisjointSetError {
    DisjointSetError::UnknownVertex {
        vertex: format!("{vertex:?}"),
    }
}
