use core::borrow::Borrow;
use core::fmt;

use crate::raw::{RawRBTree, Side};
use crate::{InvariantViolation, NodeRef};

mod capacity;

/// An ordered set based on a [red-black tree].
///
/// Keys must implement [`Ord`]; each key is stored at most once. Inserting,
/// finding and deleting a key each take worst-case O(log n) time, because the
/// tree keeps every root-to-leaf path within a factor of two of every other.
///
/// Nodes live in an arena owned by the tree and refer to one another by index,
/// so there are no per-node allocations after the arena has grown and no
/// reference-counted parent pointers. A single sentinel stands in for every
/// missing child; read-only traversal through [`root`](RBTree::root) and
/// [`NodeRef`] sees it as a black node with no key.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the tree. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `RBTree` that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use akai_tree::RBTree;
///
/// let mut primes = RBTree::new();
///
/// primes.insert(7);
/// primes.insert(2);
/// primes.insert(5);
/// primes.insert(3);
///
/// // Equal keys are ignored.
/// assert!(!primes.insert(5));
/// assert_eq!(primes.len(), 4);
///
/// assert!(primes.contains(&3));
/// assert!(!primes.contains(&4));
///
/// primes.delete(&7);
/// assert_eq!(primes.last(), Some(&5));
/// ```
///
/// [red-black tree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
pub struct RBTree<K> {
    raw: RawRBTree<K>,
}

impl<K> RBTree<K> {
    /// Makes a new, empty `RBTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let tree: RBTree<i32> = RBTree::new();
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> RBTree<K> {
        RBTree { raw: RawRBTree::new() }
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let mut tree = RBTree::from([1, 2, 3]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_nil());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns the number of keys in the tree. Same as [`len`](RBTree::len).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the root of the tree for read-only traversal.
    ///
    /// For an empty tree this is the sentinel; see [`NodeRef::is_nil`].
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::{Color, RBTree};
    ///
    /// let mut tree = RBTree::new();
    /// assert!(tree.root().is_nil());
    ///
    /// tree.insert(10);
    /// tree.insert(20);
    /// assert_eq!(tree.root().key(), Some(&10));
    /// assert_eq!(tree.root().color(), Color::Black);
    /// assert_eq!(tree.root().right().color(), Color::Red);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn root(&self) -> NodeRef<'_, K> {
        NodeRef::new(&self.raw, self.raw.root())
    }

    /// Returns the smallest key in the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// assert_eq!(tree.first(), None);
    /// tree.insert(2);
    /// tree.insert(1);
    /// assert_eq!(tree.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.edge(Side::Left)
    }

    /// Returns the largest key in the tree, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    /// assert_eq!(tree.last(), None);
    /// tree.insert(1);
    /// tree.insert(2);
    /// assert_eq!(tree.last(), Some(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.edge(Side::Right)
    }

    fn edge(&self, side: Side) -> Option<&K> {
        let root = self.raw.root();
        if root.is_nil() {
            return None;
        }
        self.raw.key(self.raw.extreme(root, side))
    }
}

impl<K: Ord> RBTree<K> {
    /// Adds a key to the tree.
    ///
    /// Returns whether the key was newly inserted. That is:
    ///
    /// - If the tree did not previously contain an equal key, `true` is returned.
    /// - If the tree already contained an equal key, `false` is returned, and the
    ///   tree is not modified: the stored key is kept and `key` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let mut tree = RBTree::new();
    ///
    /// assert_eq!(tree.insert(4), true);
    /// assert_eq!(tree.insert(4), false);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, key: K) -> bool {
        self.raw.insert(key)
    }

    /// Returns the node holding a key equal to `key`, if any.
    ///
    /// The key may be any borrowed form of the tree's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let tree = RBTree::from([20, 12, 15]);
    ///
    /// let node = tree.search(&12).unwrap();
    /// assert_eq!(node.key(), Some(&12));
    /// assert_eq!(node.parent().key(), Some(&15));
    ///
    /// assert!(tree.search(&99).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        NodeRef::new(&self.raw, self.raw.search(key)).non_nil()
    }

    /// Returns `true` if the tree contains a key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let tree = RBTree::from([1, 2, 3]);
    /// assert_eq!(tree.contains(&1), true);
    /// assert_eq!(tree.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        !self.raw.search(key).is_nil()
    }

    /// Returns a reference to the stored key equal to `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let tree = RBTree::from([String::from("apple"), String::from("pear")]);
    /// assert_eq!(tree.get("pear").map(String::as_str), Some("pear"));
    /// assert_eq!(tree.get("plum"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.key(self.raw.search(key))
    }

    /// Removes the key equal to `key` from the tree. Returns whether such a key
    /// was present; deleting an absent key leaves the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let mut tree = RBTree::from([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), true);
    /// assert_eq!(tree.delete(&2), false);
    /// assert_eq!(tree.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key).is_some()
    }

    /// Removes and returns the stored key equal to `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let mut tree = RBTree::from([String::from("fig")]);
    /// assert_eq!(tree.take("fig"), Some(String::from("fig")));
    /// assert_eq!(tree.take("fig"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Checks the red-black and search-tree invariants, returning the tree's
    /// black-height (black nodes on every path from the root down to the
    /// sentinel, counting the root itself).
    ///
    /// A tree only changed through this type's methods always validates; this
    /// exists for tests and for diagnostics in code built on [`NodeRef`].
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let tree: RBTree<u32> = (0..1000).collect();
    /// let black_height = tree.validate().unwrap();
    /// assert!((5..=10).contains(&black_height));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        self.raw.validate()
    }
}

impl<K: Clone> Clone for RBTree<K> {
    fn clone(&self) -> Self {
        RBTree { raw: self.raw.clone() }
    }
}

impl<K: fmt::Debug> fmt::Debug for RBTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RBTree").field("len", &self.len()).field("root", &self.root()).finish()
    }
}

impl<K> Default for RBTree<K> {
    fn default() -> Self {
        RBTree::new()
    }
}

impl<K: Ord> FromIterator<K> for RBTree<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut tree = RBTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for RBTree<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K: Ord + Copy + 'a> Extend<&'a K> for RBTree<K> {
    fn extend<T: IntoIterator<Item = &'a K>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied());
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for RBTree<K> {
    /// Builds a tree by inserting the array's keys in order.
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    fn in_order(node: NodeRef<'_, i32>, out: &mut Vec<i32>) {
        if let Some(&key) = node.key() {
            in_order(node.left(), out);
            out.push(key);
            in_order(node.right(), out);
        }
    }

    #[test]
    fn size_matches_len() {
        let tree = RBTree::from([3, 1, 2, 3]);
        assert_eq!(tree.size(), 3);
        assert_eq!(tree.size(), tree.len());
    }

    #[test]
    fn clone_is_independent() {
        let mut a = RBTree::from([1, 2, 3]);
        let b = a.clone();
        a.delete(&2);
        assert!(b.contains(&2));
        assert!(!a.contains(&2));
        assert_eq!(b.validate(), Ok(1));
        assert!(a.validate().is_ok());
    }

    #[test]
    fn extend_from_references() {
        let mut tree: RBTree<i32> = RBTree::new();
        tree.extend(&[5, 4, 5]);
        let mut keys = Vec::new();
        in_order(tree.root(), &mut keys);
        assert_eq!(keys, [4, 5]);
    }

    #[test]
    fn debug_shows_length_and_root() {
        let tree = RBTree::from([1]);
        assert_eq!(format!("{tree:?}"), "RBTree { len: 1, root: NodeRef { key: 1, color: Black } }");
        let empty: RBTree<i32> = RBTree::default();
        assert_eq!(format!("{empty:?}"), "RBTree { len: 0, root: Nil }");
    }

    #[test]
    fn root_parent_is_sentinel() {
        let tree = RBTree::from([1, 2, 3]);
        assert!(tree.root().parent().is_nil());
        assert_eq!(tree.root().left().parent(), tree.root());
    }
}
