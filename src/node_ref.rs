use core::fmt;
use core::ptr;

use crate::Color;
use crate::raw::{Handle, RawRBTree, Side};

/// A read-only view of one position in an [`RBTree`](crate::RBTree).
///
/// A `NodeRef` is either a real node, carrying a key, or the sentinel: the
/// shared black "no node" marker that stands in for every missing child, the
/// root's parent, and the root of an empty tree. Navigating off a node with
/// [`left`](NodeRef::left), [`right`](NodeRef::right) or
/// [`parent`](NodeRef::parent) always succeeds; check [`is_nil`](NodeRef::is_nil)
/// or [`key`](NodeRef::key) to see where you landed.
///
/// This is the hook for code layered on top of the tree (printers, serializers,
/// range walks). It borrows the tree, so the tree cannot change underneath it.
///
/// # Examples
///
/// ```
/// use akai_tree::{Color, RBTree};
///
/// let tree = RBTree::from([2, 1, 3]);
///
/// let root = tree.root();
/// assert_eq!(root.key(), Some(&2));
/// assert_eq!(root.left().key(), Some(&1));
/// assert_eq!(root.right().key(), Some(&3));
/// assert_eq!(root.left().parent(), root);
///
/// // Below a leaf is the sentinel.
/// let nil = root.left().left();
/// assert!(nil.is_nil());
/// assert_eq!(nil.key(), None);
/// assert_eq!(nil.color(), Color::Black);
/// ```
pub struct NodeRef<'a, K> {
    tree: &'a RawRBTree<K>,
    handle: Handle,
}

impl<'a, K> NodeRef<'a, K> {
    pub(crate) fn new(tree: &'a RawRBTree<K>, handle: Handle) -> Self {
        Self { tree, handle }
    }

    /// Returns `true` if this is the sentinel rather than a real node.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.handle.is_nil()
    }

    /// Returns the node's key, or `None` for the sentinel.
    #[must_use]
    pub fn key(&self) -> Option<&'a K> {
        self.tree.key(self.handle)
    }

    /// Returns the node's color. The sentinel is always [`Color::Black`].
    #[must_use]
    pub fn color(&self) -> Color {
        self.tree.color(self.handle)
    }

    /// Returns the left child, or the sentinel.
    #[must_use]
    pub fn left(&self) -> Self {
        self.step(self.tree.child(self.handle, Side::Left))
    }

    /// Returns the right child, or the sentinel.
    #[must_use]
    pub fn right(&self) -> Self {
        self.step(self.tree.child(self.handle, Side::Right))
    }

    /// Returns the parent, or the sentinel for the root.
    ///
    /// The sentinel's own parent is the sentinel.
    #[must_use]
    pub fn parent(&self) -> Self {
        if self.is_nil() {
            return *self;
        }
        self.step(self.tree.parent(self.handle))
    }

    /// Returns `Some(self)` for a real node and `None` for the sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let tree = RBTree::from([1]);
    /// assert!(tree.root().non_nil().is_some());
    /// assert!(tree.root().left().non_nil().is_none());
    /// ```
    #[must_use]
    pub fn non_nil(self) -> Option<Self> {
        if self.is_nil() { None } else { Some(self) }
    }

    fn step(&self, handle: Handle) -> Self {
        Self::new(self.tree, handle)
    }
}

impl<K> Clone for NodeRef<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for NodeRef<'_, K> {}

impl<K> PartialEq for NodeRef<'_, K> {
    /// Two refs are equal when they name the same position in the same tree.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.handle == other.handle
    }
}

impl<K> Eq for NodeRef<'_, K> {}

impl<K: fmt::Debug> fmt::Debug for NodeRef<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.key() {
            None => f.write_str("Nil"),
            Some(key) => f.debug_struct("NodeRef").field("key", key).field("color", &self.color()).finish(),
        }
    }
}
