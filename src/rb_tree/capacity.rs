use super::RBTree;
use crate::raw::RawRBTree;

impl<K> RBTree<K> {
    /// Creates an empty tree with room for at least `capacity` keys before the
    /// node arena has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let tree: RBTree<i32> = RBTree::with_capacity(32);
    /// assert!(tree.is_empty());
    /// assert!(tree.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RBTree {
            raw: RawRBTree::with_capacity(capacity),
        }
    }

    /// Returns how many keys the tree can hold without growing its node arena.
    ///
    /// Slots freed by deletions are reused before the arena grows.
    ///
    /// # Examples
    ///
    /// ```
    /// use akai_tree::RBTree;
    ///
    /// let mut tree = RBTree::with_capacity(4);
    /// let capacity = tree.capacity();
    /// tree.extend([1, 2, 3, 4]);
    /// tree.delete(&2);
    /// tree.insert(5);
    /// assert_eq!(tree.capacity(), capacity);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
