use core::borrow::Borrow;
use core::cmp::Ordering;

use log::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::Color;

/// The core red-black tree backing `RBTree`.
///
/// Nodes live in an arena and link to each other by [`Handle`]. Every absent
/// child, the root's parent, and the root of an empty tree is [`Handle::NIL`]:
/// the sentinel. It reads as black, has no key, and owns one writable field,
/// `nil_parent`, which deletion uses to remember where a removed leaf sat.
pub(crate) struct RawRBTree<K> {
    /// Arena storing all real nodes.
    nodes: Arena<Node<K>>,
    /// Root node, or `Handle::NIL` when empty.
    root: Handle,
    /// Parent slot of the sentinel. Only meaningful during a deletion.
    nil_parent: Handle,
    /// Number of keys stored.
    len: usize,
}

impl<K: Clone> Clone for RawRBTree<K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            nil_parent: Handle::NIL,
            len: self.len,
        }
    }
}

impl<K> RawRBTree<K> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: Handle::NIL,
            nil_parent: Handle::NIL,
            len: 0,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: Handle::NIL,
            nil_parent: Handle::NIL,
            len: 0,
        }
    }

    /// Returns the number of keys in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no keys.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Drops every node and resets the sentinel.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = Handle::NIL;
        self.nil_parent = Handle::NIL;
        self.len = 0;
    }

    pub(crate) fn root(&self) -> Handle {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K> {
        self.nodes.get(handle)
    }

    /// Returns the key at `handle`, or `None` for the sentinel.
    pub(crate) fn key(&self, handle: Handle) -> Option<&K> {
        if handle.is_nil() { None } else { Some(self.nodes.get(handle).key()) }
    }

    // ─── Sentinel-aware link accessors ──────────────────────────────────────

    #[inline]
    pub(crate) fn color(&self, handle: Handle) -> Color {
        if handle.is_nil() { Color::Black } else { self.nodes.get(handle).color() }
    }

    #[inline]
    fn is_red(&self, handle: Handle) -> bool {
        self.color(handle).is_red()
    }

    #[inline]
    fn set_color(&mut self, handle: Handle, color: Color) {
        if handle.is_nil() {
            assert!(color.is_black(), "`RawRBTree::set_color()` - the sentinel cannot be colored red!");
        } else {
            self.nodes.get_mut(handle).set_color(color);
        }
    }

    #[inline]
    pub(crate) fn parent(&self, handle: Handle) -> Handle {
        if handle.is_nil() { self.nil_parent } else { self.nodes.get(handle).parent() }
    }

    #[inline]
    fn set_parent(&mut self, handle: Handle, parent: Handle) {
        if handle.is_nil() {
            self.nil_parent = parent;
        } else {
            self.nodes.get_mut(handle).set_parent(parent);
        }
    }

    #[inline]
    pub(crate) fn child(&self, handle: Handle, side: Side) -> Handle {
        if handle.is_nil() { Handle::NIL } else { self.nodes.get(handle).child(side) }
    }

    #[inline]
    fn set_child(&mut self, handle: Handle, side: Side, child: Handle) {
        assert!(!handle.is_nil(), "`RawRBTree::set_child()` - the sentinel has no child slots!");
        self.nodes.get_mut(handle).set_child(side, child);
    }

    /// Which side of its parent `handle` hangs on.
    ///
    /// For the sentinel this relies on its sibling being real, which holds
    /// wherever deletion asks.
    fn side_of(&self, handle: Handle) -> Side {
        let parent = self.parent(handle);
        if self.child(parent, Side::Left) == handle { Side::Left } else { Side::Right }
    }

    /// Points whatever held `old` (a parent's child slot, or the root) at `new`.
    fn replace_in_parent(&mut self, old: Handle, new: Handle) {
        let parent = self.parent(old);
        if parent.is_nil() {
            self.root = new;
        } else {
            let side = self.side_of(old);
            self.set_child(parent, side, new);
        }
    }

    /// Returns the node at the far end of `side` below `handle`.
    pub(crate) fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        loop {
            let next = self.child(handle, side);
            if next.is_nil() {
                return handle;
            }
            handle = next;
        }
    }

    // ─── Rotations ──────────────────────────────────────────────────────────

    /// Rotates `pivot` down towards `side`, lifting its child on the opposite
    /// side into its place.
    ///
    /// ```text
    ///       P                  P
    ///       |                  |
    ///     pivot      =>        up          (side = Left)
    ///     /   \              /    \
    ///    a    up          pivot    c
    ///        /  \         /   \
    ///     inner  c       a   inner
    /// ```
    pub(crate) fn rotate(&mut self, pivot: Handle, side: Side) {
        let lift = side.opposite();
        let up = self.child(pivot, lift);
        assert!(!up.is_nil(), "`RawRBTree::rotate()` - pivot has no child to lift!");
        trace!("rotate {side:?} around {pivot:?}, lifting {up:?}");

        let inner = self.child(up, side);
        self.set_child(pivot, lift, inner);
        if !inner.is_nil() {
            self.set_parent(inner, pivot);
        }

        let parent = self.parent(pivot);
        self.set_parent(up, parent);
        self.replace_in_parent(pivot, up);

        self.set_child(up, side, pivot);
        self.set_parent(pivot, up);
    }
}

impl<K: Ord> RawRBTree<K> {
    /// Returns the node holding `key`, or `Handle::NIL`.
    pub(crate) fn search<Q>(&self, key: &Q) -> Handle
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while !current.is_nil() {
            let node = self.nodes.get(current);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.child(Side::Left),
                Ordering::Greater => node.child(Side::Right),
                Ordering::Equal => return current,
            };
        }
        Handle::NIL
    }

    /// Inserts `key`, returning `false` and leaving the tree untouched if an
    /// equal key is already present.
    pub(crate) fn insert(&mut self, key: K) -> bool {
        let mut parent = Handle::NIL;
        let mut side = Side::Left;
        let mut current = self.root;

        while !current.is_nil() {
            let node = self.nodes.get(current);
            side = match key.cmp(node.key()) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    debug!("insert: key already present at {current:?}, ignoring");
                    return false;
                }
            };
            parent = current;
            current = node.child(side);
        }

        let inserted = self.nodes.alloc(Node::new(key, parent));
        if parent.is_nil() {
            self.root = inserted;
        } else {
            self.set_child(parent, side, inserted);
        }
        self.len += 1;

        self.insert_fixup(inserted);
        true
    }

    /// Restores "no red node has a red child" after attaching the red leaf `node`.
    fn insert_fixup(&mut self, mut node: Handle) {
        while self.is_red(self.parent(node)) {
            // A red parent is never the root, so the grandparent is real.
            let parent = self.parent(node);
            let grandparent = self.parent(parent);
            let side = self.side_of(parent);
            let uncle = self.child(grandparent, side.opposite());

            if self.is_red(uncle) {
                trace!("insert fixup: red uncle {uncle:?}, recoloring {grandparent:?}");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            if self.side_of(node) != side {
                trace!("insert fixup: inner child {node:?}, rotating parent {parent:?}");
                node = parent;
                self.rotate(node, side);
            }

            let parent = self.parent(node);
            let grandparent = self.parent(parent);
            trace!("insert fixup: outer child {node:?}, rotating grandparent {grandparent:?}");
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Removes the node holding `key` and returns the key, or `None` if absent.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let target = self.search(key);
        if target.is_nil() {
            return None;
        }

        // `spliced` is the node that physically leaves the tree: `target` itself
        // when it has a free child slot, otherwise its in-order successor.
        let spliced = if self.child(target, Side::Left).is_nil() || self.child(target, Side::Right).is_nil() {
            target
        } else {
            self.extreme(self.child(target, Side::Right), Side::Left)
        };

        let left = self.child(spliced, Side::Left);
        let replacement = if left.is_nil() { self.child(spliced, Side::Right) } else { left };

        // The replacement may be the sentinel, whose parent slot then marks the gap.
        let parent = self.parent(spliced);
        self.set_parent(replacement, parent);
        self.replace_in_parent(spliced, replacement);

        let removed = self.nodes.take(spliced);
        self.len -= 1;
        debug_assert_eq!(self.len, self.nodes.len(), "`RawRBTree::remove()` - length out of sync with arena!");
        let removed_color = removed.color();

        let key = if spliced == target {
            removed.into_key()
        } else {
            self.nodes.get_mut(target).replace_key(removed.into_key())
        };

        if removed_color.is_black() {
            self.delete_fixup(replacement);
        }
        self.nil_parent = Handle::NIL;

        Some(key)
    }

    /// Restores equal black-heights after a black node was spliced out above
    /// `node`, which carries the missing black.
    fn delete_fixup(&mut self, mut node: Handle) {
        while node != self.root && !self.is_red(node) {
            let parent = self.parent(node);
            let side = self.side_of(node);
            let far = side.opposite();

            let mut sibling = self.child(parent, far);
            assert!(
                !sibling.is_nil(),
                "`RawRBTree::delete_fixup()` - doubly-black node {node:?} has no sibling!"
            );

            if self.is_red(sibling) {
                trace!("delete fixup: red sibling {sibling:?}, rotating {parent:?}");
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                self.rotate(parent, side);
                sibling = self.child(parent, far);
            }

            let near_red = self.is_red(self.child(sibling, side));
            let far_red = self.is_red(self.child(sibling, far));

            if !near_red && !far_red {
                trace!("delete fixup: black nephews, pushing deficiency up to {parent:?}");
                self.set_color(sibling, Color::Red);
                node = parent;
                continue;
            }

            if !far_red {
                trace!("delete fixup: red near nephew, rotating sibling {sibling:?}");
                let near = self.child(sibling, side);
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                self.rotate(sibling, far);
                sibling = self.child(parent, far);
            }

            trace!("delete fixup: red far nephew, rotating {parent:?}");
            let parent_color = self.color(parent);
            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            let far_nephew = self.child(sibling, far);
            self.set_color(far_nephew, Color::Black);
            self.rotate(parent, side);
            node = self.root;
        }

        self.set_color(node, Color::Black);
    }
}
