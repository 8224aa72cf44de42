use core::mem;

use super::handle::Handle;
use crate::Color;

/// Which child slot of a node. Every mirrored pair of cases in the rebalancing
/// code is written once against a `Side` and its [`opposite`](Side::opposite).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// Links are `Handle::NIL` where there is no node, never dangling.
#[derive(Clone)]
pub(crate) struct Node<K> {
    key: K,
    color: Color,
    parent: Handle,
    left: Handle,
    right: Handle,
}

impl<K> Node<K> {
    /// Creates a red leaf hanging under `parent`.
    pub(crate) fn new(key: K, parent: Handle) -> Self {
        Self {
            key,
            color: Color::Red,
            parent,
            left: Handle::NIL,
            right: Handle::NIL,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    /// Swaps in a new key, returning the old one.
    pub(crate) fn replace_key(&mut self, key: K) -> K {
        mem::replace(&mut self.key, key)
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub(crate) fn parent(&self) -> Handle {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Handle) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Handle {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, side: Side, child: Handle) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }
}
