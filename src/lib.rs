//! An arena-backed red-black search tree for Rust.
//!
//! This crate provides [`RBTree`], an ordered set that keeps itself balanced
//! with the classic red-black rules, so that insertion, lookup and deletion all
//! run in worst-case O(log n):
//!
//! - [`insert`](RBTree::insert) - Add a key; equal keys are rejected, not replaced
//! - [`search`](RBTree::search) - Find the node holding a key
//! - [`delete`](RBTree::delete) - Remove a key; absent keys are a no-op
//! - [`root`](RBTree::root) - Read-only [`NodeRef`] navigation for code built on top
//!
//! # Example
//!
//! ```
//! use akai_tree::{Color, RBTree};
//!
//! let mut tree = RBTree::new();
//! for key in [20, 12, 15, 8, 23, 45, 24, 61, 32, 4] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.len(), 10);
//!
//! // The root is always black.
//! assert_eq!(tree.root().color(), Color::Black);
//!
//! // Lookups hand back a node you can navigate from.
//! let node = tree.search(&24).unwrap();
//! assert_eq!(node.key(), Some(&24));
//!
//! tree.delete(&24);
//! assert!(tree.search(&24).is_none());
//!
//! // The red-black invariants can be checked at any time.
//! assert!(tree.validate().is_ok());
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **No per-node allocation** - Nodes live in one arena and link by index
//! - **Single sentinel** - One shared black "nil" marks every missing child
//!
//! # Implementation
//!
//! Each node stores its key, its color and three arena indices: parent, left
//! and right. A reserved index is the sentinel, so color lookups and child
//! links never need an `Option`. Insertion and deletion do a plain
//! binary-search-tree change and then walk upward recoloring and rotating;
//! every mirrored left/right case is written once against a side parameter.
//!
//! The crate logs rotations and fixup steps through the [`log`] facade at
//! `trace` level. Install any logger to see them.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod color;
mod error;
mod node_ref;
mod raw;

pub mod rb_tree;

pub use color::Color;
pub use error::InvariantViolation;
pub use node_ref::NodeRef;
pub use rb_tree::RBTree;
