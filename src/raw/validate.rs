use smallvec::SmallVec;

use super::handle::Handle;
use super::node::Side;
use super::raw_rb_tree::RawRBTree;
use crate::InvariantViolation;

// Red-black height is at most 2 * log2(n + 1), so this never spills for any
// tree a `u32` handle can address.
type Stack = SmallVec<[Handle; 64]>;

impl<K: Ord> RawRBTree<K> {
    /// Checks every structural invariant and returns the root's black-height.
    ///
    /// The sentinel counts as the single black node at the bottom of every
    /// path, so an empty tree has black-height 0 and a lone root has 1.
    pub(crate) fn validate(&self) -> Result<usize, InvariantViolation> {
        let root = self.root();
        if !root.is_nil() {
            if self.color(root).is_red() {
                return Err(InvariantViolation::RedRoot);
            }
            if !self.parent(root).is_nil() {
                return Err(InvariantViolation::RootHasParent);
            }
        }

        let reachable = self.check_order()?;
        if reachable != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len(),
                reachable,
            });
        }

        self.black_height(root)
    }

    /// Walks the tree in order, checking keys strictly increase and children
    /// link back to their parents. Returns the number of nodes visited.
    fn check_order(&self) -> Result<usize, InvariantViolation> {
        let mut stack = Stack::new();
        let mut current = self.root();
        let mut previous: Option<&K> = None;
        let mut position = 0;

        loop {
            while !current.is_nil() {
                stack.push(current);
                current = self.child(current, Side::Left);
            }
            let Some(handle) = stack.pop() else {
                return Ok(position);
            };

            for side in [Side::Left, Side::Right] {
                let child = self.child(handle, side);
                if !child.is_nil() && self.parent(child) != handle {
                    return Err(InvariantViolation::BrokenParentLink {
                        node: child.to_index(),
                    });
                }
            }

            let key = self.node(handle).key();
            if previous.is_some_and(|previous| previous >= key) {
                return Err(InvariantViolation::OutOfOrder { position });
            }
            previous = Some(key);
            position += 1;

            current = self.child(handle, Side::Right);
        }
    }

    fn black_height(&self, handle: Handle) -> Result<usize, InvariantViolation> {
        if handle.is_nil() {
            return Ok(0);
        }

        let left = self.child(handle, Side::Left);
        let right = self.child(handle, Side::Right);
        let red = self.color(handle).is_red();
        if red && (self.color(left).is_red() || self.color(right).is_red()) {
            return Err(InvariantViolation::RedRed {
                node: handle.to_index(),
            });
        }

        let left_height = self.black_height(left)?;
        let right_height = self.black_height(right)?;
        if left_height != right_height {
            return Err(InvariantViolation::BlackHeight {
                node: handle.to_index(),
                left: left_height,
                right: right_height,
            });
        }

        Ok(left_height + usize::from(!red))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::Color;

    fn build(keys: &[i32]) -> RawRBTree<i32> {
        let mut tree = RawRBTree::new();
        for &key in keys {
            tree.insert(key);
        }
        tree
    }

    #[test]
    fn empty_tree_has_zero_black_height() {
        let tree: RawRBTree<i32> = RawRBTree::new();
        assert_eq!(tree.validate(), Ok(0));
    }

    #[test]
    fn lone_root_has_black_height_one() {
        assert_eq!(build(&[1]).validate(), Ok(1));
    }

    #[test]
    fn perfect_black_tree() {
        // Seven ascending keys leave two black nodes on every downward path.
        let tree = build(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.validate(), Ok(2));
    }

    #[test]
    fn detects_red_root() {
        let mut tree = build(&[1, 2]);
        let root = tree.root();
        tree.rotate(root, Side::Left);
        // The red child is now the root.
        assert_eq!(tree.color(tree.root()), Color::Red);
        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn detects_black_height_mismatch() {
        // 2 is black over black 1 and black 3, with 4 hanging red off 3.
        let mut tree = build(&[2, 1, 3, 4]);
        let three = tree.search(&3);
        let four = tree.search(&4);
        tree.rotate(three, Side::Left);

        // Red 4 now carries black 3 on its left and nothing on its right.
        assert_eq!(
            tree.validate(),
            Err(InvariantViolation::BlackHeight {
                node: four.to_index(),
                left: 1,
                right: 0,
            })
        );
    }
}
