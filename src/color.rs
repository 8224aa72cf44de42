/// The color of a node in an [`RBTree`](crate::RBTree).
///
/// The sentinel that stands in for every missing child is always
/// [`Black`](Color::Black).
///
/// # Examples
///
/// ```
/// use akai_tree::{Color, RBTree};
///
/// let mut tree = RBTree::new();
/// tree.insert(1);
///
/// assert_eq!(tree.root().color(), Color::Black);
/// assert_eq!(tree.root().left().color(), Color::Black); // the sentinel
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    /// A node whose children must both be black.
    Red,
    /// A node counted by the black-height rule. The root is always black.
    Black,
}

impl Color {
    /// Returns `true` for [`Color::Red`].
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    /// Returns `true` for [`Color::Black`].
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}
