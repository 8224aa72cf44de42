use core::fmt;
use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Index of a node in the arena, or the sentinel.
///
/// Stored off by one inside a `NonZero` so `Option<Handle>` costs nothing extra.
/// The largest raw value never names a slot and is reserved for [`Handle::NIL`].
#[derive(Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 2) as usize;

    /// The shared "no node" marker: every absent child, the root's parent,
    /// and the root of an empty tree.
    pub(crate) const NIL: Self = Self(NonZero::<RawHandle>::MAX);

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        // `index + 1` is never zero and never reaches the sentinel value.
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawHandle).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    #[inline]
    pub(crate) const fn is_nil(self) -> bool {
        self.0.get() == RawHandle::MAX
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            f.write_str("NIL")
        } else {
            write!(f, "#{}", self.to_index())
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::format;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Verify our assumptions about `Handle` and the niche optimization.
    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, RawHandle);

    #[test]
    #[should_panic(expected = "`Handle::from_index()` - `index` > `Handle::MAX`!")]
    fn invalid_handle() {
        let _ = Handle::from_index(Handle::MAX + 1);
    }

    #[test]
    fn largest_handle_is_not_nil() {
        assert!(!Handle::from_index(Handle::MAX).is_nil());
        assert!(Handle::NIL.is_nil());
    }

    #[test]
    fn debug_names_the_sentinel() {
        assert_eq!(format!("{:?}", Handle::NIL), "NIL");
        assert_eq!(format!("{:?}", Handle::from_index(7)), "#7");
    }

    proptest! {
        #[test]
        fn handle_round_trip(index in 0..=Handle::MAX) {
            let handle = Handle::from_index(index);
            prop_assert!(!handle.is_nil());
            prop_assert_eq!(handle.to_index(), index);
        }
    }
}
