//! Node addresses.
//!
//! Every node of a tree lives in one [`Arena`](super::arena::Arena) slot and
//! never moves, so a slot index is a stable address for parent and child
//! links. A handle is that index stored off-by-one in a `NonZero`, which
//! lets an absent link (`None`) share the handle's own bit pattern.
//!
//! Unit tests narrow the index to `u16` so the arena's capacity ceiling
//! is reachable in a test run.

use core::fmt;
use core::num::NonZero;

#[cfg(test)]
type RawHandle = u16;
#[cfg(not(test))]
type RawHandle = u32;

/// Arena slot of a tree node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    /// Highest slot index a handle can address.
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    /// # Panics
    ///
    /// Panics if `index` exceeds [`Handle::MAX`].
    #[inline]
    pub(crate) const fn new(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::new()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        let shifted = (index + 1) as RawHandle;
        match NonZero::new(shifted) {
            Some(shifted) => Self(shifted),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Renders the slot index as `#n`, the form used in trace records.
impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Parent and child links are `Option<Handle>`.
    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, RawHandle);

    #[test]
    #[should_panic(expected = "`Handle::new()` - `index` > `Handle::MAX`!")]
    fn index_past_max_panics() {
        let _ = Handle::new(Handle::MAX + 1);
    }

    #[test]
    fn first_and_last_slot() {
        assert_eq!(Handle::new(0).index(), 0);
        assert_eq!(Handle::new(Handle::MAX).index(), Handle::MAX);
        assert_eq!(Handle::MAX, usize::from(u16::MAX) - 1);
    }

    #[test]
    fn displays_slot_index() {
        assert_eq!(Handle::new(0).to_string(), "#0");
        assert_eq!(Handle::new(41).to_string(), "#41");
    }

    #[test]
    fn absent_link_is_distinct_from_first_slot() {
        let first: Option<Handle> = Some(Handle::new(0));
        assert_ne!(first, None);
    }

    proptest! {
        #[test]
        fn index_is_preserved(index in 0..=Handle::MAX) {
            prop_assert_eq!(Handle::new(index).index(), index);
        }
    }
}
