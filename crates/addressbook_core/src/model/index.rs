//! One-based list position used by commands to address a contact.

use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

/// Position in a displayed list.
///
/// Users see one-based positions while code indexes slices zero-based; this
/// type holds both views without ambiguity.
///
/// # Invariants
/// - The one-based value is always greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    /// Builds an index from a one-based position. Returns `None` for `0`.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        NonZeroUsize::new(one_based).map(Self)
    }

    /// Builds an index from a zero-based offset. Returns `None` when the
    /// one-based form would overflow.
    pub fn from_zero_based(zero_based: usize) -> Option<Self> {
        zero_based.checked_add(1).and_then(Self::from_one_based)
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
