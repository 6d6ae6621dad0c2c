//! The recursive decomposition shared by every enumeration mode.
//!
//! A partition of `remaining` is a first part (the *head*) followed by a partition
//! of `remaining - head` under a reduced constraint. A [`Key`] names one such
//! subproblem; it is both the memo-cache key of the eager enumerator and the frame of
//! the lazy one, so the two always walk the same tree in the same order.
//!
//! Heads are tried from largest to smallest, which yields every mode's results in
//! descending lexicographic order.

use std::ops::RangeInclusive;

use crate::partition::Partition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Shape {
    /// Positive parts, any order.
    Compositions,
    /// Positive parts, non-increasing.
    Partitions,
    /// Fixed number of non-negative parts, any order.
    FixedOrdered,
    /// Fixed number of non-negative parts, non-increasing.
    FixedUnordered,
}

impl Shape {
    #[inline]
    fn is_fixed(self) -> bool {
        matches!(self, Shape::FixedOrdered | Shape::FixedUnordered)
    }

    #[inline]
    fn is_bounded(self) -> bool {
        matches!(self, Shape::Partitions | Shape::FixedUnordered)
    }
}

/// A subproblem solved without decomposing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Base {
    /// Exactly one solution: this many zero parts (none for free-length shapes).
    Zeros(u32),
    /// No solution at all.
    Unsolvable,
}

impl Base {
    pub fn solution(self) -> Option<Partition> {
        match self {
            Base::Zeros(n) => Some(Partition::zeros(n)),
            Base::Unsolvable => None,
        }
    }
}

/// One subproblem: `(remaining sum, max part, parts left, mode)`.
///
/// Fields that do not constrain the shape are normalized away in [`Key::new`]
/// (`bound` for ordered shapes, `slots` for unbounded-length shapes, and any
/// `bound > remaining`), so equivalent subproblems share a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Key {
    pub shape: Shape,
    pub remaining: u32,
    pub bound: u32,
    pub slots: u32,
}

impl Key {
    pub fn new(shape: Shape, remaining: u32, bound: u32, slots: u32) -> Self {
        let bound = if shape.is_bounded() {
            bound.min(remaining)
        } else {
            remaining
        };
        let slots = if shape.is_fixed() { slots } else { 0 };
        Self {
            shape,
            remaining,
            bound,
            slots,
        }
    }

    /// `Some(..)` when the recursion stops here.
    ///
    /// Free-length shapes stop at a zero sum (one empty partition). Fixed-length
    /// shapes stop once the sum is used up, since the only completion is all zeros,
    /// or when no slots are left with a sum still to place.
    #[inline]
    pub fn base(&self) -> Option<Base> {
        if self.remaining == 0 {
            Some(Base::Zeros(self.slots))
        } else if self.shape.is_fixed() && self.slots == 0 {
            Some(Base::Unsolvable)
        } else {
            None
        }
    }

    /// Admissible heads, ascending. Callers iterate it reversed.
    ///
    /// Only meaningful for keys without a [`Key::base`].
    pub fn heads(&self) -> RangeInclusive<u32> {
        let r = self.remaining;
        match self.shape {
            Shape::Compositions => 1..=r,
            Shape::Partitions => 1..=self.bound,
            // The last slot must take the whole rest.
            Shape::FixedOrdered if self.slots == 1 => r..=r,
            Shape::FixedOrdered => 0..=r,
            // The largest of `slots` non-increasing parts is at least the average.
            Shape::FixedUnordered => r.div_ceil(self.slots)..=self.bound,
        }
    }

    /// Subproblem left after taking `head` as the first part.
    #[inline]
    pub fn child(&self, head: u32) -> Key {
        debug_assert!(head <= self.remaining);
        Key::new(
            self.shape,
            self.remaining - head,
            head,
            self.slots.saturating_sub(1),
        )
    }
}

/// Walks the heads of one key, largest first.
#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    pub key: Key,
    /// Next head to try; `None` once every head has been tried.
    next: Option<u32>,
}

impl Cursor {
    pub fn new(key: Key) -> Self {
        let heads = key.heads();
        let next = (!heads.is_empty()).then(|| *heads.end());
        Self { key, next }
    }

    pub fn advance(&mut self) -> Option<u32> {
        let head = self.next?;
        let lowest = *self.key.heads().start();
        self.next = (head > lowest).then(|| head - 1);
        Some(head)
    }
}
