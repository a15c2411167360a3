use std::ops::{Bound, RangeBounds};

use crate::error::{BuildError, RangeError};
use crate::groups::{FnMonoid, Monoid};
use crate::pow2::next_power_of_two;
use crate::MAX_LEN;

/// A fixed-length sequence supporting range folds and point updates in O(log n).
///
/// The tree is stored flat: node `k` has children `2k + 1` and `2k + 2`, and the
/// leaves start at `capacity - 1`, where `capacity` is the element count rounded
/// up to a power of two. Unused leaves hold the neutral element.
#[derive(Clone, Debug)]
pub struct SegmentTree<M: Monoid> {
    monoid: M,
    len: usize,
    capacity: usize,
    data: Vec<M::Elem>,
}

impl<M: Monoid> SegmentTree<M> {
    /// Builds a tree over `iter`, combining with `monoid`.
    ///
    /// Fails with [`BuildError::EmptyInput`] if `iter` yields nothing and with
    /// [`BuildError::InputTooLarge`] if it yields [`MAX_LEN`] elements or more.
    ///
    /// O(n)
    pub fn build<Iter: IntoIterator<Item = M::Elem>>(
        monoid: M,
        iter: Iter,
    ) -> Result<Self, BuildError> {
        let elems: Vec<_> = iter.into_iter().collect();
        let len = elems.len();
        if len == 0 {
            return Err(BuildError::EmptyInput);
        }
        if len >= MAX_LEN {
            return Err(BuildError::InputTooLarge { len });
        }

        let capacity = next_power_of_two(len).ok_or(BuildError::InputTooLarge { len })?;
        let size = capacity
            .checked_mul(4)
            .ok_or(BuildError::InputTooLarge { len })?;

        let mut data = Vec::with_capacity(size);
        data.resize_with(capacity - 1, || monoid.neutral());
        data.extend(elems);
        data.resize_with(size, || monoid.neutral());

        for i in (0..capacity - 1).rev() {
            let l = 2 * i + 1;
            let r = l + 1;
            data[i] = monoid.op(data[l].clone(), data[r].clone());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(len, capacity, "segment tree built");

        Ok(Self {
            monoid,
            len,
            capacity,
            data,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a tree can't be built from nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of leaf slots, i.e. `len()` rounded up to a power of two.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn monoid(&self) -> &M {
        &self.monoid
    }

    #[inline]
    fn start(&self) -> usize {
        self.capacity - 1
    }

    /// O(1)
    #[inline]
    pub fn get(&self, i: usize) -> Option<&M::Elem> {
        if i < self.len {
            Some(&self.data[self.start() + i])
        } else {
            None
        }
    }

    /// The elements in order, without padding.
    #[inline]
    pub fn leaves(&self) -> &[M::Elem] {
        let start = self.start();
        &self.data[start..start + self.len]
    }

    /// Fold of every element. O(1)
    #[inline]
    pub fn total(&self) -> &M::Elem {
        &self.data[0]
    }

    fn range_error(&self) -> RangeError {
        RangeError {
            low: 0,
            high: self.len - 1,
        }
    }

    fn check_range(&self, left: usize, right: usize) -> Result<(), RangeError> {
        if left <= right && right < self.len {
            Ok(())
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(left, right, len = self.len, "segment tree range rejected");
            Err(self.range_error())
        }
    }

    /// Fold of the elements in `left..=right`, in order.
    ///
    /// O(log n)
    pub fn query(&self, left: usize, right: usize) -> Result<M::Elem, RangeError> {
        self.check_range(left, right)?;

        let start = self.start();
        let mut l = left + start;
        let mut r = right + start;

        let mut left_acc = self.monoid.neutral();
        let mut right_acc = self.monoid.neutral();
        while l < r {
            // An even `l` is a right child: its parent also covers a node left of the range.
            if l & 1 == 0 {
                left_acc = self.monoid.op(left_acc, self.data[l].clone());
            }
            // Mirrored for `r`, whose left children are odd.
            if r & 1 == 1 {
                right_acc = self.monoid.op(self.data[r].clone(), right_acc);
            }
            l /= 2;
            // `l < r` puts both below the root, so `r >= 2` here.
            r = r / 2 - 1;
        }
        if l == r {
            left_acc = self.monoid.op(left_acc, self.data[l].clone());
        }

        Ok(self.monoid.op(left_acc, right_acc))
    }

    /// [`query`](Self::query) over any range expression. Empty ranges fold to
    /// the neutral element.
    ///
    /// O(log n)
    pub fn fold<R: RangeBounds<usize>>(&self, range: R) -> Result<M::Elem, RangeError> {
        let start = match range.start_bound() {
            Bound::Included(&s) => Some(s),
            Bound::Excluded(&s) => s.checked_add(1),
            Bound::Unbounded => Some(0),
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.checked_add(1),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => Some(self.len),
        };

        match (start, end) {
            (Some(start), Some(end)) if start == end && end <= self.len => {
                Ok(self.monoid.neutral())
            }
            (Some(start), Some(end)) if start < end => self.query(start, end - 1),
            _ => Err(self.range_error()),
        }
    }

    fn check_index(&self, i: usize) -> Result<(), RangeError> {
        self.check_range(i, i)
    }

    /// Replaces element `i` with `x`.
    ///
    /// O(log n)
    pub fn set(&mut self, i: usize, x: M::Elem) -> Result<(), RangeError> {
        self.check_index(i)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(index = i, "segment tree leaf replaced");

        let leaf = self.start() + i;
        self.data[leaf] = x;
        self.update_ancestors(leaf);
        Ok(())
    }

    /// Replaces element `i` with `op(element, dx)`.
    ///
    /// O(log n)
    pub fn apply(&mut self, i: usize, dx: M::Elem) -> Result<(), RangeError> {
        self.check_index(i)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(index = i, "segment tree leaf combined");

        let leaf = self.start() + i;
        self.data[leaf] = self.monoid.op(self.data[leaf].clone(), dx);
        self.update_ancestors(leaf);
        Ok(())
    }

    /// Recomputes every ancestor of `i` from its two children, bottom-up.
    fn update_ancestors(&mut self, mut i: usize) {
        while i != 0 {
            i = (i - 1) / 2;

            let l = 2 * i + 1;
            let r = l + 1;
            self.data[i] = self.monoid.op(self.data[l].clone(), self.data[r].clone());
        }
    }
}

impl<E, F> SegmentTree<FnMonoid<E, F>>
where
    E: Clone,
    F: Fn(E, E) -> E,
{
    /// Builds a tree combining with `op`, which must be associative with
    /// `neutral` as its identity.
    ///
    /// O(n)
    pub fn with_op<Iter: IntoIterator<Item = E>>(
        iter: Iter,
        op: F,
        neutral: E,
    ) -> Result<Self, BuildError> {
        Self::build(FnMonoid::new(op, neutral), iter)
    }
}
