//! Array-backed segment tree over an arbitrary monoid.
//!
//! Range folds and point updates both take O(log n). The combining operation
//! only has to be associative; operand order is always preserved, so
//! non-commutative operations such as string concatenation or matrix products
//! fold correctly.
//!
//! ```
//! use segtree::{groups::NumAdditive, SegmentTree};
//!
//! let mut st = SegmentTree::build(NumAdditive::<i64>::new(), vec![1, 2, 3, 4, 5]).unwrap();
//! assert_eq!(st.query(1, 3), Ok(9));
//!
//! st.set(2, 10).unwrap();
//! assert_eq!(st.query(0, 4), Ok(22));
//!
//! st.apply(0, 5).unwrap();
//! assert_eq!(st.query(0, 0), Ok(6));
//! ```

pub mod groups;

mod error;
mod pow2;
mod segment_tree;

pub use error::{BuildError, RangeError};
pub use pow2::next_power_of_two;
pub use segment_tree::SegmentTree;

/// Exclusive upper bound on the number of elements in a tree.
pub const MAX_LEN: usize = 1 << 30;
