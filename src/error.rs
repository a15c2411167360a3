use std::fmt;

/// Reasons a [`SegmentTree`](crate::SegmentTree) could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// No elements were given.
    EmptyInput,
    /// `len` is at least [`MAX_LEN`](crate::MAX_LEN).
    InputTooLarge { len: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "cannot build a segment tree from no elements"),
            Self::InputTooLarge { len } => write!(
                f,
                "{} elements is too many for a segment tree (limit is {})",
                len,
                crate::MAX_LEN - 1
            ),
        }
    }
}

impl std::error::Error for BuildError {}

/// An index or range outside of `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeError {
    pub low: usize,
    pub high: usize,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "incorrect query range; indexes should be in [{}, {}]",
            self.low, self.high
        )
    }
}

impl std::error::Error for RangeError {}
