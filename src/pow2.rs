use num::{PrimInt, Unsigned};

/// Smallest power of two `>= x`, or `None` if it doesn't fit in `I`.
///
/// Powers of two map to themselves and `0` maps to `1`.
///
/// O(1)
#[inline]
pub fn next_power_of_two<I: PrimInt + Unsigned>(x: I) -> Option<I> {
    if x <= I::one() {
        return Some(I::one());
    }

    let bits = I::zero().count_zeros();
    let shift = bits - (x - I::one()).leading_zeros();
    if shift >= bits {
        None
    } else {
        Some(I::one() << shift as usize)
    }
}
