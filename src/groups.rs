use std::fmt;
use std::marker::PhantomData;

pub trait Magma {
    type Elem: Clone;

    /// Combines `lhs` and `rhs`, in that order.
    fn op(&self, lhs: Self::Elem, rhs: Self::Elem) -> Self::Elem;
}

/// `op(op(a, b), c) == op(a, op(b, c))`. Commutativity is never assumed.
pub trait Associativity: Magma {}
pub trait Identity: Magma {
    /// Neutral element
    fn neutral(&self) -> Self::Elem;
}

pub trait Monoid: Magma + Associativity + Identity {}
impl<M: Magma + Associativity + Identity> Monoid for M {}

#[derive(Clone, Copy, Debug)]
pub struct NumAdditive<T>(PhantomData<T>);

impl<T> Default for NumAdditive<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumAdditive<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: num::Num + Clone> Magma for NumAdditive<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}
impl<T: num::Num + Clone> Identity for NumAdditive<T> {
    #[inline]
    fn neutral(&self) -> T {
        T::zero()
    }
}
impl<T: num::Num + Clone> Associativity for NumAdditive<T> {}

#[derive(Clone, Copy, Debug)]
pub struct NumMultiplicative<T>(PhantomData<T>);

impl<T> Default for NumMultiplicative<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NumMultiplicative<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: num::Num + Clone> Magma for NumMultiplicative<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        lhs * rhs
    }
}
impl<T: num::Num + Clone> Identity for NumMultiplicative<T> {
    #[inline]
    fn neutral(&self) -> T {
        T::one()
    }
}
impl<T: num::Num + Clone> Associativity for NumMultiplicative<T> {}

/// Minimum over a bounded total order. Use `ordered_float::OrderedFloat` for floats.
#[derive(Clone, Copy, Debug)]
pub struct Min<T>(PhantomData<T>);

impl<T> Default for Min<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Min<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Ord + num::Bounded + Clone> Magma for Min<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        std::cmp::min(lhs, rhs)
    }
}
impl<T: Ord + num::Bounded + Clone> Identity for Min<T> {
    #[inline]
    fn neutral(&self) -> T {
        T::max_value()
    }
}
impl<T: Ord + num::Bounded + Clone> Associativity for Min<T> {}

/// Maximum over a bounded total order.
#[derive(Clone, Copy, Debug)]
pub struct Max<T>(PhantomData<T>);

impl<T> Default for Max<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Max<T> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Ord + num::Bounded + Clone> Magma for Max<T> {
    type Elem = T;

    #[inline]
    fn op(&self, lhs: T, rhs: T) -> T {
        std::cmp::max(lhs, rhs)
    }
}
impl<T: Ord + num::Bounded + Clone> Identity for Max<T> {
    #[inline]
    fn neutral(&self) -> T {
        T::min_value()
    }
}
impl<T: Ord + num::Bounded + Clone> Associativity for Max<T> {}

/// String concatenation. Not commutative.
#[derive(Clone, Copy, Debug, Default)]
pub struct Concat;

impl Magma for Concat {
    type Elem = String;

    #[inline]
    fn op(&self, mut lhs: String, rhs: String) -> String {
        lhs.push_str(&rhs);
        lhs
    }
}
impl Identity for Concat {
    #[inline]
    fn neutral(&self) -> String {
        String::new()
    }
}
impl Associativity for Concat {}

/// A monoid made of a closure and its neutral element.
///
/// The caller vouches for associativity of `f` and for `neutral` being a
/// two-sided identity of it; neither can be checked here.
#[derive(Clone)]
pub struct FnMonoid<E, F> {
    f: F,
    neutral: E,
}

impl<E, F> FnMonoid<E, F>
where
    E: Clone,
    F: Fn(E, E) -> E,
{
    pub fn new(f: F, neutral: E) -> Self {
        Self { f, neutral }
    }
}

impl<E: fmt::Debug, F> fmt::Debug for FnMonoid<E, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMonoid")
            .field("neutral", &self.neutral)
            .finish_non_exhaustive()
    }
}

impl<E: Clone, F: Fn(E, E) -> E> Magma for FnMonoid<E, F> {
    type Elem = E;

    #[inline]
    fn op(&self, lhs: E, rhs: E) -> E {
        (self.f)(lhs, rhs)
    }
}
impl<E: Clone, F: Fn(E, E) -> E> Identity for FnMonoid<E, F> {
    #[inline]
    fn neutral(&self) -> E {
        self.neutral.clone()
    }
}
impl<E: Clone, F: Fn(E, E) -> E> Associativity for FnMonoid<E, F> {}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn fold<M: Monoid>(m: &M, xs: &[M::Elem]) -> M::Elem {
        xs.iter().cloned().fold(m.neutral(), |acc, x| m.op(acc, x))
    }

    #[test]
    fn neutral_is_two_sided() {
        let add = NumAdditive::<i64>::new();
        assert_eq!(add.op(add.neutral(), 7), 7);
        assert_eq!(add.op(7, add.neutral()), 7);

        let mul = NumMultiplicative::<i64>::new();
        assert_eq!(mul.op(mul.neutral(), -3), -3);
        assert_eq!(mul.op(-3, mul.neutral()), -3);

        let min = Min::<i32>::new();
        assert_eq!(min.op(min.neutral(), i32::MAX), i32::MAX);
        let max = Max::<i32>::new();
        assert_eq!(max.op(i32::MIN, max.neutral()), i32::MIN);

        assert_eq!(Concat.op(Concat.neutral(), "x".to_string()), "x");
    }

    #[test]
    fn concat_keeps_operand_order() {
        assert_eq!(Concat.op("ab".into(), "cd".into()), "abcd");
        assert_eq!(Concat.op("cd".into(), "ab".into()), "cdab");
    }

    #[test]
    fn min_over_ordered_floats() {
        let min = Min::<OrderedFloat<f64>>::new();
        let xs = [2.5, -1.0, 3.75].map(OrderedFloat);
        assert_eq!(fold(&min, &xs), OrderedFloat(-1.0));
        assert_eq!(fold(&min, &[]), OrderedFloat(f64::MAX));
    }

    #[test]
    fn fn_monoid_uses_closure_and_neutral() {
        let m = FnMonoid::new(|a: u64, b: u64| a.max(b), 0);
        assert_eq!(fold(&m, &[3, 9, 4]), 9);
        assert_eq!(m.neutral(), 0);
        assert!(format!("{:?}", m).starts_with("FnMonoid"));
    }
}
