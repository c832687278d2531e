//! Commutative monoids used for reductions
//!
//! A monoid is an associative, commutative operator with an identity.
//! It may also declare a terminal value: once the running result reaches
//! it, no further input can change the result and reduction stops early.

use crate::element::MatrixElement;
use std::marker::PhantomData;

pub trait Monoid: Sync {
    type Value: Copy + Send + Sync + PartialEq;

    fn identity(&self) -> Self::Value;

    fn combine(&self, a: Self::Value, b: Self::Value) -> Self::Value;

    /// Absorbing value, if the operator has one
    fn terminal(&self) -> Option<Self::Value> {
        None
    }
}

/// Wrapping addition, identity 0
#[derive(Debug, Clone, Copy, Default)]
pub struct Plus<T>(PhantomData<T>);

/// Wrapping multiplication, identity 1, terminal 0
#[derive(Debug, Clone, Copy, Default)]
pub struct Times<T>(PhantomData<T>);

/// Maximum, identity 0, terminal `T::MAX`
#[derive(Debug, Clone, Copy, Default)]
pub struct Max<T>(PhantomData<T>);

/// Minimum, identity `T::MAX`, terminal 0
#[derive(Debug, Clone, Copy, Default)]
pub struct Min<T>(PhantomData<T>);

macro_rules! monoid_ctor {
    ($($name:ident),*) => {
        $(
            impl<T> $name<T> {
                pub const fn new() -> Self {
                    $name(PhantomData)
                }
            }
        )*
    };
}

monoid_ctor!(Plus, Times, Max, Min);

impl<T: MatrixElement> Monoid for Plus<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::ZERO
    }

    #[inline]
    fn combine(&self, a: T, b: T) -> T {
        a.wrapping_add(b)
    }
}

impl<T: MatrixElement> Monoid for Times<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::ONE
    }

    #[inline]
    fn combine(&self, a: T, b: T) -> T {
        a.wrapping_mul(b)
    }

    fn terminal(&self) -> Option<T> {
        Some(T::ZERO)
    }
}

impl<T: MatrixElement> Monoid for Max<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::ZERO
    }

    #[inline]
    fn combine(&self, a: T, b: T) -> T {
        if b > a { b } else { a }
    }

    fn terminal(&self) -> Option<T> {
        Some(T::MAX)
    }
}

impl<T: MatrixElement> Monoid for Min<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::MAX
    }

    #[inline]
    fn combine(&self, a: T, b: T) -> T {
        if b < a { b } else { a }
    }

    fn terminal(&self) -> Option<T> {
        Some(T::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold<M: Monoid>(m: &M, xs: &[M::Value]) -> M::Value {
        xs.iter().fold(m.identity(), |acc, &x| m.combine(acc, x))
    }

    #[test]
    fn test_identities() {
        assert_eq!(fold(&Plus::<u64>::new(), &[]), 0);
        assert_eq!(fold(&Times::<u32>::new(), &[]), 1);
        assert_eq!(fold(&Max::<u8>::new(), &[]), 0);
        assert_eq!(fold(&Min::<u16>::new(), &[]), u16::MAX);
    }

    #[test]
    fn test_combine() {
        assert_eq!(fold(&Plus::<u64>::new(), &[1, 2, 3]), 6);
        assert_eq!(fold(&Times::<u32>::new(), &[2, 3, 4]), 24);
        assert_eq!(fold(&Max::<u32>::new(), &[7, 2, 9, 1]), 9);
        assert_eq!(fold(&Min::<u32>::new(), &[7, 2, 9, 1]), 1);
    }

    #[test]
    fn test_plus_wraps() {
        assert_eq!(fold(&Plus::<u8>::new(), &[200, 100]), 44);
    }

    #[test]
    fn test_terminals() {
        assert_eq!(Plus::<u64>::new().terminal(), None);
        assert_eq!(Max::<u64>::new().terminal(), Some(u64::MAX));
        assert_eq!(Min::<u32>::new().terminal(), Some(0));
        assert_eq!(Times::<u8>::new().terminal(), Some(0));
    }
}
