//! Semirings for matrix multiplication

use crate::element::MatrixElement;

/// A pair of operators defining `C(i,j) = add_k multiply(A(i,k), B(k,j))`
pub trait Semiring<T>: Sync {
    /// Identity of `add`
    fn zero(&self) -> T;

    fn add(&self, a: T, b: T) -> T;

    fn multiply(&self, a: T, b: T) -> T;
}

/// Conventional arithmetic: sum of products, wrapping on overflow
#[derive(Debug, Clone, Copy, Default)]
pub struct PlusTimes;

impl<T: MatrixElement> Semiring<T> for PlusTimes {
    fn zero(&self) -> T {
        T::ZERO
    }

    #[inline]
    fn add(&self, a: T, b: T) -> T {
        a.wrapping_add(b)
    }

    #[inline]
    fn multiply(&self, a: T, b: T) -> T {
        a.wrapping_mul(b)
    }
}
