//! Error types for sparse matrix operations
//!
//! Every operation returns its own status; there is no shared
//! "last operation" state to inspect after a call.

use thiserror::Error;

/// Errors that can occur during sparse matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    #[error("Dimension {0} exceeds the maximum matrix dimension")]
    DimensionTooLarge(usize),

    #[error("Out of memory: cannot reserve {0} entries")]
    OutOfMemory(usize),

    #[error("Index ({row}, {col}) out of bounds for a {nrows}x{ncols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },

    #[error("Dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Matrix must be square, got {0}x{1}")]
    NotSquare(usize, usize),

    #[error("Matrix has {0} pending updates; call wait() before reading it")]
    PendingUpdates(usize),
}

impl AlgebraError {
    /// True when the failure came from matrix allocation rather than from
    /// the arguments of an operation.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            AlgebraError::DimensionTooLarge(_) | AlgebraError::OutOfMemory(_)
        )
    }
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;

/// Allocate an empty vector with room for `len` items, reporting
/// exhaustion as an error instead of aborting.
pub(crate) fn try_with_capacity<T>(len: usize) -> AlgebraResult<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| AlgebraError::OutOfMemory(len))?;
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_failure_classification() {
        assert!(AlgebraError::OutOfMemory(10).is_allocation_failure());
        assert!(AlgebraError::DimensionTooLarge(usize::MAX).is_allocation_failure());
        assert!(!AlgebraError::NotSquare(2, 3).is_allocation_failure());
        assert!(!AlgebraError::PendingUpdates(1).is_allocation_failure());
    }

    #[test]
    fn test_error_messages() {
        let err = AlgebraError::IndexOutOfBounds { row: 5, col: 1, nrows: 3, ncols: 3 };
        assert_eq!(err.to_string(), "Index (5, 1) out of bounds for a 3x3 matrix");
    }

    #[test]
    fn test_try_with_capacity() {
        let v: Vec<u32> = try_with_capacity(16).unwrap();
        assert!(v.capacity() >= 16);
        assert!(try_with_capacity::<u64>(usize::MAX).is_err());
    }
}
