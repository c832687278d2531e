//! Errors raised while counting triangles

use super::method::Method;
use thiserror::Error;
use tricount_algebra::AlgebraError;

/// Errors that can occur during a counting call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriangleCountError {
    #[error("Invalid method {0}: expected an id in 0..=6")]
    InvalidMethod(i64),

    #[error("Triangular decomposition failed: {0}")]
    StructuralSelectionFailure(#[source] AlgebraError),

    #[error("Sparse matrix operation failed: {0}")]
    AlgebraOperationFailure(#[source] AlgebraError),

    #[error("Matrix allocation failed: {0}")]
    AllocationFailure(#[source] AlgebraError),

    #[error(
        "{method} reduced to {raw}, which is not a multiple of {divisor}; \
         the graph is not symmetric and loop-free"
    )]
    DataInvariantViolation { method: Method, raw: u64, divisor: u64 },
}

impl From<AlgebraError> for TriangleCountError {
    fn from(err: AlgebraError) -> Self {
        if err.is_allocation_failure() {
            TriangleCountError::AllocationFailure(err)
        } else {
            TriangleCountError::AlgebraOperationFailure(err)
        }
    }
}

pub type TriangleCountResult<T> = Result<T, TriangleCountError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebra_error_classification() {
        let err: TriangleCountError = AlgebraError::OutOfMemory(8).into();
        assert!(matches!(err, TriangleCountError::AllocationFailure(_)));

        let err: TriangleCountError = AlgebraError::NotSquare(2, 3).into();
        assert!(matches!(err, TriangleCountError::AlgebraOperationFailure(_)));
    }

    #[test]
    fn test_invariant_message_names_method() {
        let err = TriangleCountError::DataInvariantViolation {
            method: Method::Cohen,
            raw: 3,
            divisor: 2,
        };
        assert!(err.to_string().starts_with("Cohen reduced to 3"));
    }
}
