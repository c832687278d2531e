//! Strict triangular parts of an adjacency matrix

use super::error::{TriangleCountError, TriangleCountResult};
use tricount_algebra::{select, AlgebraError, MatrixElement, Selector, SparseMatrix};

/// Strictly lower triangular part `L = tril(A, -1)`, values preserved
pub fn strict_lower<T: MatrixElement>(a: &SparseMatrix<T>) -> TriangleCountResult<SparseMatrix<T>> {
    triangular(a, Selector::Tril, -1)
}

/// Strictly upper triangular part `U = triu(A, 1)`, values preserved
pub fn strict_upper<T: MatrixElement>(a: &SparseMatrix<T>) -> TriangleCountResult<SparseMatrix<T>> {
    triangular(a, Selector::Triu, 1)
}

/// Split `A` into `(L, U)`. For a loop-free `A`, `L + U = A`; for a
/// symmetric `A`, `U = L'`.
pub fn decompose<T: MatrixElement>(
    a: &SparseMatrix<T>,
) -> TriangleCountResult<(SparseMatrix<T>, SparseMatrix<T>)> {
    Ok((strict_lower(a)?, strict_upper(a)?))
}

fn triangular<T: MatrixElement>(
    a: &SparseMatrix<T>,
    selector: Selector,
    thunk: i64,
) -> TriangleCountResult<SparseMatrix<T>> {
    if !a.is_square() {
        return Err(TriangleCountError::StructuralSelectionFailure(
            AlgebraError::NotSquare(a.nrows(), a.ncols()),
        ));
    }
    select(a, selector, thunk).map_err(TriangleCountError::StructuralSelectionFailure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricount_algebra::Plus;

    fn symmetric(n: usize, edges: &[(usize, usize)]) -> SparseMatrix<u32> {
        let tuples = edges.iter().flat_map(|&(u, v)| [(u, v, 1u32), (v, u, 1u32)]);
        SparseMatrix::from_tuples(n, n, tuples, &Plus::new()).unwrap()
    }

    #[test]
    fn test_decompose_triangle() {
        let a = symmetric(3, &[(0, 1), (1, 2), (0, 2)]);
        let (l, u) = decompose(&a).unwrap();

        assert_eq!(l.nvals(), 3);
        assert_eq!(u.nvals(), 3);
        assert!(l.iter().all(|(i, j, _)| i > j));
        assert!(u.iter().all(|(i, j, _)| i < j));
        assert_eq!(u.transpose().unwrap(), l);
    }

    #[test]
    fn test_values_preserved() {
        let a = SparseMatrix::from_tuples(
            2,
            2,
            vec![(0, 1, 7u32), (1, 0, 9u32)],
            &Plus::new(),
        )
        .unwrap();
        let (l, u) = decompose(&a).unwrap();
        assert_eq!(l.get(1, 0), Some(9));
        assert_eq!(u.get(0, 1), Some(7));
    }

    #[test]
    fn test_diagonal_excluded() {
        let a = SparseMatrix::from_tuples(2, 2, vec![(0, 0, 1u32), (1, 1, 1u32)], &Plus::new()).unwrap();
        let (l, u) = decompose(&a).unwrap();
        assert_eq!(l.nvals() + u.nvals(), 0);
    }

    #[test]
    fn test_non_square_rejected() {
        let a = SparseMatrix::<u32>::new(2, 3).unwrap();
        let err = decompose(&a).unwrap_err();
        assert_eq!(
            err,
            TriangleCountError::StructuralSelectionFailure(AlgebraError::NotSquare(2, 3))
        );
    }

    #[test]
    fn test_unassembled_rejected() {
        let mut a = SparseMatrix::<u32>::new(2, 2).unwrap();
        a.set_element(1, 0, 1).unwrap();
        assert!(matches!(
            strict_upper(&a),
            Err(TriangleCountError::StructuralSelectionFailure(AlgebraError::PendingUpdates(1)))
        ));
    }
}
