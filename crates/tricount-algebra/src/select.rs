//! Structural selection
//!
//! Copies the entries of a matrix whose position satisfies a predicate on
//! the diagonal offset `j - i` relative to a signed thunk `k`.

use crate::element::MatrixElement;
use crate::error::AlgebraResult;
use crate::matrix::SparseMatrix;
use rayon::prelude::*;

/// Positional predicate for [`select`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Keep `j - i <= k` (on and below the k-th diagonal)
    Tril,
    /// Keep `j - i >= k` (on and above the k-th diagonal)
    Triu,
    /// Keep `j - i == k`
    Diag,
    /// Keep `j - i != k`
    OffDiag,
}

impl Selector {
    #[inline]
    pub fn keeps(self, row: usize, col: usize, thunk: i64) -> bool {
        let offset = col as i64 - row as i64;
        match self {
            Selector::Tril => offset <= thunk,
            Selector::Triu => offset >= thunk,
            Selector::Diag => offset == thunk,
            Selector::OffDiag => offset != thunk,
        }
    }
}

/// Select the entries of `source` kept by `selector`, preserving values
pub fn select<T: MatrixElement>(
    source: &SparseMatrix<T>,
    selector: Selector,
    thunk: i64,
) -> AlgebraResult<SparseMatrix<T>> {
    source.ensure_assembled()?;

    let rows: Vec<(Vec<usize>, Vec<T>)> = (0..source.nrows())
        .into_par_iter()
        .map(|i| {
            let (cols, vals) = source.row(i);
            let kept: (Vec<usize>, Vec<T>) = cols
                .iter()
                .zip(vals)
                .filter(|&(&j, _)| selector.keeps(i, j, thunk))
                .map(|(&j, &v)| (j, v))
                .unzip();
            kept
        })
        .collect();

    SparseMatrix::from_rows(source.nrows(), source.ncols(), rows)
}

/// Strictly lower triangular part, `tril(A, -1)`
pub fn strict_lower<T: MatrixElement>(source: &SparseMatrix<T>) -> AlgebraResult<SparseMatrix<T>> {
    select(source, Selector::Tril, -1)
}

/// Strictly upper triangular part, `triu(A, 1)`
pub fn strict_upper<T: MatrixElement>(source: &SparseMatrix<T>) -> AlgebraResult<SparseMatrix<T>> {
    select(source, Selector::Triu, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlgebraError;
    use crate::monoid::Plus;

    /// Dense 3x3 with values 1..=9 in row-major order
    fn dense3() -> SparseMatrix<u32> {
        let tuples = (0..3).flat_map(|i| (0..3).map(move |j| (i, j, (i * 3 + j + 1) as u32)));
        SparseMatrix::from_tuples(3, 3, tuples, &Plus::new()).unwrap()
    }

    fn positions(m: &SparseMatrix<u32>) -> Vec<(usize, usize)> {
        m.iter().map(|(i, j, _)| (i, j)).collect()
    }

    #[test]
    fn test_strict_lower() {
        let l = strict_lower(&dense3()).unwrap();
        assert_eq!(positions(&l), vec![(1, 0), (2, 0), (2, 1)]);
        assert_eq!(l.get(2, 1), Some(8));
    }

    #[test]
    fn test_strict_upper() {
        let u = strict_upper(&dense3()).unwrap();
        assert_eq!(positions(&u), vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(u.get(0, 2), Some(3));
    }

    #[test]
    fn test_diag_and_offdiag() {
        let a = dense3();
        let d = select(&a, Selector::Diag, 0).unwrap();
        assert_eq!(positions(&d), vec![(0, 0), (1, 1), (2, 2)]);
        assert_eq!(d.get(1, 1), Some(5));

        let off = select(&a, Selector::OffDiag, 0).unwrap();
        assert_eq!(off.nvals(), 6);
        assert_eq!(off.get(1, 1), None);

        let super_diag = select(&a, Selector::Diag, 1).unwrap();
        assert_eq!(positions(&super_diag), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_inclusive_tril_triu() {
        let a = dense3();
        assert_eq!(select(&a, Selector::Tril, 0).unwrap().nvals(), 6);
        assert_eq!(select(&a, Selector::Triu, 0).unwrap().nvals(), 6);
    }

    #[test]
    fn test_lower_plus_upper_partitions_offdiagonal() {
        let a = select(&dense3(), Selector::OffDiag, 0).unwrap();
        let l = strict_lower(&a).unwrap();
        let u = strict_upper(&a).unwrap();
        assert_eq!(l.nvals() + u.nvals(), a.nvals());
        assert_eq!(positions(&u.transpose().unwrap()), positions(&l));
    }

    #[test]
    fn test_select_requires_assembly() {
        let mut a = SparseMatrix::<u32>::new(2, 2).unwrap();
        a.set_element(1, 1, 0).unwrap();
        assert_eq!(strict_lower(&a).unwrap_err(), AlgebraError::PendingUpdates(1));
    }
}
