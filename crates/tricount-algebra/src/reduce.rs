//! Reductions under a commutative monoid
//!
//! One generic routine serves every value type and operator. Input values
//! are widened into the monoid's value type before combining, so a `u32`
//! matrix can be summed into a `u64`. Large inputs are split into chunks
//! reduced in parallel; the monoid is commutative so the result does not
//! depend on the split.

use crate::element::MatrixElement;
use crate::error::AlgebraResult;
use crate::matrix::SparseMatrix;
use crate::monoid::Monoid;
use rayon::prelude::*;

/// Values per parallel task
const REDUCE_CHUNK: usize = 1 << 14;

/// Reduce every entry of `matrix` to one value
pub fn reduce_scalar<T, M>(matrix: &SparseMatrix<T>, monoid: &M) -> AlgebraResult<M::Value>
where
    T: MatrixElement + Into<M::Value>,
    M: Monoid,
{
    matrix.ensure_assembled()?;
    Ok(reduce_vector(matrix.values(), monoid))
}

/// Reduce each row of `matrix`; rows without entries yield the identity
pub fn reduce_rows<T, M>(matrix: &SparseMatrix<T>, monoid: &M) -> AlgebraResult<Vec<M::Value>>
where
    T: MatrixElement + Into<M::Value>,
    M: Monoid,
{
    matrix.ensure_assembled()?;
    Ok((0..matrix.nrows())
        .into_par_iter()
        .map(|i| fold(matrix.row(i).1, monoid))
        .collect())
}

/// Reduce a dense slice of values
pub fn reduce_vector<V, M>(values: &[V], monoid: &M) -> M::Value
where
    V: Copy + Send + Sync + Into<M::Value>,
    M: Monoid,
{
    if values.len() <= REDUCE_CHUNK {
        return fold(values, monoid);
    }

    values
        .par_chunks(REDUCE_CHUNK)
        .map(|chunk| fold(chunk, monoid))
        .reduce(|| monoid.identity(), |a, b| monoid.combine(a, b))
}

fn fold<V, M>(values: &[V], monoid: &M) -> M::Value
where
    V: Copy + Into<M::Value>,
    M: Monoid,
{
    let terminal = monoid.terminal();
    let mut acc = monoid.identity();
    for &v in values {
        acc = monoid.combine(acc, v.into());
        if terminal == Some(acc) {
            break;
        }
    }
    acc
}
