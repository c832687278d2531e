//! Masked sparse matrix multiplication
//!
//! Computes `C<M> = A * B` over a semiring. With a mask, only positions
//! where the mask has a structural entry are computed and kept. Two
//! execution plans produce identical results:
//!
//! - [`MultiplyStrategy::Gustavson`] walks `A(i,:)` and accumulates the rows
//!   of `B` it selects.
//! - [`MultiplyStrategy::Dot`] computes each output entry as the dot product
//!   of `A(i,:)` with `B(:,j)`, read as row `j` of `B'`.
//!
//! Rows of the result are computed in parallel.

use crate::element::MatrixElement;
use crate::error::{AlgebraError, AlgebraResult};
use crate::matrix::SparseMatrix;
use crate::semiring::Semiring;
use rayon::prelude::*;
use std::borrow::Cow;
use std::cmp::Ordering;

/// Execution plan for [`mxm`]. A performance hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiplyStrategy {
    #[default]
    Gustavson,
    Dot,
}

/// Options for a multiplication
#[derive(Debug, Clone, Copy, Default)]
pub struct Descriptor {
    pub strategy: MultiplyStrategy,
}

impl Descriptor {
    pub fn with_strategy(strategy: MultiplyStrategy) -> Self {
        Self { strategy }
    }
}

/// Right-hand input of [`mxm`]: a matrix or a logical view of its transpose
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a, T> {
    Plain(&'a SparseMatrix<T>),
    /// `B'` without materializing it; the dot plan reads it directly
    Transposed(&'a SparseMatrix<T>),
}

impl<'a, T: MatrixElement> Operand<'a, T> {
    pub fn plain(matrix: &'a SparseMatrix<T>) -> Self {
        Operand::Plain(matrix)
    }

    pub fn transposed(matrix: &'a SparseMatrix<T>) -> Self {
        Operand::Transposed(matrix)
    }

    /// Underlying stored matrix
    pub fn matrix(&self) -> &'a SparseMatrix<T> {
        match *self {
            Operand::Plain(m) | Operand::Transposed(m) => m,
        }
    }

    /// Logical dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        match self {
            Operand::Plain(m) => m.dimensions(),
            Operand::Transposed(m) => (m.ncols(), m.nrows()),
        }
    }

    /// The operand laid out by rows
    fn by_rows(&self) -> AlgebraResult<Cow<'a, SparseMatrix<T>>> {
        match *self {
            Operand::Plain(m) => Ok(Cow::Borrowed(m)),
            Operand::Transposed(m) => Ok(Cow::Owned(m.transpose()?)),
        }
    }

    /// The operand laid out by columns, i.e. its transpose by rows
    fn by_columns(&self) -> AlgebraResult<Cow<'a, SparseMatrix<T>>> {
        match *self {
            Operand::Plain(m) => Ok(Cow::Owned(m.transpose()?)),
            Operand::Transposed(m) => Ok(Cow::Borrowed(m)),
        }
    }
}

impl<'a, T: MatrixElement> From<&'a SparseMatrix<T>> for Operand<'a, T> {
    fn from(matrix: &'a SparseMatrix<T>) -> Self {
        Operand::Plain(matrix)
    }
}

type Row<T> = (Vec<usize>, Vec<T>);

/// `C<mask> = left * right` over `semiring`
pub fn mxm<T, S>(
    mask: Option<&SparseMatrix<T>>,
    left: &SparseMatrix<T>,
    right: Operand<'_, T>,
    semiring: &S,
    descriptor: &Descriptor,
) -> AlgebraResult<SparseMatrix<T>>
where
    T: MatrixElement,
    S: Semiring<T>,
{
    left.ensure_assembled()?;
    right.matrix().ensure_assembled()?;

    let (m, k) = left.dimensions();
    let (kb, n) = right.dimensions();
    if k != kb {
        return Err(AlgebraError::DimensionMismatch {
            op: "mxm",
            left: (m, k),
            right: (kb, n),
        });
    }
    if let Some(mask) = mask {
        mask.ensure_assembled()?;
        if mask.dimensions() != (m, n) {
            return Err(AlgebraError::DimensionMismatch {
                op: "mxm mask",
                left: mask.dimensions(),
                right: (m, n),
            });
        }
    }

    let rows = match descriptor.strategy {
        MultiplyStrategy::Gustavson => {
            let b = right.by_rows()?;
            gustavson(mask, left, &b, semiring)
        }
        MultiplyStrategy::Dot => {
            let bt = right.by_columns()?;
            dot(mask, left, &bt, semiring)
        }
    };

    SparseMatrix::from_rows(m, n, rows)
}

fn gustavson<T, S>(
    mask: Option<&SparseMatrix<T>>,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    semiring: &S,
) -> Vec<Row<T>>
where
    T: MatrixElement,
    S: Semiring<T>,
{
    (0..a.nrows())
        .into_par_iter()
        .map(|i| match mask {
            Some(mask) => gustavson_masked_row(mask.row(i).0, a.row(i), b, semiring),
            None => gustavson_row(a.row(i), b, semiring),
        })
        .collect()
}

/// One output row restricted to the mask columns `allowed`
fn gustavson_masked_row<T, S>(
    allowed: &[usize],
    (a_cols, a_vals): (&[usize], &[T]),
    b: &SparseMatrix<T>,
    semiring: &S,
) -> Row<T>
where
    T: MatrixElement,
    S: Semiring<T>,
{
    if allowed.is_empty() || a_cols.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut acc: Vec<Option<T>> = vec![None; allowed.len()];
    for (&k, &aik) in a_cols.iter().zip(a_vals) {
        let (b_cols, b_vals) = b.row(k);
        for (&j, &bkj) in b_cols.iter().zip(b_vals) {
            if let Ok(p) = allowed.binary_search(&j) {
                let t = semiring.multiply(aik, bkj);
                acc[p] = Some(match acc[p] {
                    Some(c) => semiring.add(c, t),
                    None => t,
                });
            }
        }
    }

    allowed
        .iter()
        .zip(acc)
        .filter_map(|(&j, v)| v.map(|v| (j, v)))
        .unzip()
}

/// One unmasked output row, accumulated by sorting the partial products
fn gustavson_row<T, S>(
    (a_cols, a_vals): (&[usize], &[T]),
    b: &SparseMatrix<T>,
    semiring: &S,
) -> Row<T>
where
    T: MatrixElement,
    S: Semiring<T>,
{
    let mut products: Vec<(usize, T)> = Vec::new();
    for (&k, &aik) in a_cols.iter().zip(a_vals) {
        let (b_cols, b_vals) = b.row(k);
        for (&j, &bkj) in b_cols.iter().zip(b_vals) {
            products.push((j, semiring.multiply(aik, bkj)));
        }
    }
    products.sort_by_key(|&(j, _)| j);

    let mut cols: Vec<usize> = Vec::new();
    let mut vals: Vec<T> = Vec::new();
    for (j, t) in products {
        if cols.last() == Some(&j) {
            if let Some(v) = vals.last_mut() {
                *v = semiring.add(*v, t);
            }
        } else {
            cols.push(j);
            vals.push(t);
        }
    }
    (cols, vals)
}

fn dot<T, S>(
    mask: Option<&SparseMatrix<T>>,
    a: &SparseMatrix<T>,
    bt: &SparseMatrix<T>,
    semiring: &S,
) -> Vec<Row<T>>
where
    T: MatrixElement,
    S: Semiring<T>,
{
    (0..a.nrows())
        .into_par_iter()
        .map(|i| {
            let a_row = a.row(i);
            let mut cols = Vec::new();
            let mut vals = Vec::new();
            if a_row.0.is_empty() {
                return (cols, vals);
            }

            let mut emit = |j: usize| {
                if let Some(v) = sparse_dot(a_row, bt.row(j), semiring) {
                    cols.push(j);
                    vals.push(v);
                }
            };
            match mask {
                Some(mask) => mask.row(i).0.iter().for_each(|&j| emit(j)),
                None => (0..bt.nrows()).for_each(&mut emit),
            }

            (cols, vals)
        })
        .collect()
}

/// Dot product of two sorted sparse vectors; `None` when they share no index
fn sparse_dot<T, S>(
    (a_cols, a_vals): (&[usize], &[T]),
    (b_cols, b_vals): (&[usize], &[T]),
    semiring: &S,
) -> Option<T>
where
    T: MatrixElement,
    S: Semiring<T>,
{
    let (mut p, mut q) = (0, 0);
    let mut acc = semiring.zero();
    let mut hit = false;

    while p < a_cols.len() && q < b_cols.len() {
        match a_cols[p].cmp(&b_cols[q]) {
            Ordering::Less => p += 1,
            Ordering::Greater => q += 1,
            Ordering::Equal => {
                acc = semiring.add(acc, semiring.multiply(a_vals[p], b_vals[q]));
                hit = true;
                p += 1;
                q += 1;
            }
        }
    }

    hit.then_some(acc)
}
