//! Compressed Sparse Row (CSR) matrix storage
//!
//! Entries are structural: an entry exists at (i, j) whether or not its
//! value is zero. Writes through [`SparseMatrix::set_element`] are queued as
//! pending tuples and merged into the compressed arrays by
//! [`SparseMatrix::wait`]; every read operation requires an assembled matrix.

use crate::element::{MatrixElement, ValueType};
use crate::error::{try_with_capacity, AlgebraError, AlgebraResult};
use crate::monoid::Monoid;

/// Largest row or column count accepted by [`SparseMatrix::new`]
pub const MAX_DIMENSION: usize = 1 << 60;

/// Sparse matrix in CSR format
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    nrows: usize,
    ncols: usize,
    /// Row pointers: row i spans col_idx[row_ptr[i]..row_ptr[i + 1]]
    row_ptr: Vec<usize>,
    /// Column indices, sorted within each row
    col_idx: Vec<usize>,
    values: Vec<T>,
    /// Writes not yet merged into the compressed arrays
    pending: Vec<(usize, usize, T)>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty `nrows` x `ncols` matrix
    pub fn new(nrows: usize, ncols: usize) -> AlgebraResult<Self> {
        check_dimension(nrows)?;
        check_dimension(ncols)?;
        Ok(Self {
            nrows,
            ncols,
            row_ptr: zeroed(nrows + 1)?,
            col_idx: Vec::new(),
            values: Vec::new(),
            pending: Vec::new(),
        })
    }

    /// Build a matrix from a list of tuples, combining duplicate positions
    /// with `dup`.
    pub fn from_tuples<I, M>(nrows: usize, ncols: usize, tuples: I, dup: &M) -> AlgebraResult<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
        M: Monoid<Value = T>,
    {
        let mut matrix = Self::new(nrows, ncols)?;
        let mut entries = Vec::new();
        for (row, col, value) in tuples {
            matrix.check_index(row, col)?;
            entries.push((row, col, value));
        }
        entries.sort_by_key(|&(r, c, _)| (r, c));

        let mut merged: Vec<(usize, usize, T)> = try_with_capacity(entries.len())?;
        for (r, c, v) in entries {
            match merged.last_mut() {
                Some(last) if last.0 == r && last.1 == c => last.2 = dup.combine(last.2, v),
                _ => merged.push((r, c, v)),
            }
        }

        matrix.assemble_sorted(merged)?;
        Ok(matrix)
    }

    /// Assemble from per-row column/value lists (columns already sorted)
    pub(crate) fn from_rows(
        nrows: usize,
        ncols: usize,
        rows: Vec<(Vec<usize>, Vec<T>)>,
    ) -> AlgebraResult<Self> {
        debug_assert_eq!(rows.len(), nrows);
        let nnz: usize = rows.iter().map(|(cols, _)| cols.len()).sum();

        let mut row_ptr = try_with_capacity(nrows + 1)?;
        let mut col_idx = try_with_capacity(nnz)?;
        let mut values = try_with_capacity(nnz)?;

        row_ptr.push(0);
        for (cols, vals) in rows {
            col_idx.extend(cols);
            values.extend(vals);
            row_ptr.push(col_idx.len());
        }

        Ok(Self {
            nrows,
            ncols,
            row_ptr,
            col_idx,
            values,
            pending: Vec::new(),
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    pub fn value_type(&self) -> ValueType {
        T::VALUE_TYPE
    }

    /// Number of assembled entries (pending writes are not counted)
    pub fn nvals(&self) -> usize {
        self.col_idx.len()
    }

    /// Number of writes waiting for [`SparseMatrix::wait`]
    pub fn pending_updates(&self) -> usize {
        self.pending.len()
    }

    pub fn is_assembled(&self) -> bool {
        self.pending.is_empty()
    }

    /// Insert or overwrite the entry at (row, col)
    ///
    /// The write is pending until the next [`SparseMatrix::wait`]. When the
    /// same position is written several times the last write wins.
    pub fn set_element(&mut self, value: T, row: usize, col: usize) -> AlgebraResult<()> {
        self.check_index(row, col)?;
        self.pending
            .try_reserve(1)
            .map_err(|_| AlgebraError::OutOfMemory(self.pending.len() + 1))?;
        self.pending.push((row, col, value));
        Ok(())
    }

    /// Merge pending writes into the compressed arrays
    pub fn wait(&mut self) -> AlgebraResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let pending = std::mem::take(&mut self.pending);
        let mut entries = try_with_capacity(self.nvals() + pending.len())?;
        entries.extend(self.iter());
        entries.extend(pending);
        // Stable sort keeps later writes after earlier ones at the same position
        entries.sort_by_key(|&(r, c, _)| (r, c));

        let mut merged: Vec<(usize, usize, T)> = try_with_capacity(entries.len())?;
        for entry in entries {
            match merged.last_mut() {
                Some(last) if last.0 == entry.0 && last.1 == entry.1 => *last = entry,
                _ => merged.push(entry),
            }
        }

        self.assemble_sorted(merged)
    }

    /// Value stored at (row, col), if any
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.nrows {
            return None;
        }
        let (cols, vals) = self.row(row);
        cols.binary_search(&col).ok().map(|p| vals[p])
    }

    /// Column indices and values of one row
    ///
    /// Panics if `row >= nrows`.
    pub fn row(&self, row: usize) -> (&[usize], &[T]) {
        let start = self.row_ptr[row];
        let end = self.row_ptr[row + 1];
        (&self.col_idx[start..end], &self.values[start..end])
    }

    /// Number of entries in one row
    pub fn row_degree(&self, row: usize) -> usize {
        self.row_ptr[row + 1] - self.row_ptr[row]
    }

    /// All assembled values in row-major order
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Iterate assembled entries as (row, col, value) in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        (0..self.nrows).flat_map(move |i| {
            let (cols, vals) = self.row(i);
            cols.iter().zip(vals).map(move |(&j, &v)| (i, j, v))
        })
    }

    /// Materialized transpose
    pub fn transpose(&self) -> AlgebraResult<Self> {
        self.ensure_assembled()?;
        let nnz = self.nvals();

        let mut row_ptr = zeroed(self.ncols + 1)?;
        for &c in &self.col_idx {
            row_ptr[c + 1] += 1;
        }
        for j in 0..self.ncols {
            row_ptr[j + 1] += row_ptr[j];
        }

        let mut next = try_with_capacity(self.ncols)?;
        next.extend_from_slice(&row_ptr[..self.ncols]);

        let mut col_idx = zeroed(nnz)?;
        let mut values = try_with_capacity(nnz)?;
        values.resize(nnz, T::ZERO);

        // Rows are visited in order, so each transposed row comes out sorted
        for (i, j, v) in self.iter() {
            let p = next[j];
            col_idx[p] = i;
            values[p] = v;
            next[j] += 1;
        }

        Ok(Self {
            nrows: self.ncols,
            ncols: self.nrows,
            row_ptr,
            col_idx,
            values,
            pending: Vec::new(),
        })
    }

    pub(crate) fn ensure_assembled(&self) -> AlgebraResult<()> {
        if self.pending.is_empty() {
            Ok(())
        } else {
            Err(AlgebraError::PendingUpdates(self.pending.len()))
        }
    }

    fn check_index(&self, row: usize, col: usize) -> AlgebraResult<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(AlgebraError::IndexOutOfBounds {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// Replace the compressed arrays with `entries`, sorted by (row, col)
    /// with no duplicate positions.
    fn assemble_sorted(&mut self, entries: Vec<(usize, usize, T)>) -> AlgebraResult<()> {
        let mut row_ptr = zeroed(self.nrows + 1)?;
        let mut col_idx = try_with_capacity(entries.len())?;
        let mut values = try_with_capacity(entries.len())?;

        for (r, c, v) in entries {
            row_ptr[r + 1] += 1;
            col_idx.push(c);
            values.push(v);
        }
        for i in 0..self.nrows {
            row_ptr[i + 1] += row_ptr[i];
        }

        self.row_ptr = row_ptr;
        self.col_idx = col_idx;
        self.values = values;
        Ok(())
    }
}

fn check_dimension(n: usize) -> AlgebraResult<()> {
    if n > MAX_DIMENSION {
        return Err(AlgebraError::DimensionTooLarge(n));
    }
    Ok(())
}

fn zeroed(len: usize) -> AlgebraResult<Vec<usize>> {
    let mut v = try_with_capacity(len)?;
    v.resize(len, 0);
    Ok(v)
}
