//! Sparse matrix algebra for graph analytics
//!
//! A small GraphBLAS-style engine over unsigned integer matrices:
//!
//! - [`SparseMatrix`]: CSR storage with pending-tuple assembly
//! - [`select`]: structural selection (`tril`, `triu`, diagonals)
//! - [`mxm`]: masked multiplication over a [`Semiring`], with Gustavson and
//!   dot-product plans and logical transpose operands
//! - [`reduce_scalar`] / [`reduce_rows`]: reduction under a [`Monoid`]
//!
//! Every operation returns its own `Result`. Operations on distinct matrices
//! may parallelize internally through rayon but never mutate their inputs.

pub mod element;
pub mod error;
pub mod matrix;
pub mod monoid;
pub mod mxm;
pub mod reduce;
pub mod select;
pub mod semiring;

pub use element::{MatrixElement, ValueType};
pub use error::{AlgebraError, AlgebraResult};
pub use matrix::{SparseMatrix, MAX_DIMENSION};
pub use monoid::{Max, Min, Monoid, Plus, Times};
pub use mxm::{mxm, Descriptor, MultiplyStrategy, Operand};
pub use reduce::{reduce_rows, reduce_scalar, reduce_vector};
pub use select::{select, strict_lower, strict_upper, Selector};
pub use semiring::{PlusTimes, Semiring};
