//! Formula dispatch and timing
//!
//! A counting call runs strictly in sequence: derive the triangular parts
//! the method needs, form the masked product (timed as the multiply phase),
//! reduce it to a scalar (timed as the reduce phase), then normalize.
//! Every intermediate matrix is owned by the call and dropped before it
//! returns, on success and on error alike.

use super::decompose::{strict_lower, strict_upper};
use super::error::{TriangleCountError, TriangleCountResult};
use super::method::Method;
use super::normalize::{normalize, NormalizationPolicy};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;
use tricount_algebra::{
    mxm, reduce_scalar, select, AlgebraError, Descriptor, MultiplyStrategy, Operand, Plus,
    PlusTimes, Selector, SparseMatrix,
};

/// Value type of adjacency matrices handled by the counter
pub type Adjacency = SparseMatrix<u32>;

/// Result of one counting call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangleCount {
    pub triangles: u64,
    /// Seconds spent forming the product matrix
    pub multiply_secs: f64,
    /// Seconds spent reducing it (including trace extraction for `Naive`)
    pub reduce_secs: f64,
}

impl TriangleCount {
    pub fn total_secs(&self) -> f64 {
        self.multiply_secs + self.reduce_secs
    }
}

/// Counter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriCountConfig {
    /// Handling of raw sums that are not an exact multiple of the divisor
    pub normalization: NormalizationPolicy,
}

/// Triangle counter over a shared, read-only adjacency matrix
#[derive(Debug, Clone, Default)]
pub struct TriangleCounter {
    config: TriCountConfig,
}

struct RawCount {
    sum: u64,
    multiply_secs: f64,
    reduce_secs: f64,
}

impl TriangleCounter {
    pub fn new(config: TriCountConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TriCountConfig {
        &self.config
    }

    /// Count triangles in `adjacency` with the method whose id is `method`
    ///
    /// The id is validated before any matrix work is done.
    pub fn count_id(&self, adjacency: &Adjacency, method: i64) -> TriangleCountResult<TriangleCount> {
        let method = Method::from_id(method)?;
        self.count(adjacency, method)
    }

    /// Count triangles in `adjacency` with `method`
    ///
    /// `adjacency` must be square and assembled. It is assumed, not checked,
    /// to be symmetric with an empty diagonal.
    pub fn count(&self, adjacency: &Adjacency, method: Method) -> TriangleCountResult<TriangleCount> {
        if !adjacency.is_square() {
            return Err(AlgebraError::NotSquare(adjacency.nrows(), adjacency.ncols()).into());
        }
        if !adjacency.is_assembled() {
            return Err(AlgebraError::PendingUpdates(adjacency.pending_updates()).into());
        }

        let raw = match method {
            Method::Naive => naive(adjacency)?,
            _ => masked(adjacency, method)?,
        };
        let triangles = normalize(raw.sum, method, self.config.normalization)?;

        debug!(
            "{}: raw sum {} -> {} triangles (multiply {:.6}s, reduce {:.6}s)",
            method, raw.sum, triangles, raw.multiply_secs, raw.reduce_secs
        );

        Ok(TriangleCount {
            triangles,
            multiply_secs: raw.multiply_secs,
            reduce_secs: raw.reduce_secs,
        })
    }
}

/// Count triangles with the default configuration
pub fn count_triangles(adjacency: &Adjacency, method: i64) -> TriangleCountResult<TriangleCount> {
    TriangleCounter::default().count_id(adjacency, method)
}

fn timed<R>(f: impl FnOnce() -> R) -> (R, f64) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().as_secs_f64())
}

/// `trace(A^3)` through two unmasked products
fn naive(a: &Adjacency) -> TriangleCountResult<RawCount> {
    let gustavson = Descriptor::with_strategy(MultiplyStrategy::Gustavson);

    let (cube, multiply_secs) = timed(|| -> Result<Adjacency, AlgebraError> {
        let square = mxm(None, a, Operand::plain(a), &PlusTimes, &gustavson)?;
        mxm(None, &square, Operand::plain(a), &PlusTimes, &gustavson)
    });
    let cube = cube?;

    let (sum, reduce_secs) = timed(|| -> Result<u64, AlgebraError> {
        let diagonal = select(&cube, Selector::Diag, 0)?;
        reduce_scalar(&diagonal, &Plus::<u64>::new())
    });

    Ok(RawCount {
        sum: sum?,
        multiply_secs,
        reduce_secs,
    })
}

/// Every method but `Naive`: one masked product, then a full sum
fn masked(a: &Adjacency, method: Method) -> TriangleCountResult<RawCount> {
    let lower = if method.needs_lower() { Some(strict_lower(a)?) } else { None };
    let upper = if method.needs_upper() { Some(strict_upper(a)?) } else { None };

    let gustavson = Descriptor::with_strategy(MultiplyStrategy::Gustavson);
    let dot = Descriptor::with_strategy(MultiplyStrategy::Dot);

    let (product, multiply_secs) = match (method, lower.as_ref(), upper.as_ref()) {
        (Method::Burkhardt, _, _) => {
            timed(|| mxm(Some(a), a, Operand::plain(a), &PlusTimes, &gustavson))
        }
        (Method::Cohen, Some(l), Some(u)) => {
            timed(|| mxm(Some(a), l, Operand::plain(u), &PlusTimes, &gustavson))
        }
        (Method::Sandia, Some(l), _) => {
            timed(|| mxm(Some(l), l, Operand::plain(l), &PlusTimes, &gustavson))
        }
        (Method::Sandia2, _, Some(u)) => {
            timed(|| mxm(Some(u), u, Operand::plain(u), &PlusTimes, &gustavson))
        }
        (Method::SandiaDot, Some(l), Some(u)) => {
            timed(|| mxm(Some(l), l, Operand::transposed(u), &PlusTimes, &dot))
        }
        (Method::SandiaDot2, Some(l), Some(u)) => {
            timed(|| mxm(Some(u), u, Operand::transposed(l), &PlusTimes, &dot))
        }
        _ => return Err(TriangleCountError::InvalidMethod(method.id() as i64)),
    };
    drop(lower);
    drop(upper);
    let product = product?;

    let (sum, reduce_secs) = timed(|| reduce_scalar(&product, &Plus::<u64>::new()));

    Ok(RawCount {
        sum: sum?,
        multiply_secs,
        reduce_secs,
    })
}
