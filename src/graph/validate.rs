//! Structural checks on adjacency matrices
//!
//! Triangle counts are only meaningful on a square, symmetric matrix with no
//! diagonal entries. Counting does not enforce this; callers that build
//! matrices by hand can check with [`check_adjacency`] first.

use crate::engine::Adjacency;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tricount_algebra::{reduce_rows, reduce_vector, AlgebraResult, Max, Plus};

/// First structural problem found in an adjacency matrix
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdjacencyViolation {
    #[error("Adjacency matrix is {0}x{1}, expected square")]
    NotSquare(usize, usize),

    #[error("Adjacency matrix has {0} pending updates")]
    Unassembled(usize),

    #[error("Self-loop on vertex {0}")]
    SelfLoop(usize),

    #[error("Entry ({0}, {1}) has no mirror entry")]
    Asymmetric(usize, usize),
}

/// Check that `a` describes a simple undirected graph
pub fn check_adjacency(a: &Adjacency) -> Result<(), AdjacencyViolation> {
    if !a.is_square() {
        return Err(AdjacencyViolation::NotSquare(a.nrows(), a.ncols()));
    }
    if !a.is_assembled() {
        return Err(AdjacencyViolation::Unassembled(a.pending_updates()));
    }

    for (i, j, _) in a.iter() {
        if i == j {
            return Err(AdjacencyViolation::SelfLoop(i));
        }
        if a.get(j, i).is_none() {
            return Err(AdjacencyViolation::Asymmetric(i, j));
        }
    }
    Ok(())
}

/// Size statistics of a symmetric adjacency matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub vertices: usize,
    /// Undirected edges, i.e. half the stored entries
    pub edges: usize,
    pub max_degree: u64,
}

/// Summarize `a`, which must be assembled
pub fn summarize(a: &Adjacency) -> AlgebraResult<GraphSummary> {
    let degrees = reduce_rows(a, &Plus::<u64>::new())?;
    Ok(GraphSummary {
        vertices: a.nrows(),
        edges: a.nvals() / 2,
        max_degree: reduce_vector(&degrees, &Max::<u64>::new()),
    })
}
