//! Triangle counting engine
//!
//! Counts the triangles of a simple undirected graph from its adjacency
//! matrix `A` with one of seven masked sparse matrix formulas (see
//! [`Method`]). Each formula trades memory for multiply strategy; all of them
//! agree on symmetric, loop-free input.

pub mod counter;
pub mod decompose;
pub mod error;
pub mod method;
pub mod normalize;

pub use counter::{count_triangles, Adjacency, TriCountConfig, TriangleCount, TriangleCounter};
pub use decompose::{decompose, strict_lower, strict_upper};
pub use error::{TriangleCountError, TriangleCountResult};
pub use method::{Method, ParseMethodError};
pub use normalize::{normalize, NormalizationPolicy};
