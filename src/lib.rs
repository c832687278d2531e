//! Tricount
//!
//! Exact triangle counting for simple undirected graphs, expressed as masked
//! sparse matrix products over the plus-times semiring.
//!
//! # Architecture
//!
//! - [`graph`]: edge list loading and adjacency matrix checks
//! - [`engine`]: the seven counting formulas and their normalization
//! - [`driver`]: runs several formulas over one graph and compares them
//! - [`algebra`]: the sparse matrix kernels (CSR storage, select, masked
//!   multiply, monoid reductions)
//!
//! # Methods
//!
//! | Id | Name       | Formula                  | Divisor |
//! |----|------------|--------------------------|---------|
//! | 0  | Naive      | `trace(A^3)`             | 6       |
//! | 1  | Burkhardt  | `sum((A^2) .* A)`        | 6       |
//! | 2  | Cohen      | `sum((L * U) .* A)`      | 2       |
//! | 3  | Sandia     | `sum((L * L) .* L)`      | 1       |
//! | 4  | Sandia2    | `sum((U * U) .* U)`      | 1       |
//! | 5  | SandiaDot  | `sum((L * U') .* L)`     | 1       |
//! | 6  | SandiaDot2 | `sum((U * L') .* U)`     | 1       |
//!
//! ## Example Usage
//!
//! ```rust
//! use tricount::graph::{load_edge_list, IndexBase, LoaderConfig};
//! use tricount::{count_triangles, Method};
//!
//! let config = LoaderConfig {
//!     index_base: IndexBase::One,
//!     ..LoaderConfig::default()
//! };
//! let graph = load_edge_list("1 2\n2 3\n1 3\n".as_bytes(), &config).unwrap();
//!
//! for method in Method::ALL {
//!     let count = count_triangles(&graph.adjacency, method.id() as i64).unwrap();
//!     assert_eq!(count.triangles, 1);
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod engine;
pub mod graph;

pub use tricount_algebra as algebra;

// Re-export main types for convenience
pub use driver::{compare_methods, ComparisonReport, MethodOutcome};

pub use engine::{
    count_triangles, Adjacency, Method, NormalizationPolicy, ParseMethodError, TriCountConfig,
    TriangleCount, TriangleCountError, TriangleCountResult, TriangleCounter,
};

pub use graph::{
    check_adjacency, load_edge_list, load_edge_list_file, summarize, AdjacencyViolation,
    GraphSummary, IndexBase, LoadError, LoadedGraph, LoaderConfig,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
