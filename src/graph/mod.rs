//! Graph input and structural checks
//!
//! This module turns edge lists into symmetric adjacency matrices and
//! inspects matrices before they are handed to the counting engine.

pub mod loader;
pub mod validate;

pub use loader::{
    load_edge_list, load_edge_list_file, IndexBase, LoadError, LoadResult, LoadSummary,
    LoadedGraph, LoaderConfig, DEFAULT_MAX_DIMENSION,
};
pub use validate::{check_adjacency, summarize, AdjacencyViolation, GraphSummary};
