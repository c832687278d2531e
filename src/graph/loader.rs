//! Edge list loader
//!
//! Reads whitespace-separated vertex pairs, one edge per line, until end of
//! stream and builds a symmetric `u32` adjacency matrix: every edge (u, v)
//! sets both A(u, v) and A(v, u) to 1.

use crate::engine::Adjacency;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use tricount_algebra::{AlgebraError, SparseMatrix};

/// Matrix dimension used when no smaller bound is configured
pub const DEFAULT_MAX_DIMENSION: usize = 2_000_000;

/// Errors that can occur while loading an edge list
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: expected two vertex ids, found '{content}'")]
    Parse { line: usize, content: String },

    #[error("Line {line}: vertex {vertex} does not fit a matrix of dimension {max_dimension}")]
    VertexOutOfRange {
        line: usize,
        vertex: u64,
        max_dimension: usize,
    },

    #[error("Line {line}: vertex id 0 is not valid in 1-based input")]
    ZeroVertexInOneBased { line: usize },

    #[error("Matrix error: {0}")]
    Algebra(#[from] AlgebraError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Numbering of vertex ids in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndexBase {
    #[default]
    Zero,
    One,
}

/// Loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub index_base: IndexBase,
    /// Upper bound on the matrix dimension; larger vertex ids are rejected
    pub max_dimension: usize,
    /// Size the matrix to the largest vertex id seen instead of `max_dimension`
    pub shrink_to_fit: bool,
    /// Skip (v, v) edges instead of storing them on the diagonal
    pub drop_self_loops: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            index_base: IndexBase::Zero,
            max_dimension: DEFAULT_MAX_DIMENSION,
            shrink_to_fit: true,
            drop_self_loops: true,
        }
    }
}

/// Counters collected while loading
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Lines read, including comments and blanks
    pub lines: usize,
    /// Edge lines accepted (duplicates included)
    pub edges_read: usize,
    pub self_loops_dropped: usize,
    /// Rows (and columns) of the adjacency matrix
    pub dimension: usize,
}

/// An assembled adjacency matrix and how it was built
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub adjacency: Adjacency,
    pub summary: LoadSummary,
}

/// Load an edge list from `reader`
pub fn load_edge_list<R: BufRead>(reader: R, config: &LoaderConfig) -> LoadResult<LoadedGraph> {
    let mut summary = LoadSummary::default();
    let mut edges: Vec<(usize, usize)> = Vec::new();
    let mut max_vertex: Option<usize> = None;

    // 1. Parse vertex pairs
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        summary.lines += 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        let (u, v) = match (tokens.next(), tokens.next()) {
            (Some(u), Some(v)) => (
                parse_vertex(u, lineno, trimmed, config)?,
                parse_vertex(v, lineno, trimmed, config)?,
            ),
            _ => {
                return Err(LoadError::Parse {
                    line: lineno,
                    content: trimmed.to_string(),
                })
            }
        };

        if u == v && config.drop_self_loops {
            summary.self_loops_dropped += 1;
            continue;
        }

        max_vertex = max_vertex.max(Some(u.max(v)));
        edges.push((u, v));
    }
    summary.edges_read = edges.len();

    // 2. Size the matrix
    let dimension = if config.shrink_to_fit {
        max_vertex.map_or(0, |m| m + 1)
    } else {
        config.max_dimension
    };
    summary.dimension = dimension;

    // 3. Insert both orientations of every edge
    let mut adjacency = SparseMatrix::new(dimension, dimension)?;
    for &(u, v) in &edges {
        adjacency.set_element(1, u, v)?;
        adjacency.set_element(1, v, u)?;
    }
    adjacency.wait()?;

    if summary.self_loops_dropped > 0 {
        debug!("Dropped {} self-loop edges", summary.self_loops_dropped);
    }
    info!(
        "Loaded {} edges into a {}x{} adjacency matrix with {} entries",
        summary.edges_read,
        dimension,
        dimension,
        adjacency.nvals()
    );

    Ok(LoadedGraph { adjacency, summary })
}

/// Load an edge list from a file
pub fn load_edge_list_file<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> LoadResult<LoadedGraph> {
    let path = path.as_ref();
    info!("Loading edge list from {:?}", path);
    let file = File::open(path)?;
    load_edge_list(BufReader::new(file), config)
}

fn parse_vertex(token: &str, line: usize, content: &str, config: &LoaderConfig) -> LoadResult<usize> {
    let raw: u64 = token.parse().map_err(|_| LoadError::Parse {
        line,
        content: content.to_string(),
    })?;

    let id = match config.index_base {
        IndexBase::Zero => raw,
        IndexBase::One => raw
            .checked_sub(1)
            .ok_or(LoadError::ZeroVertexInOneBased { line })?,
    };

    match usize::try_from(id) {
        Ok(id) if id < config.max_dimension => Ok(id),
        _ => Err(LoadError::VertexOutOfRange {
            line,
            vertex: raw,
            max_dimension: config.max_dimension,
        }),
    }
}
