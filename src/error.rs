//! Error types for classic_paths.
//!
//! The algorithms themselves are total: an unreachable target or an unknown
//! source shows up as `None` or an incomplete result, never as an error. The
//! enums below cover the remaining hard failures.

use std::path::PathBuf;

use thiserror::Error;

use crate::graphs::Vertex;

/// Errors raised while building or loading a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("vertex {0} is defined more than once")]
    DuplicateVertex(Vertex),

    #[error("edge ({tail}, {head}) references vertex {missing} which is not in the node set")]
    UnknownVertex {
        tail: Vertex,
        head: Vertex,
        missing: Vertex,
    },

    #[error("unsupported graph file extension: {0:?} (expected .json or .bincode)")]
    UnsupportedFileExtension(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Errors raised by search routines that can refuse to run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("recursion depth limit of {limit} exceeded at vertex {vertex}")]
    RecursionDepthExceeded { limit: usize, vertex: Vertex },
}

/// Reasons a path does not match the graph or the request it answers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathValidationError {
    #[error("path is empty")]
    Empty,

    #[error("first vertex {found} of path is not the source {expected}")]
    WrongSource { expected: Vertex, found: Vertex },

    #[error("last vertex {found} of path is not the target {expected}")]
    WrongTarget { expected: Vertex, found: Vertex },

    #[error("no edge between {tail} and {head} found")]
    MissingEdge { tail: Vertex, head: Vertex },
}
