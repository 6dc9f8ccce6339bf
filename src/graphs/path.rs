use serde::{Deserialize, Serialize};

use super::{Distance, Vertex};

/// Represents a request for finding a path in a graph.
///
/// This struct is used to encapsulate the information required to find a path
/// from a source vertex to a target vertex in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    source: Vertex,
    target: Vertex,
}

impl ShortestPathRequest {
    pub fn new(source: Vertex, target: Vertex) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn target(&self) -> Vertex {
        self.target
    }
}

/// Represents a path in a graph.
///
/// `distance` is measured in the metric of the search that produced the path:
/// edge count for breadth- and depth-first search, summed edge weight for the
/// weighted searches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

impl Path {
    pub fn source(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }

    pub fn number_of_edges(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}
