use serde::{Deserialize, Serialize};

use self::edge::{TaillessEdge, WeightedEdge};

pub mod edge;
pub mod edge_list_graph;
pub mod graph_factory;
pub mod graph_functions;
pub mod path;
pub mod samples;

pub type Vertex = u32;
pub type Weight = u32;
/// Wider than [`Weight`] so that no sum of edge weights reaches
/// `Distance::MAX`, which stands for unreached.
pub type Distance = u64;

/// A vertex as the catalog defines it. The position is only used for drawing
/// and has no influence on any algorithm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: Vertex,
    #[serde(default)]
    pub position: Option<[f32; 2]>,
}

impl Node {
    pub fn new(id: Vertex) -> Node {
        Node { id, position: None }
    }

    pub fn with_position(id: Vertex, x: f32, y: f32) -> Node {
        Node {
            id,
            position: Some([x, y]),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphMode {
    Directed,
    #[default]
    Undirected,
}

pub trait Graph: Send + Sync {
    fn mode(&self) -> GraphMode;

    /// Vertices in definition order.
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = Vertex> + Send + '_>;

    fn number_of_vertices(&self) -> u32 {
        self.vertices().len() as u32
    }

    fn contains(&self, vertex: Vertex) -> bool;

    /// The flat edge sequence, in definition order.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn number_of_edges(&self) -> u32 {
        self.edges().len() as u32
    }

    /// Neighbors of `vertex` in edge-sequence order. In undirected mode an
    /// edge contributes its other endpoint to both of its endpoints.
    fn neighbors(&self, vertex: Vertex) -> Box<dyn Iterator<Item = TaillessEdge> + Send + '_>;
}
