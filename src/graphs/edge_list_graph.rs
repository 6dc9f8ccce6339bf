use ahash::{HashSet, HashSetExt};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{
    edge::{TaillessEdge, WeightedEdge},
    Graph, GraphMode, Node, Vertex,
};
use crate::error::GraphError;

/// Serialized form of an [`EdgeListGraph`]. When `nodes` is left out the
/// vertex set is taken from the edge endpoints in order of first appearance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default)]
    pub mode: GraphMode,
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<WeightedEdge>,
}

/// A graph stored as a node list plus a flat, ordered edge sequence.
/// Adjacency is computed on demand by filtering the sequence, so neighbor
/// order always follows edge definition order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "GraphDescription", into = "GraphDescription")]
pub struct EdgeListGraph {
    mode: GraphMode,
    nodes: Vec<Node>,
    edges: Vec<WeightedEdge>,
    vertex_set: HashSet<Vertex>,
}

impl EdgeListGraph {
    pub fn new(
        mode: GraphMode,
        nodes: Vec<Node>,
        edges: Vec<WeightedEdge>,
    ) -> Result<EdgeListGraph, GraphError> {
        let mut vertex_set = HashSet::with_capacity(nodes.len());
        for node in nodes.iter() {
            if !vertex_set.insert(node.id) {
                return Err(GraphError::DuplicateVertex(node.id));
            }
        }

        for edge in edges.iter() {
            for endpoint in [edge.tail(), edge.head()] {
                if !vertex_set.contains(&endpoint) {
                    return Err(GraphError::UnknownVertex {
                        tail: edge.tail(),
                        head: edge.head(),
                        missing: endpoint,
                    });
                }
            }
        }

        Ok(EdgeListGraph {
            mode,
            nodes,
            edges,
            vertex_set,
        })
    }

    /// Builds a graph whose vertex set is exactly the set of edge endpoints.
    pub fn from_edges(mode: GraphMode, edges: Vec<WeightedEdge>) -> EdgeListGraph {
        let nodes = edges
            .iter()
            .flat_map(|edge| [edge.tail(), edge.head()])
            .unique()
            .map(Node::new)
            .collect_vec();
        let vertex_set = nodes.iter().map(|node| node.id).collect();

        EdgeListGraph {
            mode,
            nodes,
            edges,
            vertex_set,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edge_slice(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Same graph with every edge weight replaced by 1.
    pub fn unit_weighted(&self) -> EdgeListGraph {
        EdgeListGraph {
            mode: self.mode,
            nodes: self.nodes.clone(),
            edges: self
                .edges
                .iter()
                .map(|edge| WeightedEdge::unweighted(edge.tail(), edge.head()))
                .collect(),
            vertex_set: self.vertex_set.clone(),
        }
    }

    pub fn with_mode(&self, mode: GraphMode) -> EdgeListGraph {
        EdgeListGraph {
            mode,
            ..self.clone()
        }
    }
}

impl TryFrom<GraphDescription> for EdgeListGraph {
    type Error = GraphError;

    fn try_from(description: GraphDescription) -> Result<Self, Self::Error> {
        if description.nodes.is_empty() {
            return Ok(EdgeListGraph::from_edges(
                description.mode,
                description.edges,
            ));
        }

        EdgeListGraph::new(description.mode, description.nodes, description.edges)
    }
}

impl From<EdgeListGraph> for GraphDescription {
    fn from(graph: EdgeListGraph) -> Self {
        GraphDescription {
            mode: graph.mode,
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

impl Graph for EdgeListGraph {
    fn mode(&self) -> GraphMode {
        self.mode
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = Vertex> + Send + '_> {
        Box::new(self.nodes.iter().map(|node| node.id))
    }

    fn number_of_vertices(&self) -> u32 {
        self.nodes.len() as u32
    }

    fn contains(&self, vertex: Vertex) -> bool {
        self.vertex_set.contains(&vertex)
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    fn neighbors(&self, vertex: Vertex) -> Box<dyn Iterator<Item = TaillessEdge> + Send + '_> {
        let mode = self.mode;
        Box::new(self.edges.iter().filter_map(move |edge| {
            if edge.tail() == vertex {
                Some(edge.tailless())
            } else if mode == GraphMode::Undirected && edge.head() == vertex {
                Some(edge.reversed().tailless())
            } else {
                None
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{EdgeListGraph, GraphDescription};
    use crate::{
        error::GraphError,
        graphs::{edge::WeightedEdge, Graph, GraphMode, Node},
    };

    fn heads(graph: &EdgeListGraph, vertex: u32) -> Vec<(u32, u32)> {
        graph
            .neighbors(vertex)
            .map(|edge| (edge.head(), edge.weight()))
            .collect_vec()
    }

    #[test]
    fn undirected_neighbors_follow_edge_order() {
        let edges = vec![
            WeightedEdge::new(0, 1, 4),
            WeightedEdge::new(2, 0, 1),
            WeightedEdge::new(0, 3, 2),
        ];
        let graph = EdgeListGraph::from_edges(GraphMode::Undirected, edges);

        assert_eq!(heads(&graph, 0), vec![(1, 4), (2, 1), (3, 2)]);
        assert_eq!(heads(&graph, 2), vec![(0, 1)]);
    }

    #[test]
    fn directed_neighbors_only_use_outgoing_edges() {
        let edges = vec![WeightedEdge::new(0, 1, 4), WeightedEdge::new(2, 0, 1)];
        let graph = EdgeListGraph::from_edges(GraphMode::Directed, edges);

        assert_eq!(heads(&graph, 0), vec![(1, 4)]);
        assert!(heads(&graph, 1).is_empty());
        assert_eq!(heads(&graph, 2), vec![(0, 1)]);
    }

    #[test]
    fn unknown_vertex_has_no_neighbors() {
        let graph =
            EdgeListGraph::from_edges(GraphMode::Undirected, vec![WeightedEdge::new(0, 1, 1)]);
        assert!(!graph.contains(9));
        assert_eq!(graph.neighbors(9).count(), 0);
    }

    #[test]
    fn rejects_inconsistent_node_sets() {
        let duplicate = EdgeListGraph::new(
            GraphMode::Undirected,
            vec![Node::new(0), Node::new(0)],
            vec![],
        );
        assert!(matches!(duplicate, Err(GraphError::DuplicateVertex(0))));

        let unknown = EdgeListGraph::new(
            GraphMode::Undirected,
            vec![Node::new(0)],
            vec![WeightedEdge::new(0, 5, 1)],
        );
        assert!(matches!(
            unknown,
            Err(GraphError::UnknownVertex { missing: 5, .. })
        ));
    }

    #[test]
    fn isolated_nodes_stay_in_the_vertex_set() {
        let graph = EdgeListGraph::new(
            GraphMode::Undirected,
            vec![Node::new(0), Node::new(1), Node::new(7)],
            vec![WeightedEdge::new(0, 1, 1)],
        )
        .unwrap();

        assert_eq!(graph.vertices().collect_vec(), vec![0, 1, 7]);
        assert!(graph.contains(7));
    }

    #[test]
    fn json_description_round_trip() {
        let json = r#"{
            "mode": "directed",
            "nodes": [{"id": 0, "position": [150.0, 100.0]}, {"id": 1}],
            "edges": [{"from": 0, "to": 1}]
        }"#;
        let graph: EdgeListGraph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.mode(), GraphMode::Directed);
        assert_eq!(graph.edge_slice(), &[WeightedEdge::new(0, 1, 1)]);
        assert_eq!(graph.nodes()[0].position, Some([150.0, 100.0]));

        let description = GraphDescription::from(graph);
        assert_eq!(description.nodes.len(), 2);
    }

    #[test]
    fn json_without_nodes_deduces_them() {
        let json = r#"{"edges": [{"from": 4, "to": 2}, {"from": 2, "to": 9}]}"#;
        let graph: EdgeListGraph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.mode(), GraphMode::Undirected);
        assert_eq!(graph.vertices().collect_vec(), vec![4, 2, 9]);
    }
}
