//! The small example graphs the algorithm catalog ships with. Node positions
//! are the catalog's drawing coordinates.

use super::{edge::WeightedEdge, edge_list_graph::EdgeListGraph, GraphMode, Node};

fn build(mode: GraphMode, nodes: Vec<Node>, edges: Vec<WeightedEdge>) -> EdgeListGraph {
    EdgeListGraph::new(mode, nodes, edges)
        .unwrap_or_else(|error| panic!("sample graph is malformed: {}", error))
}

/// Seven vertices, unweighted, undirected. Used by the traversal pages.
pub fn traversal_graph() -> EdgeListGraph {
    let nodes = vec![
        Node::with_position(0, 150.0, 100.0),
        Node::with_position(1, 300.0, 50.0),
        Node::with_position(2, 450.0, 100.0),
        Node::with_position(3, 300.0, 150.0),
        Node::with_position(4, 150.0, 250.0),
        Node::with_position(5, 450.0, 250.0),
        Node::with_position(6, 300.0, 300.0),
    ];
    let edges = [
        (0, 1),
        (0, 3),
        (1, 2),
        (1, 3),
        (2, 5),
        (3, 4),
        (3, 5),
        (4, 6),
        (5, 6),
    ]
    .into_iter()
    .map(|(tail, head)| WeightedEdge::unweighted(tail, head))
    .collect();

    build(GraphMode::Undirected, nodes, edges)
}

/// Six vertices, weighted, undirected. Used by the Dijkstra page.
pub fn dijkstra_graph() -> EdgeListGraph {
    let nodes = vec![
        Node::with_position(0, 150.0, 100.0),
        Node::with_position(1, 300.0, 50.0),
        Node::with_position(2, 450.0, 100.0),
        Node::with_position(3, 300.0, 150.0),
        Node::with_position(4, 150.0, 250.0),
        Node::with_position(5, 450.0, 250.0),
    ];
    let edges = vec![
        WeightedEdge::new(0, 1, 4),
        WeightedEdge::new(0, 3, 2),
        WeightedEdge::new(1, 2, 3),
        WeightedEdge::new(1, 3, 1),
        WeightedEdge::new(2, 5, 5),
        WeightedEdge::new(3, 4, 8),
        WeightedEdge::new(3, 5, 7),
        WeightedEdge::new(4, 5, 6),
    ];

    build(GraphMode::Undirected, nodes, edges)
}

/// Five vertices, weighted, undirected. Shared by the Prim and Kruskal pages.
pub fn spanning_tree_graph() -> EdgeListGraph {
    let nodes = vec![
        Node::with_position(0, 200.0, 100.0),
        Node::with_position(1, 400.0, 50.0),
        Node::with_position(2, 400.0, 150.0),
        Node::with_position(3, 200.0, 250.0),
        Node::with_position(4, 100.0, 150.0),
    ];
    let edges = vec![
        WeightedEdge::new(0, 1, 4),
        WeightedEdge::new(0, 2, 2),
        WeightedEdge::new(0, 4, 5),
        WeightedEdge::new(1, 2, 1),
        WeightedEdge::new(1, 3, 3),
        WeightedEdge::new(2, 3, 6),
        WeightedEdge::new(2, 4, 3),
        WeightedEdge::new(3, 4, 4),
    ];

    build(GraphMode::Undirected, nodes, edges)
}

/// Four vertices, weighted, directed. Used by the Floyd-Warshall page.
pub fn all_pairs_graph() -> EdgeListGraph {
    let nodes = vec![
        Node::with_position(0, 200.0, 100.0),
        Node::with_position(1, 400.0, 50.0),
        Node::with_position(2, 400.0, 150.0),
        Node::with_position(3, 200.0, 250.0),
    ];
    let edges = vec![
        WeightedEdge::new(0, 1, 3),
        WeightedEdge::new(0, 2, 8),
        WeightedEdge::new(0, 3, 7),
        WeightedEdge::new(1, 2, 1),
        WeightedEdge::new(2, 3, 2),
        WeightedEdge::new(3, 1, 4),
    ];

    build(GraphMode::Directed, nodes, edges)
}
