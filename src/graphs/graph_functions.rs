use ahash::{HashMap, HashMapExt, HashSet, HashSetExt};
use itertools::Itertools;
use rand::prelude::*;

use super::{
    edge::WeightedEdge,
    path::{Path, ShortestPathRequest},
    Distance, Graph, Vertex,
};
use crate::{error::PathValidationError, search::collections::union_find::UnionFind};

/// Checks that `path` answers `request` and only uses edges of `graph`.
/// Returns the summed weight of the cheapest edges along the path.
pub fn validate_path(
    graph: &dyn Graph,
    request: &ShortestPathRequest,
    path: &Path,
) -> Result<Distance, PathValidationError> {
    // Ensure first and last vertex of path are source and target of request.
    let (Some(&first), Some(&last)) = (path.vertices.first(), path.vertices.last()) else {
        return Err(PathValidationError::Empty);
    };
    if first != request.source() {
        return Err(PathValidationError::WrongSource {
            expected: request.source(),
            found: first,
        });
    }
    if last != request.target() {
        return Err(PathValidationError::WrongTarget {
            expected: request.target(),
            found: last,
        });
    }

    // check if there is an edge between consecutive path vertices.
    let mut weight: Distance = 0;
    for (&tail, &head) in path.vertices.iter().tuple_windows() {
        let edge_weight = edge_weight(graph, tail, head)
            .ok_or(PathValidationError::MissingEdge { tail, head })?;
        weight = weight.saturating_add(edge_weight);
    }

    Ok(weight)
}

/// Weight of the cheapest edge leading from `tail` to `head`.
pub fn edge_weight(graph: &dyn Graph, tail: Vertex, head: Vertex) -> Option<Distance> {
    graph
        .neighbors(tail)
        .filter(|edge| edge.head() == head)
        .map(|edge| Distance::from(edge.weight()))
        .min()
}

/// Summed weight of a vertex sequence, `None` if two consecutive vertices are
/// not adjacent.
pub fn path_weight(graph: &dyn Graph, vertices: &[Vertex]) -> Option<Distance> {
    vertices
        .iter()
        .tuple_windows()
        .try_fold(0 as Distance, |weight, (&tail, &head)| {
            Some(weight.saturating_add(edge_weight(graph, tail, head)?))
        })
}

/// Shortest distances from `source` found by enumerating every simple path.
/// Exponential; only meant as an oracle on graphs with a handful of vertices.
pub fn brute_force_distances(graph: &dyn Graph, source: Vertex) -> HashMap<Vertex, Distance> {
    fn explore(
        graph: &dyn Graph,
        vertex: Vertex,
        distance: Distance,
        on_path: &mut HashSet<Vertex>,
        best: &mut HashMap<Vertex, Distance>,
    ) {
        let entry = best.entry(vertex).or_insert(Distance::MAX);
        *entry = (*entry).min(distance);

        for edge in graph.neighbors(vertex) {
            if on_path.insert(edge.head()) {
                explore(
                    graph,
                    edge.head(),
                    distance.saturating_add(Distance::from(edge.weight())),
                    on_path,
                    best,
                );
                on_path.remove(&edge.head());
            }
        }
    }

    let mut best = HashMap::new();
    if graph.contains(source) {
        let mut on_path = HashSet::new();
        on_path.insert(source);
        explore(graph, source, 0, &mut on_path, &mut best);
    }
    best
}

/// Whether `edges` is a spanning tree of `graph`: exactly one edge less than
/// vertices, every edge present in the graph, and no cycle.
pub fn is_spanning_tree(graph: &dyn Graph, edges: &[WeightedEdge]) -> bool {
    let number_of_vertices = graph.number_of_vertices() as usize;
    if edges.len() != number_of_vertices.saturating_sub(1) {
        return false;
    }

    let graph_edges = graph.edges().collect_vec();
    let mut sets = UnionFind::new(graph.vertices());
    edges.iter().all(|edge| {
        let exists = graph_edges.iter().any(|graph_edge| {
            graph_edge.connects(edge.tail(), edge.head()) && graph_edge.weight() == edge.weight()
        });
        exists && sets.union(edge.tail(), edge.head())
    })
}

/// A random request with source != target, `None` if the graph has fewer
/// than two vertices.
pub fn random_request<R: Rng>(graph: &dyn Graph, rng: &mut R) -> Option<ShortestPathRequest> {
    let vertices = graph.vertices().collect_vec();
    if vertices.len() <= 1 {
        // not enough vertices to get a request with source != target
        return None;
    }

    let (source, target) = vertices
        .choose_multiple(rng, 2)
        .copied()
        .collect_tuple()?;
    Some(ShortestPathRequest::new(source, target))
}

#[cfg(test)]
mod tests {
    use super::{brute_force_distances, is_spanning_tree, path_weight, validate_path};
    use crate::{
        error::PathValidationError,
        graphs::{
            edge::WeightedEdge,
            edge_list_graph::EdgeListGraph,
            path::{Path, ShortestPathRequest},
            samples::{dijkstra_graph, spanning_tree_graph},
            GraphMode,
        },
    };

    #[test]
    fn validates_sample_path() {
        let graph = dijkstra_graph();
        let request = ShortestPathRequest::new(0, 5);

        let path = Path {
            vertices: vec![0, 3, 5],
            distance: 9,
        };
        assert_eq!(validate_path(&graph, &request, &path), Ok(9));

        let broken = Path {
            vertices: vec![0, 2, 5],
            distance: 8,
        };
        assert_eq!(
            validate_path(&graph, &request, &broken),
            Err(PathValidationError::MissingEdge { tail: 0, head: 2 })
        );

        let wrong_end = Path {
            vertices: vec![0, 3],
            distance: 2,
        };
        assert!(matches!(
            validate_path(&graph, &request, &wrong_end),
            Err(PathValidationError::WrongTarget { .. })
        ));
    }

    #[test]
    fn validates_paths_heavier_than_any_weight() {
        let graph = EdgeListGraph::from_edges(
            GraphMode::Undirected,
            vec![
                WeightedEdge::new(0, 1, 3_000_000_000),
                WeightedEdge::new(1, 2, 3_000_000_000),
            ],
        );
        let path = Path {
            vertices: vec![0, 1, 2],
            distance: 6_000_000_000,
        };

        let request = ShortestPathRequest::new(0, 2);
        assert_eq!(validate_path(&graph, &request, &path), Ok(6_000_000_000));
        assert_eq!(path_weight(&graph, &[2, 1, 0]), Some(6_000_000_000));
    }

    #[test]
    fn path_weight_of_sample_paths() {
        let graph = dijkstra_graph();
        assert_eq!(path_weight(&graph, &[0, 3, 1, 2, 5]), Some(11));
        assert_eq!(path_weight(&graph, &[4]), Some(0));
        assert_eq!(path_weight(&graph, &[0, 5]), None);
    }

    #[test]
    fn brute_force_on_sample_graph() {
        let distances = brute_force_distances(&dijkstra_graph(), 0);
        assert_eq!(distances[&5], 9);
        assert_eq!(distances[&2], 6);
        assert_eq!(distances.len(), 6);
    }

    #[test]
    fn spanning_tree_check() {
        let graph = spanning_tree_graph();
        let tree = vec![
            WeightedEdge::new(1, 2, 1),
            WeightedEdge::new(2, 0, 2),
            WeightedEdge::new(1, 3, 3),
            WeightedEdge::new(2, 4, 3),
        ];
        assert!(is_spanning_tree(&graph, &tree));

        let cyclic = vec![
            WeightedEdge::new(1, 2, 1),
            WeightedEdge::new(0, 2, 2),
            WeightedEdge::new(0, 1, 4),
            WeightedEdge::new(2, 4, 3),
        ];
        assert!(!is_spanning_tree(&graph, &cyclic));
        assert!(!is_spanning_tree(&graph, &tree[..3]));
    }
}
