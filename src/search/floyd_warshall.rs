use ahash::{HashMap, HashMapExt};
use itertools::{iproduct, Itertools};
use serde::Serialize;

use super::PathFinding;
use crate::graphs::{path::Path, Distance, Graph, Vertex};

/// All-pairs shortest path distances plus a next-hop matrix for path
/// reconstruction. Rows and columns follow the graph's vertex order.
#[derive(Clone, Debug, Serialize)]
pub struct AllPairs {
    pub vertices: Vec<Vertex>,
    pub distances: Vec<Vec<Distance>>,
    next_hops: Vec<Vec<Option<usize>>>,
    #[serde(skip)]
    index: HashMap<Vertex, usize>,
}

impl AllPairs {
    /// Distance from `from` to `to`, `None` if there is no path or either
    /// vertex is unknown.
    pub fn distance(&self, from: Vertex, to: Vertex) -> Option<Distance> {
        let distance = self.distances[*self.index.get(&from)?][*self.index.get(&to)?];
        (distance != Distance::MAX).then_some(distance)
    }

    pub fn path(&self, from: Vertex, to: Vertex) -> Option<Path> {
        let distance = self.distance(from, to)?;
        let to_index = self.index[&to];

        let mut current = self.index[&from];
        let mut vertices = vec![self.vertices[current]];
        while current != to_index {
            current = self.next_hops[current][to_index]?;
            vertices.push(self.vertices[current]);
            if vertices.len() > self.vertices.len() {
                return None;
            }
        }

        Some(Path { vertices, distance })
    }
}

impl PathFinding for AllPairs {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        self.path(source, target)
    }

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<Distance> {
        self.distance(source, target)
    }
}

/// Floyd-Warshall over the neighbor relation of `graph`, so undirected graphs
/// contribute both directions of each edge. Parallel edges count with their
/// cheapest weight.
#[tracing::instrument(skip(graph), fields(vertices = graph.number_of_vertices()))]
pub fn floyd_warshall(graph: &dyn Graph) -> AllPairs {
    let vertices = graph.vertices().collect_vec();
    let n = vertices.len();
    let mut index = HashMap::with_capacity(n);
    for (position, vertex) in vertices.iter().enumerate() {
        index.insert(*vertex, position);
    }

    let mut distances = vec![vec![Distance::MAX; n]; n];
    let mut next_hops = vec![vec![None; n]; n];
    for (i, vertex) in vertices.iter().enumerate() {
        distances[i][i] = 0;
        next_hops[i][i] = Some(i);

        for edge in graph.neighbors(*vertex) {
            let j = index[&edge.head()];
            let weight = Distance::from(edge.weight());
            if i != j && weight < distances[i][j] {
                distances[i][j] = weight;
                next_hops[i][j] = Some(j);
            }
        }
    }

    for (k, i, j) in iproduct!(0..n, 0..n, 0..n) {
        if i == k || j == k || i == j {
            continue;
        }

        let via = distances[i][k].saturating_add(distances[k][j]);
        if via < distances[i][j] {
            distances[i][j] = via;
            next_hops[i][j] = next_hops[i][k];
        }
    }

    AllPairs {
        vertices,
        distances,
        next_hops,
        index,
    }
}

#[cfg(test)]
mod tests {
    use super::floyd_warshall;
    use crate::{
        graphs::{
            edge::WeightedEdge,
            edge_list_graph::EdgeListGraph,
            samples::{all_pairs_graph, dijkstra_graph},
            GraphMode,
        },
        search::{dijkstra::dijkstra, PathFinding},
    };

    #[test]
    fn sample_graph_matrix() {
        let all_pairs = floyd_warshall(&all_pairs_graph());

        assert_eq!(all_pairs.distance(0, 1), Some(3));
        assert_eq!(all_pairs.distance(0, 2), Some(4));
        assert_eq!(all_pairs.distance(0, 3), Some(6));
        assert_eq!(all_pairs.distance(3, 2), Some(5));
        assert_eq!(all_pairs.distance(3, 0), None);
        assert_eq!(all_pairs.distance(2, 2), Some(0));
        assert_eq!(all_pairs.distance(0, 9), None);
    }

    #[test]
    fn sample_graph_paths() {
        let all_pairs = floyd_warshall(&all_pairs_graph());

        let path = all_pairs.shortest_path(0, 3).unwrap();
        assert_eq!(path.vertices, vec![0, 1, 2, 3]);
        assert_eq!(path.distance, 6);
        assert_eq!(all_pairs.path(1, 1).unwrap().vertices, vec![1]);
        assert_eq!(all_pairs.path(2, 0), None);
    }

    #[test]
    fn agrees_with_dijkstra_on_undirected_graph() {
        let graph = dijkstra_graph();
        let all_pairs = floyd_warshall(&graph);

        for source in 0..6 {
            let space = dijkstra(&graph, source);
            for target in 0..6 {
                assert_eq!(
                    all_pairs.distance(source, target),
                    Some(space.distance(target))
                );
            }
        }
    }

    #[test]
    fn long_distances_do_not_saturate() {
        let graph = EdgeListGraph::from_edges(
            GraphMode::Directed,
            vec![
                WeightedEdge::new(0, 1, 3_000_000_000),
                WeightedEdge::new(1, 2, 3_000_000_000),
            ],
        );
        let all_pairs = floyd_warshall(&graph);

        assert_eq!(all_pairs.distance(0, 2), Some(6_000_000_000));
        assert_eq!(all_pairs.path(0, 2).unwrap().vertices, vec![0, 1, 2]);
        assert_eq!(all_pairs.distance(2, 0), None);
    }
}
