use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use rand::prelude::*;

use super::{edge::WeightedEdge, edge_list_graph::EdgeListGraph, GraphMode, Node, Weight};
use crate::error::GraphError;

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Reads a graph, choosing the format by file extension.
    pub fn from_file(path: &Path) -> Result<EdgeListGraph, GraphError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_json_file(path),
            Some("bincode") => Self::from_bincode_file(path),
            _ => Err(GraphError::UnsupportedFileExtension(path.to_path_buf())),
        }
    }

    pub fn from_json_file(path: &Path) -> Result<EdgeListGraph, GraphError> {
        let reader = BufReader::new(File::open(path)?);
        let graph = serde_json::from_reader(reader)?;
        tracing::debug!(?path, "read json graph");
        Ok(graph)
    }

    pub fn from_bincode_file(path: &Path) -> Result<EdgeListGraph, GraphError> {
        let reader = BufReader::new(File::open(path)?);
        let graph = bincode::deserialize_from(reader)?;
        tracing::debug!(?path, "read bincode graph");
        Ok(graph)
    }

    /// Writes a graph, choosing the format by file extension.
    pub fn to_file(graph: &EdgeListGraph, path: &Path) -> Result<(), GraphError> {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => {
                let writer = BufWriter::new(File::create(path)?);
                serde_json::to_writer_pretty(writer, graph)?;
            }
            Some("bincode") => {
                let writer = BufWriter::new(File::create(path)?);
                bincode::serialize_into(writer, graph)?;
            }
            _ => return Err(GraphError::UnsupportedFileExtension(path.to_path_buf())),
        }
        Ok(())
    }

    /// Random graph on the vertices `0..number_of_vertices`. Every unordered
    /// pair (ordered pair when directed) becomes an edge with probability
    /// `edge_probability` (clamped to `[0, 1]`), weights are drawn from
    /// `1..=max_weight`.
    pub fn random<R: Rng>(
        rng: &mut R,
        mode: GraphMode,
        number_of_vertices: u32,
        edge_probability: f64,
        max_weight: Weight,
    ) -> EdgeListGraph {
        let max_weight = max_weight.max(1);
        let edge_probability = clamp_probability(edge_probability);
        let mut edges = Vec::new();
        for tail in 0..number_of_vertices {
            for head in 0..number_of_vertices {
                let considered = match mode {
                    GraphMode::Directed => tail != head,
                    GraphMode::Undirected => tail < head,
                };
                if considered && rng.gen_bool(edge_probability) {
                    edges.push(WeightedEdge::new(tail, head, rng.gen_range(1..=max_weight)));
                }
            }
        }
        edges.shuffle(rng);

        Self::with_vertices(mode, number_of_vertices, edges)
    }

    /// Like [`GraphFactory::random`] but undirected and connected: a random
    /// spanning tree is laid down first.
    pub fn random_connected<R: Rng>(
        rng: &mut R,
        number_of_vertices: u32,
        edge_probability: f64,
        max_weight: Weight,
    ) -> EdgeListGraph {
        let max_weight = max_weight.max(1);
        let edge_probability = clamp_probability(edge_probability);
        let mut edges = Vec::new();
        for head in 1..number_of_vertices {
            let tail = rng.gen_range(0..head);
            edges.push(WeightedEdge::new(tail, head, rng.gen_range(1..=max_weight)));
        }
        for tail in 0..number_of_vertices {
            for head in (tail + 1)..number_of_vertices {
                if rng.gen_bool(edge_probability) {
                    edges.push(WeightedEdge::new(tail, head, rng.gen_range(1..=max_weight)));
                }
            }
        }
        edges.shuffle(rng);

        Self::with_vertices(GraphMode::Undirected, number_of_vertices, edges)
    }

    fn with_vertices(
        mode: GraphMode,
        number_of_vertices: u32,
        edges: Vec<WeightedEdge>,
    ) -> EdgeListGraph {
        let nodes = (0..number_of_vertices).map(Node::new).collect();
        EdgeListGraph::new(mode, nodes, edges)
            .unwrap_or_else(|error| panic!("generated graph is malformed: {}", error))
    }
}

fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use rand::{rngs::StdRng, SeedableRng};

    use super::GraphFactory;
    use crate::{
        error::GraphError,
        graphs::{Graph, GraphMode},
        search::bfs::bfs,
    };

    #[test]
    fn random_connected_graph_is_connected() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let graph = GraphFactory::random_connected(&mut rng, 8, 0.2, 9);
            assert_eq!(graph.number_of_vertices(), 8);
            assert_eq!(bfs(&graph, 0).visit_order.len(), 8);
            assert!(graph.edges().all(|edge| (1..=9).contains(&edge.weight())));
        }
    }

    #[test]
    fn random_graph_respects_mode() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = GraphFactory::random(&mut rng, GraphMode::Undirected, 6, 1.0, 3);
        assert_eq!(graph.number_of_edges(), 15);

        let graph = GraphFactory::random(&mut rng, GraphMode::Directed, 6, 1.0, 3);
        assert_eq!(graph.number_of_edges(), 30);
    }

    #[test]
    fn out_of_range_probabilities_are_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let graph = GraphFactory::random(&mut rng, GraphMode::Undirected, 5, 1.5, 4);
        assert_eq!(graph.number_of_edges(), 10);

        let graph = GraphFactory::random(&mut rng, GraphMode::Directed, 5, -0.5, 4);
        assert_eq!(graph.number_of_edges(), 0);

        let graph = GraphFactory::random_connected(&mut rng, 5, f64::NAN, 4);
        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    fn unsupported_extension() {
        let result = GraphFactory::from_file(Path::new("graph.fmi"));
        assert!(matches!(
            result,
            Err(GraphError::UnsupportedFileExtension(_))
        ));
    }
}
