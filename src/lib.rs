use clap::ValueEnum;
use graphs::{Graph, Vertex};
use search::{
    bfs::BreadthFirstSearch, dfs::DepthFirstSearch, dijkstra::Dijkstra,
    floyd_warshall::floyd_warshall, PathFinding,
};

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

/// The path searches that can answer a [`ShortestPathRequest`](graphs::path::ShortestPathRequest).
#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum PathFinder {
    Bfs,
    Dfs,
    Dijkstra,
    FloydWarshall,
}

impl PathFinder {
    /// Whether the finder's paths are minimal in its own metric.
    pub fn is_exact(&self) -> bool {
        !matches!(self, PathFinder::Dfs)
    }
}

pub fn build_pathfinder<'a>(graph: &'a dyn Graph, finder: PathFinder) -> Box<dyn PathFinding + 'a> {
    let pathfinder: Box<dyn PathFinding + 'a> = match finder {
        PathFinder::Bfs => Box::new(BreadthFirstSearch { graph }),
        PathFinder::Dfs => Box::new(DepthFirstSearch { graph }),
        PathFinder::Dijkstra => Box::new(Dijkstra { graph }),
        PathFinder::FloydWarshall => {
            let all_pairs = floyd_warshall(graph);
            tracing::debug!(vertices = all_pairs.vertices.len(), "precomputed all pairs");
            Box::new(all_pairs)
        }
    };
    pathfinder
}

/// Answers a batch of requests with the chosen finder.
pub fn find_paths(
    graph: &dyn Graph,
    finder: PathFinder,
    requests: &[(Vertex, Vertex)],
) -> Vec<Option<graphs::path::Path>> {
    let pathfinder = build_pathfinder(graph, finder);
    requests
        .iter()
        .map(|&(source, target)| pathfinder.shortest_path(source, target))
        .collect()
}
