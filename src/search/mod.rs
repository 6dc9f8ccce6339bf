use crate::graphs::{path::Path, Distance, Vertex};

pub mod bfs;
pub mod collections;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod kruskal;
pub mod prim;
pub mod trace;

/// Anything that answers path queries between two vertices.
pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path>;

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Option<Distance> {
        self.shortest_path(source, target).map(|path| path.distance)
    }
}
