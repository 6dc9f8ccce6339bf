use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use super::predecessors::{walk_predecessors, Predecessors};
use crate::graphs::{path::Path, Distance, Vertex};

/// Trait for handling data access in Dijkstra's and Prim's algorithm.
///
/// For Prim's algorithm the stored "distance" is the key of a vertex: the
/// cheapest known edge connecting it to the growing tree.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    /// Retrieves the distance to a given vertex, `Distance::MAX` if unknown.
    fn get_distance(&self, vertex: Vertex) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: Vertex, distance: Distance);

    /// Number of vertices that have a predecessor.
    fn number_of_predecessors(&self) -> usize;

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target);
        if distance == Distance::MAX {
            return None;
        }

        let vertices = walk_predecessors(target, self.number_of_predecessors(), |vertex| {
            self.get_predecessor(vertex)
        })?;

        Some(Path { vertices, distance })
    }
}

/// Distances and predecessors keyed by vertex id. Works for any id space.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DijkstraDataMap {
    pub predecessors: Predecessors,
    pub distances: HashMap<Vertex, Distance>,
}

impl DijkstraDataMap {
    pub fn new() -> Self {
        DijkstraDataMap {
            predecessors: Predecessors::new(),
            distances: HashMap::new(),
        }
    }
}

impl DijkstraData for DijkstraDataMap {
    fn clear(&mut self) {
        self.predecessors.clear();
        self.distances.clear();
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors.get(vertex)
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors.set(vertex, predecessor);
    }

    fn get_distance(&self, vertex: Vertex) -> Distance {
        *self.distances.get(&vertex).unwrap_or(&Distance::MAX)
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances.insert(vertex, distance);
    }

    fn number_of_predecessors(&self) -> usize {
        self.predecessors.len()
    }
}

/// Distances and predecessors in dense vectors. Only valid for graphs whose
/// vertex ids are `0..number_of_vertices`.
pub struct DijkstraDataVec {
    pub predecessors: Vec<Vertex>,
    pub distances: Vec<Distance>,
    number_of_predecessors: usize,
}

impl DijkstraDataVec {
    pub fn new(number_of_vertices: u32) -> Self {
        DijkstraDataVec {
            predecessors: vec![Vertex::MAX; number_of_vertices as usize],
            distances: vec![Distance::MAX; number_of_vertices as usize],
            number_of_predecessors: 0,
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn clear(&mut self) {
        self.predecessors.fill(Vertex::MAX);
        self.distances.fill(Distance::MAX);
        self.number_of_predecessors = 0;
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let predecessor = *self.predecessors.get(vertex as usize)?;

        if predecessor == Vertex::MAX {
            return None;
        }

        Some(predecessor)
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        if self.predecessors[vertex as usize] == Vertex::MAX {
            self.number_of_predecessors += 1;
        }
        self.predecessors[vertex as usize] = predecessor;
    }

    fn get_distance(&self, vertex: Vertex) -> Distance {
        self.distances
            .get(vertex as usize)
            .copied()
            .unwrap_or(Distance::MAX)
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance
    }

    fn number_of_predecessors(&self) -> usize {
        self.number_of_predecessors
    }
}
