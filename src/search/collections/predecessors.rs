use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use crate::graphs::Vertex;

/// Walks predecessor links from `target` back to the root of the search tree
/// and returns the vertices in source-to-target order.
///
/// `max_links` bounds the walk; a chain longer than that can only come from a
/// cycle in the predecessor links, in which case `None` is returned.
pub fn walk_predecessors<F>(target: Vertex, max_links: usize, predecessor: F) -> Option<Vec<Vertex>>
where
    F: Fn(Vertex) -> Option<Vertex>,
{
    let mut vertices = vec![target];

    let mut current = target;
    while let Some(next) = predecessor(current) {
        if vertices.len() > max_links {
            return None;
        }
        vertices.push(next);
        current = next;
    }

    vertices.reverse();
    Some(vertices)
}

/// Predecessor links of a search tree. The root has no entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Predecessors {
    predecessors: HashMap<Vertex, Vertex>,
}

impl Predecessors {
    pub fn new() -> Self {
        Predecessors {
            predecessors: HashMap::new(),
        }
    }

    pub fn clear(&mut self) {
        self.predecessors.clear();
    }

    pub fn get(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors.get(&vertex).copied()
    }

    pub fn set(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors.insert(vertex, predecessor);
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Vertices from the root to `target`. The caller decides whether
    /// `target` was reached at all; an unreached vertex yields `[target]`.
    pub fn path_vertices(&self, target: Vertex) -> Option<Vec<Vertex>> {
        walk_predecessors(target, self.len(), |vertex| self.get(vertex))
    }
}
