use ahash::{HashSet, HashSetExt};
use serde::{Deserialize, Serialize};

use crate::graphs::Vertex;

/// The set of finalized vertices of a search. Once a vertex is expanded its
/// distance or key is never changed again.
pub trait VertexExpandedData {
    /// Marks `vertex` as expanded and returns whether it already was.
    fn expand(&mut self, vertex: Vertex) -> bool;

    fn is_expanded(&self, vertex: Vertex) -> bool;

    fn number_of_expanded(&self) -> usize;

    fn clear(&mut self);
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VertexExpandedDataHashSet {
    expanded: HashSet<Vertex>,
}

impl VertexExpandedDataHashSet {
    pub fn new() -> Self {
        VertexExpandedDataHashSet {
            expanded: HashSet::new(),
        }
    }
}

impl VertexExpandedData for VertexExpandedDataHashSet {
    fn expand(&mut self, vertex: Vertex) -> bool {
        !self.expanded.insert(vertex)
    }

    fn is_expanded(&self, vertex: Vertex) -> bool {
        self.expanded.contains(&vertex)
    }

    fn number_of_expanded(&self) -> usize {
        self.expanded.len()
    }

    fn clear(&mut self) {
        self.expanded.clear();
    }
}

/// Dense variant for graphs whose vertex ids are `0..number_of_vertices`.
pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
    number_of_expanded: usize,
}

impl VertexExpandedDataVec {
    pub fn new(number_of_vertices: u32) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; number_of_vertices as usize],
            number_of_expanded: 0,
        }
    }
}

impl VertexExpandedData for VertexExpandedDataVec {
    fn expand(&mut self, vertex: Vertex) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        if !is_expanded {
            self.number_of_expanded += 1;
        }
        self.expanded[vertex as usize] = true;
        is_expanded
    }

    fn is_expanded(&self, vertex: Vertex) -> bool {
        self.expanded
            .get(vertex as usize)
            .copied()
            .unwrap_or(false)
    }

    fn number_of_expanded(&self) -> usize {
        self.number_of_expanded
    }

    fn clear(&mut self) {
        self.expanded.fill(false);
        self.number_of_expanded = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{VertexExpandedData, VertexExpandedDataHashSet, VertexExpandedDataVec};

    fn exercise(expanded: &mut dyn VertexExpandedData) {
        assert!(!expanded.expand(2));
        assert!(expanded.expand(2));
        assert!(expanded.is_expanded(2));
        assert!(!expanded.is_expanded(1));
        assert_eq!(expanded.number_of_expanded(), 1);

        expanded.clear();
        assert!(!expanded.is_expanded(2));
        assert_eq!(expanded.number_of_expanded(), 0);
    }

    #[test]
    fn expand_reports_previous_state() {
        exercise(&mut VertexExpandedDataHashSet::new());
        exercise(&mut VertexExpandedDataVec::new(4));
    }
}
