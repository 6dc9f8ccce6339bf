use ahash::{HashMap, HashMapExt};

use crate::graphs::Vertex;

/// Disjoint sets over a fixed vertex set, with path compression and union by
/// rank.
#[derive(Clone, Debug)]
pub struct UnionFind {
    index: HashMap<Vertex, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(vertices: impl Iterator<Item = Vertex>) -> UnionFind {
        let mut index = HashMap::new();
        for vertex in vertices {
            let next = index.len();
            index.entry(vertex).or_insert(next);
        }

        UnionFind {
            parent: (0..index.len()).collect(),
            rank: vec![0; index.len()],
            index,
        }
    }

    fn root(&mut self, mut element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // path compression
        while self.parent[element] != root {
            let next = self.parent[element];
            self.parent[element] = root;
            element = next;
        }

        root
    }

    /// Representative of the set containing `vertex`, `None` for vertices
    /// outside the universe.
    pub fn find(&mut self, vertex: Vertex) -> Option<usize> {
        let element = *self.index.get(&vertex)?;
        Some(self.root(element))
    }

    /// Merges the sets of `a` and `b`. Returns false if they already were the
    /// same set or one of them is unknown.
    pub fn union(&mut self, a: Vertex, b: Vertex) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        true
    }

    pub fn connected(&mut self, a: Vertex, b: Vertex) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UnionFind;

    #[test]
    fn union_merges_and_detects_cycles() {
        let mut sets = UnionFind::new([10, 20, 30, 40].into_iter());

        assert!(sets.union(10, 20));
        assert!(sets.union(30, 40));
        assert!(!sets.connected(10, 40));
        assert!(sets.union(20, 30));
        assert!(sets.connected(10, 40));
        assert!(!sets.union(40, 10));
    }

    #[test]
    fn unknown_vertices_are_never_merged() {
        let mut sets = UnionFind::new([0, 1].into_iter());
        assert_eq!(sets.find(7), None);
        assert!(!sets.union(0, 7));
    }
}
