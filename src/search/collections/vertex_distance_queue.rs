use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{Distance, Vertex};

/// A trait for a priority queue that manages vertices and their distances.
/// This trait is useful for graph algorithms that need to repeatedly retrieve
/// the vertex with the smallest distance (such as Dijkstra's algorithm).
///
/// Implementations never decrease keys. A vertex may be inserted several
/// times and the caller discards stale entries on pop.
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns the entry with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<(Vertex, Distance)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A priority queue implementation using a Binary Heap. Entries with equal
/// distance leave the queue in insertion order.
#[derive(Clone, Debug, Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, u64, Vertex)>>,
    insertions: u64,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
            insertions: 0,
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
        self.insertions = 0;
    }

    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(Reverse((distance, self.insertions, vertex)));
        self.insertions += 1;
    }

    fn pop(&mut self) -> Option<(Vertex, Distance)> {
        let Reverse((distance, _insertion, vertex)) = self.heap.pop()?;

        Some((vertex, distance))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap};

    #[test]
    fn pops_ascending_with_fifo_ties() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(9, 3);
        queue.insert(4, 1);
        queue.insert(7, 3);
        queue.insert(2, 3);
        queue.insert(5, 0);

        let popped: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(popped, vec![(5, 0), (4, 1), (9, 3), (7, 3), (2, 3)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn keeps_duplicate_entries() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(1, 4);
        queue.insert(1, 3);

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some((1, 3)));
        assert_eq!(queue.pop(), Some((1, 4)));
        assert_eq!(queue.pop(), None);
    }
}
