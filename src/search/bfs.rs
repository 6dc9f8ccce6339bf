use std::collections::VecDeque;

use ahash::HashMap;
use serde::Serialize;

use super::{
    collections::predecessors::Predecessors,
    trace::{SearchEvent, SearchObserver},
    PathFinding,
};
use crate::graphs::{path::Path, Distance, Graph, Vertex};

/// Result of a breadth-first search.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BfsData {
    /// Vertices in the order they were discovered.
    pub visit_order: Vec<Vertex>,
    pub predecessors: Predecessors,
    /// Number of edges on a shortest path from the source.
    pub hops: HashMap<Vertex, u32>,
}

impl BfsData {
    pub fn hops(&self, vertex: Vertex) -> Option<u32> {
        self.hops.get(&vertex).copied()
    }

    pub fn get_path(&self, target: Vertex) -> Option<Path> {
        let distance = Distance::from(self.hops(target)?);
        let vertices = self.predecessors.path_vertices(target)?;
        Some(Path { vertices, distance })
    }
}

pub fn bfs(graph: &dyn Graph, source: Vertex) -> BfsData {
    breadth_first(graph, source, None, &mut ())
}

pub fn bfs_observed(
    graph: &dyn Graph,
    source: Vertex,
    observer: &mut dyn SearchObserver,
) -> BfsData {
    breadth_first(graph, source, None, observer)
}

/// Runs the same traversal as [`bfs`] but stops as soon as `target` leaves
/// the queue. The returned path has the minimal number of edges.
pub fn bfs_shortest_path(graph: &dyn Graph, source: Vertex, target: Vertex) -> Option<Path> {
    breadth_first(graph, source, Some(target), &mut ()).get_path(target)
}

#[tracing::instrument(skip(graph, observer))]
fn breadth_first(
    graph: &dyn Graph,
    source: Vertex,
    target: Option<Vertex>,
    observer: &mut dyn SearchObserver,
) -> BfsData {
    let mut data = BfsData::default();
    if !graph.contains(source) {
        tracing::debug!("source is not part of the graph");
        return data;
    }

    let mut queue = VecDeque::new();
    data.hops.insert(source, 0);
    data.visit_order.push(source);
    queue.push_back(source);
    observer.observe(SearchEvent::Discovered {
        vertex: source,
        predecessor: None,
        time: 0,
    });

    while let Some(tail) = queue.pop_front() {
        let hops_tail = data.hops[&tail];
        observer.observe(SearchEvent::Expanded {
            vertex: tail,
            distance: hops_tail as Distance,
        });

        if Some(tail) == target {
            break;
        }

        for edge in graph.neighbors(tail) {
            let head = edge.head();
            if data.hops.contains_key(&head) {
                continue;
            }

            data.hops.insert(head, hops_tail + 1);
            data.predecessors.set(head, tail);
            data.visit_order.push(head);
            queue.push_back(head);
            observer.observe(SearchEvent::Discovered {
                vertex: head,
                predecessor: Some(tail),
                time: data.visit_order.len() as u32 - 1,
            });
        }
    }

    tracing::debug!(visited = data.visit_order.len(), "breadth-first search done");
    data
}

/// Unweighted shortest paths by breadth-first search.
pub struct BreadthFirstSearch<'a> {
    pub graph: &'a dyn Graph,
}

impl PathFinding for BreadthFirstSearch<'_> {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        bfs_shortest_path(self.graph, source, target)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{bfs, bfs_observed, bfs_shortest_path};
    use crate::{
        graphs::{
            edge::WeightedEdge, edge_list_graph::EdgeListGraph, samples::traversal_graph,
            GraphMode,
        },
        search::trace::SearchEvent,
    };

    #[test]
    fn sample_graph_visit_order_and_hops() {
        let graph = traversal_graph();
        let data = bfs(&graph, 0);

        assert_eq!(data.visit_order, vec![0, 1, 3, 2, 4, 5, 6]);
        let hops = (0..7).map(|vertex| data.hops(vertex).unwrap()).collect_vec();
        assert_eq!(hops, vec![0, 1, 2, 1, 2, 2, 3]);
        assert_eq!(data.predecessors.get(0), None);
        assert_eq!(data.predecessors.get(5), Some(3));
    }

    #[test]
    fn sample_graph_shortest_path() {
        let graph = traversal_graph();
        let path = bfs_shortest_path(&graph, 0, 6).unwrap();

        assert_eq!(path.vertices, vec![0, 3, 4, 6]);
        assert_eq!(path.distance, 3);
    }

    #[test]
    fn isolated_source() {
        let graph = EdgeListGraph::new(
            GraphMode::Undirected,
            vec![crate::graphs::Node::new(0), crate::graphs::Node::new(1)],
            vec![],
        )
        .unwrap();
        let data = bfs(&graph, 0);

        assert_eq!(data.visit_order, vec![0]);
        assert_eq!(data.hops(0), Some(0));
        assert_eq!(data.hops.len(), 1);
        assert_eq!(bfs_shortest_path(&graph, 0, 1), None);
    }

    #[test]
    fn unknown_source_gives_empty_result() {
        let graph = traversal_graph();
        let data = bfs(&graph, 42);

        assert!(data.visit_order.is_empty());
        assert_eq!(bfs_shortest_path(&graph, 42, 0), None);
    }

    #[test]
    fn directed_mode_respects_edge_direction() {
        let graph = EdgeListGraph::from_edges(
            GraphMode::Directed,
            vec![WeightedEdge::unweighted(1, 0), WeightedEdge::unweighted(1, 2)],
        );

        assert_eq!(bfs(&graph, 0).visit_order, vec![0]);
        assert_eq!(bfs(&graph, 1).visit_order, vec![1, 0, 2]);
    }

    #[test]
    fn trace_expands_in_visit_order() {
        let graph = traversal_graph();
        let mut events = Vec::new();
        let data = bfs_observed(&graph, 0, &mut events);

        let expanded = events
            .iter()
            .filter_map(|event| match event {
                SearchEvent::Expanded { vertex, .. } => Some(*vertex),
                _ => None,
            })
            .collect_vec();
        assert_eq!(expanded, data.visit_order);
    }
}
