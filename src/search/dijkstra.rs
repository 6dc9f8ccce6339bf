use serde::Serialize;

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataMap},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
    },
    trace::{SearchEvent, SearchObserver},
    PathFinding,
};
use crate::graphs::{path::Path, Distance, Graph, Vertex};

/// Core loop of Dijkstra's algorithm over caller supplied buffers, so that
/// repeated searches can reuse their allocations.
///
/// Stale queue entries are skipped on pop. If `target` is given the search
/// stops right after the target has been finalized.
pub fn dijkstra_with(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    target: Option<Vertex>,
    observer: &mut dyn SearchObserver,
) {
    if !graph.contains(source) {
        return;
    }

    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some((tail, queued_distance)) = queue.pop() {
        if expanded.expand(tail) {
            observer.observe(SearchEvent::Skipped {
                vertex: tail,
                distance: queued_distance,
            });
            continue;
        }

        let distance_tail = data.get_distance(tail);
        tracing::trace!(vertex = tail, distance = distance_tail, "expand");
        observer.observe(SearchEvent::Expanded {
            vertex: tail,
            distance: distance_tail,
        });

        if Some(tail) == target {
            break;
        }

        for edge in graph.neighbors(tail) {
            if expanded.is_expanded(edge.head()) {
                continue;
            }

            let current_distance_head = data.get_distance(edge.head());
            let alternative_distance_head = distance_tail.saturating_add(Distance::from(edge.weight()));
            if alternative_distance_head < current_distance_head {
                data.set_distance(edge.head(), alternative_distance_head);
                data.set_predecessor(edge.head(), tail);
                queue.insert(edge.head(), alternative_distance_head);
                observer.observe(SearchEvent::Relaxed {
                    vertex: edge.head(),
                    predecessor: tail,
                    distance: alternative_distance_head,
                });
            }
        }
    }
}

/// Distances, predecessors and the finalized set of one Dijkstra run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SearchSpace {
    pub data: DijkstraDataMap,
    pub expanded: VertexExpandedDataHashSet,
}

impl SearchSpace {
    /// Distance from the source, `Distance::MAX` if the vertex was not reached.
    pub fn distance(&self, vertex: Vertex) -> Distance {
        self.data.get_distance(vertex)
    }

    pub fn predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.data.get_predecessor(vertex)
    }

    pub fn is_finalized(&self, vertex: Vertex) -> bool {
        self.expanded.is_expanded(vertex)
    }

    pub fn get_path(&self, target: Vertex) -> Option<Path> {
        self.data.get_path(target)
    }
}

/// Single source shortest path distances to every reachable vertex.
pub fn dijkstra(graph: &dyn Graph, source: Vertex) -> SearchSpace {
    dijkstra_observed(graph, source, None, &mut ())
}

/// Like [`dijkstra`] but stops once `target` is finalized.
pub fn dijkstra_single_pair(graph: &dyn Graph, source: Vertex, target: Vertex) -> SearchSpace {
    dijkstra_observed(graph, source, Some(target), &mut ())
}

#[tracing::instrument(skip(graph, observer))]
pub fn dijkstra_observed(
    graph: &dyn Graph,
    source: Vertex,
    target: Option<Vertex>,
    observer: &mut dyn SearchObserver,
) -> SearchSpace {
    let mut space = SearchSpace::default();
    let mut queue = VertexDistanceQueueBinaryHeap::new();

    dijkstra_with(
        graph,
        &mut space.data,
        &mut space.expanded,
        &mut queue,
        source,
        target,
        observer,
    );

    tracing::debug!(
        finalized = space.expanded.number_of_expanded(),
        "dijkstra done"
    );
    space
}

pub fn shortest_path(graph: &dyn Graph, source: Vertex, target: Vertex) -> Option<Path> {
    dijkstra_single_pair(graph, source, target).get_path(target)
}

pub fn shortest_path_distance(graph: &dyn Graph, source: Vertex, target: Vertex) -> Option<Distance> {
    shortest_path(graph, source, target).map(|path| path.distance)
}

pub struct Dijkstra<'a> {
    pub graph: &'a dyn Graph,
}

impl PathFinding for Dijkstra<'_> {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        shortest_path(self.graph, source, target)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::{dijkstra, dijkstra_observed, dijkstra_single_pair, shortest_path};
    use crate::{
        graphs::{
            edge::WeightedEdge, edge_list_graph::EdgeListGraph, samples::dijkstra_graph,
            Distance, Graph, GraphMode,
        },
        search::{collections::vertex_expanded_data::VertexExpandedData, trace::SearchEvent},
    };

    #[test]
    fn sample_graph_distances() {
        let graph = dijkstra_graph();
        let space = dijkstra(&graph, 0);

        let distances = (0..6).map(|vertex| space.distance(vertex)).collect_vec();
        assert_eq!(distances, vec![0, 3, 6, 2, 10, 9]);
        assert!((0..6).all(|vertex| space.is_finalized(vertex)));
        assert_eq!(space.predecessor(0), None);
        assert_eq!(space.predecessor(1), Some(3));
    }

    #[test]
    fn sample_graph_path_to_target() {
        let graph = dijkstra_graph();
        let path = shortest_path(&graph, 0, 5).unwrap();

        assert_eq!(path.vertices, vec![0, 3, 5]);
        assert_eq!(path.distance, 9);
    }

    #[test]
    fn early_exit_leaves_far_vertices_unfinalized() {
        let graph = dijkstra_graph();
        let space = dijkstra_single_pair(&graph, 0, 1);

        assert_eq!(space.distance(1), 3);
        assert!(space.is_finalized(1));
        assert!(!space.is_finalized(4));
    }

    #[test]
    fn directed_sample_graph() {
        let graph = dijkstra_graph().with_mode(GraphMode::Directed);
        let space = dijkstra(&graph, 0);

        let distances = (0..6).map(|vertex| space.distance(vertex)).collect_vec();
        assert_eq!(distances, vec![0, 4, 7, 2, 10, 9]);
        assert_eq!(shortest_path(&graph, 5, 0), None);
    }

    #[test]
    fn unreachable_and_unknown_vertices() {
        let graph = EdgeListGraph::from_edges(
            GraphMode::Undirected,
            vec![WeightedEdge::new(0, 1, 2), WeightedEdge::new(2, 3, 2)],
        );

        let space = dijkstra(&graph, 0);
        assert_eq!(space.distance(3), Distance::MAX);
        assert_eq!(space.get_path(3), None);

        let space = dijkstra(&graph, 99);
        assert_eq!(space.distance(99), Distance::MAX);
        assert_eq!(space.expanded.number_of_expanded(), 0);
    }

    #[test]
    fn distances_beyond_the_weight_range_stay_reachable() {
        let graph = EdgeListGraph::from_edges(
            GraphMode::Undirected,
            vec![
                WeightedEdge::new(0, 1, 3_000_000_000),
                WeightedEdge::new(1, 2, 3_000_000_000),
            ],
        );
        let space = dijkstra(&graph, 0);

        assert_eq!(space.distance(2), 6_000_000_000);
        assert!(space.is_finalized(2));
        let path = shortest_path(&graph, 0, 2).unwrap();
        assert_eq!(path.vertices, vec![0, 1, 2]);
        assert_eq!(path.distance, 6_000_000_000);
    }

    #[test]
    fn stale_entries_are_skipped() {
        let graph = dijkstra_graph();
        let mut events = Vec::new();
        dijkstra_observed(&graph, 0, None, &mut events);

        assert!(events.contains(&SearchEvent::Skipped {
            vertex: 1,
            distance: 4
        }));
        let expanded = events
            .iter()
            .filter(|event| matches!(event, SearchEvent::Expanded { .. }))
            .count();
        assert_eq!(expanded, 6);
    }

    #[test]
    fn triangle_inequality_holds() {
        let graph = dijkstra_graph();
        let space = dijkstra(&graph, 0);

        for edge in graph.edges() {
            for edge in [edge, edge.reversed()] {
                let tail = space.distance(edge.tail());
                let head = space.distance(edge.head());
                assert!(head <= tail.saturating_add(Distance::from(edge.weight())));
            }
        }
    }
}
