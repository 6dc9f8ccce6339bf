use serde::Serialize;

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataMap},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
    },
    trace::{SearchEvent, SearchObserver},
};
use crate::graphs::{edge::WeightedEdge, Distance, Graph, Vertex, Weight};

/// A set of tree edges and their summed weight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub edges: Vec<WeightedEdge>,
    pub weight: Distance,
}

impl SpanningTree {
    fn push(&mut self, edge: WeightedEdge) {
        self.weight = self.weight.saturating_add(Distance::from(edge.weight()));
        self.edges.push(edge);
    }
}

/// Result of Prim's algorithm. `keys` holds, per vertex, the weight of the
/// cheapest edge known to connect it to the tree (stored in the distance
/// slot of the data).
#[derive(Clone, Debug, Default, Serialize)]
pub struct PrimData {
    pub tree: SpanningTree,
    pub keys: DijkstraDataMap,
    pub in_tree: VertexExpandedDataHashSet,
}

impl PrimData {
    pub fn key(&self, vertex: Vertex) -> Distance {
        self.keys.get_distance(vertex)
    }

    pub fn parent(&self, vertex: Vertex) -> Option<Vertex> {
        self.keys.get_predecessor(vertex)
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.in_tree.is_expanded(vertex)
    }
}

/// Grows a minimum spanning tree from `start`. On a disconnected graph only
/// the component of `start` is spanned.
pub fn prim(graph: &dyn Graph, start: Vertex) -> PrimData {
    prim_observed(graph, start, &mut ())
}

#[tracing::instrument(skip(graph, observer))]
pub fn prim_observed(
    graph: &dyn Graph,
    start: Vertex,
    observer: &mut dyn SearchObserver,
) -> PrimData {
    let mut prim_data = PrimData::default();
    if !graph.contains(start) {
        tracing::debug!("start is not part of the graph");
        return prim_data;
    }

    let number_of_vertices = graph.number_of_vertices() as usize;
    let mut queue = VertexDistanceQueueBinaryHeap::new();
    let PrimData {
        tree,
        keys,
        in_tree,
    } = &mut prim_data;

    keys.set_distance(start, 0);
    queue.insert(start, 0);

    while let Some((vertex, queued_key)) = queue.pop() {
        if in_tree.expand(vertex) {
            observer.observe(SearchEvent::Skipped {
                vertex,
                distance: queued_key,
            });
            continue;
        }

        let key = keys.get_distance(vertex);
        observer.observe(SearchEvent::Expanded {
            vertex,
            distance: key,
        });

        if let Some(parent) = keys.get_predecessor(vertex) {
            // a key with a parent is always the weight of one edge
            let edge = WeightedEdge::new(parent, vertex, key as Weight);
            tree.push(edge);
            observer.observe(SearchEvent::EdgeAccepted { edge });
        }

        if in_tree.number_of_expanded() == number_of_vertices {
            break;
        }

        for edge in graph.neighbors(vertex) {
            if in_tree.is_expanded(edge.head()) {
                continue;
            }

            let weight = Distance::from(edge.weight());
            if weight < keys.get_distance(edge.head()) {
                keys.set_distance(edge.head(), weight);
                keys.set_predecessor(edge.head(), vertex);
                queue.insert(edge.head(), weight);
                observer.observe(SearchEvent::Relaxed {
                    vertex: edge.head(),
                    predecessor: vertex,
                    distance: weight,
                });
            }
        }
    }

    tracing::debug!(
        edges = prim_data.tree.edges.len(),
        weight = prim_data.tree.weight,
        "prim done"
    );
    prim_data
}
