use itertools::Itertools;

use super::{
    collections::union_find::UnionFind,
    prim::SpanningTree,
    trace::{SearchEvent, SearchObserver},
};
use crate::graphs::{Distance, Graph};

/// Minimum spanning forest by Kruskal's algorithm. Edge directions are
/// ignored; equal weights keep their edge-sequence order.
pub fn kruskal(graph: &dyn Graph) -> SpanningTree {
    kruskal_observed(graph, &mut ())
}

#[tracing::instrument(skip(graph, observer))]
pub fn kruskal_observed(graph: &dyn Graph, observer: &mut dyn SearchObserver) -> SpanningTree {
    let mut tree = SpanningTree::default();
    let target_edges = graph.number_of_vertices().saturating_sub(1) as usize;
    let mut sets = UnionFind::new(graph.vertices());

    for edge in graph.edges().sorted_by_key(|edge| edge.weight()) {
        if tree.edges.len() >= target_edges {
            break;
        }

        if sets.union(edge.tail(), edge.head()) {
            tree.weight = tree.weight.saturating_add(Distance::from(edge.weight()));
            tree.edges.push(edge);
            observer.observe(SearchEvent::EdgeAccepted { edge });
        } else {
            observer.observe(SearchEvent::EdgeRejected { edge });
        }
    }

    tracing::debug!(edges = tree.edges.len(), weight = tree.weight, "kruskal done");
    tree
}

#[cfg(test)]
mod tests {
    use super::{kruskal, kruskal_observed};
    use crate::{
        graphs::{
            edge::WeightedEdge, edge_list_graph::EdgeListGraph, samples::spanning_tree_graph,
            GraphMode,
        },
        search::trace::SearchEvent,
    };

    #[test]
    fn sample_graph_tree() {
        let tree = kruskal(&spanning_tree_graph());

        assert_eq!(
            tree.edges,
            vec![
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(0, 2, 2),
                WeightedEdge::new(1, 3, 3),
                WeightedEdge::new(2, 4, 3),
            ]
        );
        assert_eq!(tree.weight, 9);
    }

    #[test]
    fn rejects_cycle_edges() {
        let graph = EdgeListGraph::from_edges(
            GraphMode::Undirected,
            vec![
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(0, 2, 1),
                WeightedEdge::new(2, 3, 5),
            ],
        );
        let mut events = Vec::new();
        let tree = kruskal_observed(&graph, &mut events);

        assert_eq!(tree.weight, 7);
        assert!(events.contains(&SearchEvent::EdgeRejected {
            edge: WeightedEdge::new(0, 2, 1)
        }));
    }

    #[test]
    fn disconnected_graph_gives_forest() {
        let graph = EdgeListGraph::from_edges(
            GraphMode::Undirected,
            vec![WeightedEdge::new(0, 1, 4), WeightedEdge::new(2, 3, 6)],
        );
        let tree = kruskal(&graph);

        assert_eq!(tree.edges.len(), 2);
        assert_eq!(tree.weight, 10);
    }
}
