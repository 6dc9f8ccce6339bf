use serde::{Deserialize, Serialize};

use crate::graphs::{edge::WeightedEdge, Distance, Vertex};

/// One step of a search, reported in the order the algorithm performs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SearchEvent {
    /// A vertex was reached for the first time.
    Discovered {
        vertex: Vertex,
        predecessor: Option<Vertex>,
        time: u32,
    },
    /// A vertex was taken off the frontier and is being processed.
    Expanded { vertex: Vertex, distance: Distance },
    /// A stale frontier entry was dropped.
    Skipped { vertex: Vertex, distance: Distance },
    /// A better distance or key was found for a vertex.
    Relaxed {
        vertex: Vertex,
        predecessor: Vertex,
        distance: Distance,
    },
    /// All descendants of a vertex have been explored.
    Finished { vertex: Vertex, time: u32 },
    EdgeAccepted { edge: WeightedEdge },
    EdgeRejected { edge: WeightedEdge },
}

/// Receives the events of a running search. Observing never changes what the
/// search computes.
pub trait SearchObserver {
    fn observe(&mut self, event: SearchEvent);
}

impl SearchObserver for () {
    fn observe(&mut self, _event: SearchEvent) {}
}

impl SearchObserver for Vec<SearchEvent> {
    fn observe(&mut self, event: SearchEvent) {
        self.push(event);
    }
}
