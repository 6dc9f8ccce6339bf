use serde::{Deserialize, Serialize};

use super::{Vertex, Weight};

fn unit_weight() -> Weight {
    1
}

/// An edge of the flat edge sequence. Unweighted graphs leave the weight out
/// of their description and get 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct WeightedEdge {
    #[serde(alias = "from")]
    tail: Vertex,
    #[serde(alias = "to")]
    head: Vertex,
    #[serde(default = "unit_weight")]
    weight: Weight,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Weight) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    pub fn unweighted(tail: Vertex, head: Vertex) -> WeightedEdge {
        WeightedEdge::new(tail, head, unit_weight())
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn tailless(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }

    /// Whether the edge joins `a` and `b`, ignoring its direction.
    pub fn connects(&self, a: Vertex, b: Vertex) -> bool {
        (self.tail == a && self.head == b) || (self.tail == b && self.head == a)
    }
}

/// One neighbor entry: the vertex reached and the weight of the edge used.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaillessEdge {
    head: Vertex,
    weight: Weight,
}

impl TaillessEdge {
    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}
