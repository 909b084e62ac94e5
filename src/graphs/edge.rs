use serde::{Deserialize, Serialize};

use super::{Distance, Vertex};

/// An edge as it appears in the graph file: an unordered endpoint pair and a
/// signed weight. Duplicates between the same pair and self-loops are
/// allowed, each one is relaxed independently.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndirectedEdge {
    a: Vertex,
    b: Vertex,
    weight: Distance,
}

impl UndirectedEdge {
    pub fn new(a: Vertex, b: Vertex, weight: Distance) -> UndirectedEdge {
        UndirectedEdge { a, b, weight }
    }

    pub fn a(&self) -> Vertex {
        self.a
    }

    pub fn b(&self) -> Vertex {
        self.b
    }

    pub fn weight(&self) -> Distance {
        self.weight
    }

    /// The two directed arcs an undirected edge stands for. Relaxation always
    /// works on arcs, never on the stored edge itself.
    pub fn directed(&self) -> [DirectedEdge; 2] {
        [
            DirectedEdge {
                tail: self.a,
                head: self.b,
                weight: self.weight,
            },
            DirectedEdge {
                tail: self.b,
                head: self.a,
                weight: self.weight,
            },
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectedEdge {
    tail: Vertex,
    head: Vertex,
    weight: Distance,
}

impl DirectedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Distance) -> DirectedEdge {
        DirectedEdge { tail, head, weight }
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn weight(&self) -> Distance {
        self.weight
    }

    pub fn reversed(&self) -> DirectedEdge {
        DirectedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }
}
