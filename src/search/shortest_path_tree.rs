use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Per-vertex outcome of a single source search: the best known distance from
/// the source and the predecessor on that path. `None` distance means the
/// vertex was never reached. Slot 0 of both vectors is unused, serials index
/// directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTree {
    source: Vertex,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<Vertex>>,
}

impl ShortestPathTree {
    /// A tree with only the source settled at distance 0.
    pub fn new(number_of_vertices: u32, source: Vertex) -> ShortestPathTree {
        assert!(
            (1..=number_of_vertices).contains(&source),
            "source vertex {} is out of range 1..={}",
            source,
            number_of_vertices
        );

        let mut tree = ShortestPathTree {
            source,
            distances: vec![None; number_of_vertices as usize + 1],
            predecessors: vec![None; number_of_vertices as usize + 1],
        };
        tree.distances[source as usize] = Some(0);

        tree
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.distances.len() as u32 - 1
    }

    pub fn distance(&self, vertex: Vertex) -> Option<Distance> {
        self.distances[vertex as usize]
    }

    pub fn predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors[vertex as usize]
    }

    pub fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = Some(distance);
    }

    pub fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = Some(predecessor);
    }

    /// Traces predecessors back from `target` to reconstruct one shortest
    /// path. Returns `None` if the target was never reached, or if the
    /// predecessor pointers contain a cycle, which happens in the partial
    /// tree left behind by a negative cycle.
    pub fn path_to(&self, target: Vertex) -> Option<Path> {
        let distance = self.distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.predecessor(current) {
            // a shortest path visits each vertex at most once
            if vertices.len() as u32 >= self.number_of_vertices() {
                return None;
            }
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}
