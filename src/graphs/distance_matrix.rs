use serde::{Deserialize, Serialize};

use super::{Distance, UndirectedGraph, Vertex};

/// Dense (n + 1) x (n + 1) distance matrix over vertex serials 1..=n. Row and
/// column 0 are unused, they only exist so serials index directly. `None`
/// marks "no known finite distance".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    cells: Vec<Vec<Option<Distance>>>, // [i][j] = Option<Distance>
}

impl DistanceMatrix {
    /// An empty matrix: diagonal at 0, everything else unreachable.
    pub fn new(number_of_vertices: u32) -> DistanceMatrix {
        let side = number_of_vertices as usize + 1;
        let mut cells = vec![vec![None; side]; side];

        for i in 1..side {
            cells[i][i] = Some(0);
        }

        DistanceMatrix { cells }
    }

    /// Initializes the matrix with the direct edge weights of the graph,
    /// written symmetrically. Duplicate edges between the same pair collapse
    /// to the last one read, a single cell cannot hold more than one weight.
    /// Self-loops are skipped so the diagonal keeps its fixed 0.
    pub fn from_graph(graph: &UndirectedGraph) -> DistanceMatrix {
        let mut matrix = DistanceMatrix::new(graph.number_of_vertices());

        for edge in graph.edges() {
            // self-loops never write, the diagonal stays at 0
            if edge.a() == edge.b() {
                continue;
            }
            matrix.set(edge.a(), edge.b(), edge.weight());
            matrix.set(edge.b(), edge.a(), edge.weight());
        }

        matrix
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.cells.len() as u32 - 1
    }

    pub fn get(&self, i: Vertex, j: Vertex) -> Option<Distance> {
        self.cells[i as usize][j as usize]
    }

    pub fn set(&mut self, i: Vertex, j: Vertex, distance: Distance) {
        self.cells[i as usize][j as usize] = Some(distance);
    }
}
