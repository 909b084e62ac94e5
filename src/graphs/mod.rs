use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use indicatif::ProgressIterator;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::edge::UndirectedEdge;

pub mod distance_matrix;
pub mod edge;

/// Vertex serial. Serials are 1-based and dense, 0 is reserved for "no
/// predecessor".
pub type Vertex = u32;
pub type Distance = i64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex serial {vertex} is out of range 1..={number_of_vertices}")]
    SerialOutOfRange {
        vertex: Vertex,
        number_of_vertices: u32,
    },
}

/// A static, weighted, undirected graph with vertex serials 1..=n. The edge
/// list is the representation the single source search runs on; the dense
/// matrix the all pairs search needs is derived once via
/// `DistanceMatrix::from_graph` and never synchronized back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UndirectedGraph {
    number_of_vertices: u32,
    edges: Vec<UndirectedEdge>,
}

impl UndirectedGraph {
    pub fn new(number_of_vertices: u32) -> UndirectedGraph {
        UndirectedGraph {
            number_of_vertices,
            edges: Vec::new(),
        }
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.number_of_vertices
    }

    pub fn number_of_edges(&self) -> u32 {
        self.edges.len() as u32
    }

    /// Edges in file order. The single source engine relies on this order
    /// being stable to produce reproducible predecessor trees.
    pub fn edges(&self) -> &[UndirectedEdge] {
        &self.edges
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        (1..=self.number_of_vertices).contains(&vertex)
    }

    pub fn add_edge(&mut self, edge: UndirectedEdge) -> Result<(), GraphError> {
        for endpoint in [edge.a(), edge.b()] {
            if !self.contains(endpoint) {
                return Err(GraphError::SerialOutOfRange {
                    vertex: endpoint,
                    number_of_vertices: self.number_of_vertices,
                });
            }
        }

        self.edges.push(edge);
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read graph file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("line {line}: {source}")]
    Graph { line: usize, source: GraphError },
}

pub fn read_graph_from_file(path: &Path) -> Result<(UndirectedGraph, Vertex), LoadError> {
    let file = File::open(path)?;
    read_graph(BufReader::new(file))
}

/// Reads a graph instance from the flat text format
///
/// ```text
/// N            vertex count
/// S            source vertex serial
/// M            edge count
/// A B W        M edge lines, an optional period after W is ignored
/// ```
///
/// and returns the graph together with the source serial.
pub fn read_graph(reader: impl BufRead) -> Result<(UndirectedGraph, Vertex), LoadError> {
    let mut lines = reader.lines();
    let mut line_number = 0;

    let number_of_vertices: u32 =
        parse(&next_line(&mut lines, &mut line_number)?, line_number, "vertex count")?;
    if number_of_vertices == 0 {
        return Err(LoadError::Parse {
            line: line_number,
            message: "vertex count must be positive".to_string(),
        });
    }

    let mut graph = UndirectedGraph::new(number_of_vertices);

    let source: Vertex =
        parse(&next_line(&mut lines, &mut line_number)?, line_number, "source vertex")?;
    if !graph.contains(source) {
        return Err(LoadError::Graph {
            line: line_number,
            source: GraphError::SerialOutOfRange {
                vertex: source,
                number_of_vertices,
            },
        });
    }

    let number_of_edges: u32 =
        parse(&next_line(&mut lines, &mut line_number)?, line_number, "edge count")?;

    for _ in (0..number_of_edges).progress_count(number_of_edges as u64) {
        let line = next_line(&mut lines, &mut line_number)?;
        let mut fields = line.split_whitespace();

        let a: Vertex = parse(
            next_field(&mut fields, line_number, "first endpoint")?,
            line_number,
            "first endpoint",
        )?;
        let b: Vertex = parse(
            next_field(&mut fields, line_number, "second endpoint")?,
            line_number,
            "second endpoint",
        )?;
        // the original input files terminate some edge lines with a period
        let weight: Distance = parse(
            next_field(&mut fields, line_number, "weight")?.trim_end_matches('.'),
            line_number,
            "weight",
        )?;

        graph
            .add_edge(UndirectedEdge::new(a, b, weight))
            .map_err(|source| LoadError::Graph {
                line: line_number,
                source,
            })?;
    }

    Ok((graph, source))
}

fn next_line(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    line_number: &mut usize,
) -> Result<String, LoadError> {
    *line_number += 1;
    match lines.next() {
        Some(line) => Ok(line?),
        None => Err(LoadError::Parse {
            line: *line_number,
            message: "unexpected end of file".to_string(),
        }),
    }
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    what: &str,
) -> Result<&'a str, LoadError> {
    fields.next().ok_or_else(|| LoadError::Parse {
        line,
        message: format!("missing {}", what),
    })
}

fn parse<T: FromStr>(token: &str, line: usize, what: &str) -> Result<T, LoadError> {
    token.trim().parse().map_err(|_| LoadError::Parse {
        line,
        message: format!("malformed {}: {:?}", what, token),
    })
}

/// The three vertex triangle used across the integration tests: edges
/// (1,2,4), (2,3,1) and (1,3,10), source 1. The shortest path from 1 to 3
/// goes through 2 at distance 5.
pub fn small_test_graph() -> (UndirectedGraph, Vertex) {
    let mut graph = UndirectedGraph::new(3);
    graph.add_edge(UndirectedEdge::new(1, 2, 4)).unwrap();
    graph.add_edge(UndirectedEdge::new(2, 3, 1)).unwrap();
    graph.add_edge(UndirectedEdge::new(1, 3, 10)).unwrap();
    (graph, 1)
}
