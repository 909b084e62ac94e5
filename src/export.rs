use std::io::{self, Write};

use itertools::Itertools;
use serde::Serialize;

use crate::{
    graphs::{distance_matrix::DistanceMatrix, Distance, Vertex},
    search::shortest_path_tree::ShortestPathTree,
};

/// Token written for a distance that stayed unreachable.
pub const UNREACHABLE: &str = "INF";

fn render(distance: Option<Distance>) -> String {
    match distance {
        Some(distance) => distance.to_string(),
        None => UNREACHABLE.to_string(),
    }
}

/// Single source result: a line with the vertex count, then
/// `serial distance predecessor` per vertex. A vertex without a predecessor
/// prints 0, the reserved serial.
pub fn write_shortest_path_tree(
    mut writer: impl Write,
    tree: &ShortestPathTree,
) -> io::Result<()> {
    writeln!(writer, "{}", tree.number_of_vertices())?;

    for vertex in 1..=tree.number_of_vertices() {
        writeln!(
            writer,
            "{} {} {}",
            vertex,
            render(tree.distance(vertex)),
            tree.predecessor(vertex).unwrap_or(0)
        )?;
    }

    Ok(())
}

/// All pairs result: a line with the vertex count, then one row of n
/// space-separated distances per vertex.
pub fn write_distance_matrix(mut writer: impl Write, matrix: &DistanceMatrix) -> io::Result<()> {
    let number_of_vertices = matrix.number_of_vertices();
    writeln!(writer, "{}", number_of_vertices)?;

    for i in 1..=number_of_vertices {
        let row = (1..=number_of_vertices)
            .map(|j| render(matrix.get(i, j)))
            .join(" ");
        writeln!(writer, "{}", row)?;
    }

    Ok(())
}

#[derive(Serialize)]
struct VertexRow {
    serial: Vertex,
    distance: Option<Distance>,
    predecessor: Option<Vertex>,
}

#[derive(Serialize)]
struct TreeDocument {
    source: Vertex,
    vertices: Vec<VertexRow>,
}

pub fn write_shortest_path_tree_json(
    writer: impl Write,
    tree: &ShortestPathTree,
) -> serde_json::Result<()> {
    let document = TreeDocument {
        source: tree.source(),
        vertices: (1..=tree.number_of_vertices())
            .map(|vertex| VertexRow {
                serial: vertex,
                distance: tree.distance(vertex),
                predecessor: tree.predecessor(vertex),
            })
            .collect(),
    };

    serde_json::to_writer_pretty(writer, &document)
}

#[derive(Serialize)]
struct MatrixDocument {
    number_of_vertices: u32,
    distances: Vec<Vec<Option<Distance>>>,
}

pub fn write_distance_matrix_json(
    writer: impl Write,
    matrix: &DistanceMatrix,
) -> serde_json::Result<()> {
    let number_of_vertices = matrix.number_of_vertices();
    let document = MatrixDocument {
        number_of_vertices,
        distances: (1..=number_of_vertices)
            .map(|i| {
                (1..=number_of_vertices)
                    .map(|j| matrix.get(i, j))
                    .collect()
            })
            .collect(),
    };

    serde_json::to_writer_pretty(writer, &document)
}
