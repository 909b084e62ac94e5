use thiserror::Error;

use super::shortest_path_tree::ShortestPathTree;
use crate::graphs::{edge::DirectedEdge, Distance, UndirectedGraph, Vertex};

/// Raised when an edge still admits a strict improvement after n - 1
/// relaxation passes. Shortest distances are undefined in that case; the tree
/// computed so far is kept so callers can still emit best-effort results.
#[derive(Debug, Error)]
#[error("negative weight cycle reachable from vertex {}", .partial.source())]
pub struct NegativeCycle {
    pub partial: ShortestPathTree,
}

/// Bellman-Ford over the edge list. Every stored edge is relaxed as its two
/// directed arcs, in file order, so the resulting predecessor tree is
/// deterministic. Negative edge weights are fine as long as no reachable
/// cycle sums negative.
pub fn single_source(
    graph: &UndirectedGraph,
    source: Vertex,
) -> Result<ShortestPathTree, NegativeCycle> {
    let number_of_vertices = graph.number_of_vertices();
    let mut tree = ShortestPathTree::new(number_of_vertices, source);

    // n - 1 passes settle every simple path
    for _ in 1..number_of_vertices {
        for edge in graph.edges() {
            for arc in edge.directed() {
                relax(&mut tree, &arc);
            }
        }
    }

    // any remaining improvement can only come from a negative cycle
    for edge in graph.edges() {
        for arc in edge.directed() {
            if improvement(&tree, &arc).is_some() {
                return Err(NegativeCycle { partial: tree });
            }
        }
    }

    Ok(tree)
}

/// The strictly better distance `arc` offers its head, if any. A `None` tail
/// distance never yields a candidate.
fn improvement(tree: &ShortestPathTree, arc: &DirectedEdge) -> Option<Distance> {
    let candidate = tree.distance(arc.tail())? + arc.weight();

    if candidate < tree.distance(arc.head()).unwrap_or(Distance::MAX) {
        return Some(candidate);
    }

    None
}

fn relax(tree: &mut ShortestPathTree, arc: &DirectedEdge) {
    if let Some(candidate) = improvement(tree, arc) {
        tree.set_distance(arc.head(), candidate);
        tree.set_predecessor(arc.head(), arc.tail());
    }
}
