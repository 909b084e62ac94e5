use exact_paths::{
    graphs::{edge::UndirectedEdge, small_test_graph, UndirectedGraph, Vertex},
    search::bellman_ford::single_source,
};
use rand::Rng;

fn random_positive_graph(number_of_vertices: u32, number_of_edges: u32) -> UndirectedGraph {
    let mut rng = rand::thread_rng();
    let mut graph = UndirectedGraph::new(number_of_vertices);

    for _ in 0..number_of_edges {
        let a = rng.gen_range(1..=number_of_vertices);
        let b = rng.gen_range(1..=number_of_vertices);
        let weight = rng.gen_range(1..=50);
        graph.add_edge(UndirectedEdge::new(a, b, weight)).unwrap();
    }

    graph
}

#[test]
fn triangle_graph_distances_and_predecessors() {
    let (graph, source) = small_test_graph();

    let tree = single_source(&graph, source).unwrap();

    assert_eq!(tree.source(), 1);
    assert_eq!(tree.distance(1), Some(0));
    assert_eq!(tree.distance(2), Some(4));
    assert_eq!(tree.distance(3), Some(5));
    assert_eq!(tree.predecessor(1), None);
    assert_eq!(tree.predecessor(2), Some(1));
    assert_eq!(tree.predecessor(3), Some(2));

    let path = tree.path_to(3).unwrap();
    assert_eq!(path.vertices, vec![1, 2, 3]);
    assert_eq!(path.distance, 5);
}

#[test]
fn disconnected_vertex_stays_unreachable() {
    let mut graph = UndirectedGraph::new(3);
    graph.add_edge(UndirectedEdge::new(1, 2, 1)).unwrap();

    let tree = single_source(&graph, 1).unwrap();

    assert_eq!(tree.distance(2), Some(1));
    assert_eq!(tree.distance(3), None);
    assert_eq!(tree.predecessor(3), None);
    assert!(tree.path_to(3).is_none());
}

#[test]
fn reachable_negative_edge_is_a_negative_cycle() {
    // in an undirected graph a single negative edge is already a negative
    // cycle, walking it back and forth lowers the distance every time
    let mut graph = UndirectedGraph::new(2);
    graph.add_edge(UndirectedEdge::new(1, 2, -4)).unwrap();

    let err = single_source(&graph, 1).unwrap_err();

    assert_eq!(err.partial.source(), 1);
    assert_eq!(err.partial.distance(1), Some(0));
}

#[test]
fn partial_tree_after_negative_cycle_yields_no_path() {
    let mut graph = UndirectedGraph::new(2);
    graph.add_edge(UndirectedEdge::new(1, 2, -4)).unwrap();

    let err = single_source(&graph, 1).unwrap_err();

    // the relaxation passes leave the two predecessors pointing at each
    // other, backtracking must notice the loop instead of walking it forever
    assert_eq!(err.partial.predecessor(1), Some(2));
    assert_eq!(err.partial.predecessor(2), Some(1));
    assert!(err.partial.path_to(2).is_none());
}

#[test]
fn negative_cycle_through_several_edges_is_detected() {
    let mut graph = UndirectedGraph::new(3);
    graph.add_edge(UndirectedEdge::new(1, 2, 1)).unwrap();
    graph.add_edge(UndirectedEdge::new(2, 3, 1)).unwrap();
    graph.add_edge(UndirectedEdge::new(1, 3, -5)).unwrap();

    assert!(single_source(&graph, 1).is_err());
}

#[test]
fn unreachable_negative_edge_is_tolerated() {
    let mut graph = UndirectedGraph::new(4);
    graph.add_edge(UndirectedEdge::new(1, 2, 3)).unwrap();
    graph.add_edge(UndirectedEdge::new(3, 4, -5)).unwrap();

    let tree = single_source(&graph, 1).unwrap();

    assert_eq!(tree.distance(2), Some(3));
    assert_eq!(tree.distance(3), None);
    assert_eq!(tree.distance(4), None);
}

#[test]
fn equal_cost_paths_keep_the_first_relaxed_predecessor() {
    // 1-2-4 and 1-3-4 both cost 2, the edge read first wins the tie
    let mut graph = UndirectedGraph::new(4);
    graph.add_edge(UndirectedEdge::new(1, 2, 1)).unwrap();
    graph.add_edge(UndirectedEdge::new(1, 3, 1)).unwrap();
    graph.add_edge(UndirectedEdge::new(2, 4, 1)).unwrap();
    graph.add_edge(UndirectedEdge::new(3, 4, 1)).unwrap();

    let tree = single_source(&graph, 1).unwrap();

    assert_eq!(tree.distance(4), Some(2));
    assert_eq!(tree.predecessor(4), Some(2));
}

#[test]
fn no_edge_admits_further_relaxation() {
    let graph = random_positive_graph(30, 120);
    let source: Vertex = 1;

    let tree = single_source(&graph, source).unwrap();

    for edge in graph.edges() {
        for arc in edge.directed() {
            if let Some(distance_tail) = tree.distance(arc.tail()) {
                let distance_head = tree
                    .distance(arc.head())
                    .expect("head of a relaxable arc must be reached");
                assert!(distance_tail + arc.weight() >= distance_head);
            }
        }
    }
}

#[test]
fn repeated_runs_produce_identical_trees() {
    let graph = random_positive_graph(25, 80);

    let first = single_source(&graph, 1).unwrap();
    let second = single_source(&graph, 1).unwrap();

    assert_eq!(first, second);
}

#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_source_fails_fast() {
    let (graph, _) = small_test_graph();
    let _ = single_source(&graph, 9);
}
