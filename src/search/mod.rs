pub mod bellman_ford;
pub mod floyd_warshall;
pub mod shortest_path_tree;
