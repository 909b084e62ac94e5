use std::{error::Error, fs::File, io::BufWriter, path::PathBuf, process};

use clap::Parser;
use exact_paths::{
    export::{
        write_distance_matrix, write_distance_matrix_json, write_shortest_path_tree,
        write_shortest_path_tree_json,
    },
    graphs::{distance_matrix::DistanceMatrix, read_graph_from_file},
    search::{bellman_ford, floyd_warshall, shortest_path_tree::ShortestPathTree},
    utility::get_progressspinner,
};

/// Computes single source (Bellman-Ford) and all pairs (Floyd-Warshall)
/// shortest distances for a graph file and writes one result file per engine.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input graph in the flat text format
    #[arg(short, long)]
    graph: PathBuf,

    /// Outfile for the single source distances
    #[arg(short = 's', long)]
    single_source_out: PathBuf,

    /// Outfile for the all pairs distance matrix
    #[arg(short = 'a', long)]
    all_pairs_out: PathBuf,

    /// Write results as JSON instead of the plain text format
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();

    let (graph, source) = match read_graph_from_file(&args.graph) {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("failed to read {}: {}", args.graph.display(), err);
            process::exit(1);
        }
    };

    let mut matrix = DistanceMatrix::from_graph(&graph);

    // the engines share nothing but the read-only graph, each owns its output
    let spinner = get_progressspinner("Computing shortest distances");
    let (tree, ()) = rayon::join(
        || bellman_ford::single_source(&graph, source),
        || floyd_warshall::all_pairs(&mut matrix),
    );
    spinner.finish_and_clear();

    // a negative cycle invalidates the single source distances but not the
    // all pairs matrix, so report it and keep writing both files
    let tree = match tree {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("warning: {}", err);
            err.partial
        }
    };

    if let Err(err) = write_results(&args, &tree, &matrix) {
        eprintln!("failed to write results: {}", err);
        process::exit(1);
    }
}

fn write_results(
    args: &Args,
    tree: &ShortestPathTree,
    matrix: &DistanceMatrix,
) -> Result<(), Box<dyn Error>> {
    let tree_writer = BufWriter::new(File::create(&args.single_source_out)?);
    let matrix_writer = BufWriter::new(File::create(&args.all_pairs_out)?);

    if args.json {
        write_shortest_path_tree_json(tree_writer, tree)?;
        write_distance_matrix_json(matrix_writer, matrix)?;
    } else {
        write_shortest_path_tree(tree_writer, tree)?;
        write_distance_matrix(matrix_writer, matrix)?;
    }

    Ok(())
}
