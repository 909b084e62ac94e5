use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
    process,
};

use clap::Parser;
use exact_paths::utility::get_progressbar_long_jobs;
use rand::Rng;

/// Writes a random graph instance in the flat text format, useful for
/// exercising the distance engines on something bigger than the handwritten
/// test graphs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices
    #[arg(short = 'n', long)]
    vertices: u32,

    /// Number of edges
    #[arg(short = 'm', long)]
    edges: u32,

    /// Smallest edge weight, may be negative
    #[arg(long, default_value_t = 1)]
    min_weight: i64,

    /// Largest edge weight
    #[arg(long, default_value_t = 100)]
    max_weight: i64,

    /// Outfile for the generated instance
    #[arg(short, long)]
    out: PathBuf,
}

fn main() {
    let args = Args::parse();

    if args.vertices == 0 || args.min_weight > args.max_weight {
        eprintln!("need at least one vertex and min_weight <= max_weight");
        process::exit(1);
    }

    if let Err(err) = write_instance(&args) {
        eprintln!("failed to write {}: {}", args.out.display(), err);
        process::exit(1);
    }
}

fn write_instance(args: &Args) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut writer = BufWriter::new(File::create(&args.out)?);

    writeln!(writer, "{}", args.vertices)?;
    writeln!(writer, "{}", rng.gen_range(1..=args.vertices))?;
    writeln!(writer, "{}", args.edges)?;

    let bar = get_progressbar_long_jobs("Generating edges", args.edges as u64);
    for _ in 0..args.edges {
        let a = rng.gen_range(1..=args.vertices);
        let b = rng.gen_range(1..=args.vertices);
        let weight = rng.gen_range(args.min_weight..=args.max_weight);
        writeln!(writer, "{} {} {}", a, b, weight)?;
        bar.inc(1);
    }
    bar.finish();

    writer.flush()
}
