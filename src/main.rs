use std::{
    fs::File,
    hint::black_box,
    io::BufWriter,
    path::{Path, PathBuf},
    process::exit,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::prelude::*;
use rand::rngs::SmallRng;

use sparse_csr::{
    graphs::{degree_stats, validate_csr, ExternalId, GraphEngine, SparseGraph},
    utils::{write_synthetic_edge_list, SyntheticParameters},
};

#[derive(Parser, Debug)]
#[clap(name = "sparse-csr", version)]
struct App {
    #[clap(subcommand)]
    command: Command,
    /// If true avoid printing summary information such as load times
    #[arg(short, long, default_value = "false")]
    silent: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load an edge list and print its size and its max-degree node.
    Info {
        /// The edge list to load
        path: PathBuf,
    },
    /// Print the nodes reached by a depth-bounded BFS, in discovery order.
    Bfs {
        #[clap(flatten)]
        traversal: TraversalArguments,
        /// Print the depth of each node as a second tab separated column
        #[arg(long, default_value = "false")]
        with_depth: bool,
    },
    /// Print the successors of a node.
    Neighbors {
        /// The edge list to load
        path: PathBuf,
        /// External id of the node
        #[arg(allow_negative_numbers = true)]
        node: ExternalId,
    },
    /// Print the out-degree of a node.
    Degree {
        /// The edge list to load
        path: PathBuf,
        /// External id of the node
        #[arg(allow_negative_numbers = true)]
        node: ExternalId,
    },
    /// Print the edges between the nodes reached by a BFS in csv format.
    Subgraph {
        #[clap(flatten)]
        traversal: TraversalArguments,
        /// csv character separator between the source node id and the destination node id (in order).
        #[arg(long, default_value_t = ',')]
        separator: char,
    },
    /// Print out-degree statistics and check the CSR invariants.
    Stats {
        /// The edge list to load
        path: PathBuf,
    },
    /// Measure BFS and neighbor queries from randomly sampled start nodes.
    Bench {
        /// The edge list to load
        path: PathBuf,
        /// The number of random sampled start nodes
        #[arg(short = 'r', long, default_value = "1000")]
        random: usize,
        /// The number of repetition performed on the test
        #[arg(short = 'R', long, default_value = "10")]
        repeats: usize,
        /// Maximum BFS depth
        #[arg(short = 'd', long, default_value = "2")]
        depth: usize,
        /// Seed to reproduce the experiment
        #[arg(short = 's', long, default_value = "0")]
        seed: u64,
        /// If specified prints the results in tsv format
        /// Each line is composed by three fields: the bench name, the iteration index
        /// and the running time (in nanoseconds)
        #[arg(long, default_value = "false")]
        tsv: bool,
    },
    /// Write a random edge list with sparse ids and Zipf distributed out-degrees.
    Generate {
        /// Where to write the edge list
        output_path: PathBuf,
        /// Number of distinct external ids to draw
        #[arg(short = 'n', long, default_value = "1000")]
        nodes: usize,
        /// Number of edges to write
        #[arg(short = 'm', long, default_value = "10000")]
        edges: usize,
        /// External ids are drawn from [0, id_space)
        #[arg(long, default_value = "1000000000")]
        id_space: ExternalId,
        /// Exponent of the Zipf distribution of the sources
        #[arg(long, default_value = "1.5")]
        exponent: f64,
        /// Seed to reproduce the graph
        #[arg(short = 's', long, default_value = "0")]
        seed: u64,
    },
}

#[derive(Debug, clap::Args)]
struct TraversalArguments {
    /// The edge list to load
    path: PathBuf,
    /// External id of the start node
    #[arg(allow_negative_numbers = true)]
    start: ExternalId,
    /// Nodes at this depth are reported but not expanded
    #[arg(short = 'd', long, default_value = "1")]
    depth: usize,
}

fn load(path: &Path, verbose: bool) -> Result<SparseGraph> {
    let mut graph = SparseGraph::new();
    let start = std::time::Instant::now();
    graph
        .load(path)
        .with_context(|| format!("Could not load graph from {}", path.display()))?;
    if verbose {
        eprintln!(
            "Loaded {} nodes and {} edges in {:.4}s",
            graph.num_nodes(),
            graph.num_edges(),
            start.elapsed().as_secs_f64()
        );
    }
    Ok(graph)
}

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let start = std::time::Instant::now();

    let args = App::parse();
    let verbose = !args.silent;
    match args.command {
        Command::Info { path } => {
            let graph = load(&path, verbose)?;
            println!("nodes: {}", graph.num_nodes());
            println!("edges: {}", graph.num_edges());
            match graph.csr().and_then(|csr| csr.max_degree()) {
                Some((node, degree)) => println!("max degree node: {} (degree {})", node, degree),
                None => println!("max degree node: none"),
            }
        }
        Command::Bfs {
            traversal,
            with_depth,
        } => {
            let graph = load(&traversal.path, verbose)?;
            if !graph.contains(traversal.start) {
                eprintln!("Start node {} not found", traversal.start);
                exit(1);
            }
            let visited = graph.bfs_with_depth(traversal.start, traversal.depth);
            for (node, depth) in visited {
                if with_depth {
                    println!("{}\t{}", node, depth);
                } else {
                    println!("{}", node);
                }
            }
        }
        Command::Neighbors { path, node } => {
            let graph = load(&path, verbose)?;
            if !graph.contains(node) {
                eprintln!("Node {} not found", node);
                exit(1);
            }
            for succ in graph.neighbors(node) {
                println!("{}", succ);
            }
        }
        Command::Degree { path, node } => {
            let graph = load(&path, verbose)?;
            if !graph.contains(node) {
                eprintln!("Node {} not found", node);
                exit(1);
            }
            println!("{}", graph.degree(node));
        }
        Command::Subgraph {
            traversal,
            separator,
        } => {
            let graph = load(&traversal.path, verbose)?;
            let nodes = graph.bfs(traversal.start, traversal.depth);
            if verbose {
                eprintln!("BFS found {} nodes", nodes.len());
            }
            for (src, dst) in graph.induced_edges(&nodes) {
                println!("{}{}{}", src, separator, dst);
            }
        }
        Command::Stats { path } => {
            let graph = load(&path, verbose)?;
            if let Some(csr) = graph.csr() {
                validate_csr(csr)?;
                let stats = degree_stats(csr);
                println!("nodes: {}", stats.num_nodes);
                println!("edges: {}", stats.num_edges);
                println!("min out-degree: {}", stats.min_degree);
                println!("max out-degree: {}", stats.max_degree);
                println!("mean out-degree: {:.3}", stats.mean_degree);
                println!(
                    "sinks: {} ({:.2}%)",
                    stats.sinks,
                    stats.sinks as f64 / stats.num_nodes.max(1) as f64 * 100.0
                );
            }
        }
        Command::Bench {
            path,
            random,
            repeats,
            depth,
            seed,
            tsv,
        } => {
            let graph = load(&path, verbose)?;
            if graph.num_nodes() == 0 {
                log::warn!("Graph '{}' has no nodes, nothing to bench", path.display());
            } else {
                for bench_result in [
                    bench_bfs(&graph, seed, random, repeats, depth),
                    bench_neighbors(&graph, seed, random, repeats),
                ] {
                    if tsv {
                        bench_result.print_as_tsv();
                    } else {
                        bench_result.print_formatted();
                    }
                }
            }
        }
        Command::Generate {
            output_path,
            nodes,
            edges,
            id_space,
            exponent,
            seed,
        } => {
            let parameters = SyntheticParameters {
                num_nodes: nodes,
                num_edges: edges,
                id_space,
                exponent,
                seed,
            };
            let file = File::create(&output_path)
                .with_context(|| format!("Could not create {}", output_path.display()))?;
            let written = write_synthetic_edge_list(&parameters, BufWriter::new(file))?;
            if verbose {
                println!("Written {} edges to {}", written, output_path.display());
            }
        }
    }

    log::info!("The command took {}s", start.elapsed().as_secs_f64());

    Ok(())
}

struct BenchResult {
    samples: Vec<f64>,
    name: String,
    measure_token: String,
}

impl BenchResult {
    fn new(name: &str, measure_token: &str) -> BenchResult {
        BenchResult {
            samples: Vec::new(),
            name: name.to_owned(),
            measure_token: measure_token.to_owned(),
        }
    }

    fn add(&mut self, sample: f64) {
        self.samples.push(sample);
    }

    fn print_as_tsv(&self) {
        for (i, sample) in self.samples.iter().enumerate() {
            println!("{}\t{}\t{}", self.name, i + 1, sample);
        }
    }

    fn print_formatted(&self) {
        for sample in self.samples.iter() {
            println!("{}: {:>20} {}", self.name, sample, self.measure_token)
        }
    }
}

fn sample_nodes(graph: &SparseGraph, seed: u64, samples: usize) -> Vec<ExternalId> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let num_nodes = graph.num_nodes();
    (0..samples)
        .filter_map(|_| graph.to_external(rng.random_range(0..num_nodes)))
        .collect()
}

fn bench_bfs(
    graph: &SparseGraph,
    seed: u64,
    samples: usize,
    repeats: usize,
    depth: usize,
) -> BenchResult {
    let mut bench_result = BenchResult::new("BFS", "ns/node");
    let starts = sample_nodes(graph, seed, samples);
    for _ in 0..repeats {
        let mut c: u64 = 0;
        let start = std::time::Instant::now();
        for &node in starts.iter() {
            c += black_box(graph.bfs(node, depth)).len() as u64;
        }
        bench_result.add((start.elapsed().as_secs_f64() / c.max(1) as f64) * 1e9);
    }
    bench_result
}

fn bench_neighbors(graph: &SparseGraph, seed: u64, samples: usize, repeats: usize) -> BenchResult {
    let mut bench_result = BenchResult::new("Neighbors", "ns/arc");
    let nodes = sample_nodes(graph, seed, samples);
    for _ in 0..repeats {
        let mut c: u64 = 0;
        let start = std::time::Instant::now();
        for &node in nodes.iter() {
            c += black_box(graph.neighbors(node)).len() as u64;
        }
        bench_result.add((start.elapsed().as_secs_f64() / c.max(1) as f64) * 1e9);
    }
    bench_result
}
