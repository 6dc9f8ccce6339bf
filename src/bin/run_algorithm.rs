use std::{
    error::Error,
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};
use classic_paths::{
    graphs::{graph_factory::GraphFactory, Graph, Vertex},
    search::{
        bfs::bfs_observed,
        dfs::{dfs_observed, dfs_recursive},
        dijkstra::dijkstra_observed,
        floyd_warshall::floyd_warshall,
        kruskal::kruskal_observed,
        prim::prim_observed,
        trace::SearchEvent,
    },
    utility::init_logging,
};
use serde_json::{json, Value};

#[derive(Debug, ValueEnum, Clone, Copy)]
enum Algorithm {
    Bfs,
    Dfs,
    DfsRecursive,
    Dijkstra,
    Prim,
    Kruskal,
    FloydWarshall,
}

/// Runs one algorithm on a graph file and prints its result as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph in `.json` or `.bincode` format
    #[arg(short, long, env = "CLASSIC_PATHS_GRAPH")]
    graph: PathBuf,
    #[arg(short, long, value_enum)]
    algorithm: Algorithm,
    /// Start vertex, defaults to the first vertex of the graph
    #[arg(short, long)]
    source: Option<Vertex>,
    /// Optional target; the path to it is added to the output
    #[arg(short, long)]
    target: Option<Vertex>,
    /// Include the step by step trace of the search
    #[arg(long)]
    trace: bool,
    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    let graph = GraphFactory::from_file(&args.graph)?;
    tracing::info!(
        vertices = graph.number_of_vertices(),
        edges = graph.number_of_edges(),
        "loaded graph"
    );

    let source = match args.source.or_else(|| graph.vertices().next()) {
        Some(source) => source,
        None => return Err("graph has no vertices".into()),
    };
    if !graph.contains(source) {
        tracing::warn!(source, "source is not a vertex of the graph");
    }

    let mut trace: Vec<SearchEvent> = Vec::new();
    let mut result = match args.algorithm {
        Algorithm::Bfs => {
            let data = bfs_observed(&graph, source, &mut trace);
            let path = args.target.and_then(|target| data.get_path(target));
            json!({ "result": data, "path": path })
        }
        Algorithm::Dfs => {
            let data = dfs_observed(&graph, source, &mut trace);
            let path = args.target.and_then(|target| data.get_path(target));
            json!({ "result": data, "path": path })
        }
        Algorithm::DfsRecursive => {
            let data = dfs_recursive(&graph, source)?;
            let path = args.target.and_then(|target| data.get_path(target));
            json!({ "result": data, "path": path })
        }
        Algorithm::Dijkstra => {
            let space = dijkstra_observed(&graph, source, args.target, &mut trace);
            let path = args.target.and_then(|target| space.get_path(target));
            json!({ "result": space, "path": path })
        }
        Algorithm::Prim => json!({ "result": prim_observed(&graph, source, &mut trace) }),
        Algorithm::Kruskal => json!({ "result": kruskal_observed(&graph, &mut trace) }),
        Algorithm::FloydWarshall => {
            let all_pairs = floyd_warshall(&graph);
            let path = args.target.and_then(|target| all_pairs.path(source, target));
            json!({ "result": all_pairs, "path": path })
        }
    };

    if args.trace {
        if let Value::Object(map) = &mut result {
            map.insert("trace".to_string(), serde_json::to_value(&trace)?);
        }
    }

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &result)?;
    writeln!(writer)?;

    Ok(())
}
