use std::{error::Error, fs, path::PathBuf};

use clap::Parser;
use classic_paths::{
    graphs::{
        graph_factory::GraphFactory,
        samples::{all_pairs_graph, dijkstra_graph, spanning_tree_graph, traversal_graph},
    },
    utility::init_logging,
};

/// Writes the catalog's sample graphs into `directory`, one file per graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "samples")]
    directory: PathBuf,
    /// Either `json` or `bincode`
    #[arg(short, long, default_value = "json")]
    extension: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    fs::create_dir_all(&args.directory)?;
    let samples = [
        ("traversal", traversal_graph()),
        ("dijkstra", dijkstra_graph()),
        ("spanning_tree", spanning_tree_graph()),
        ("all_pairs", all_pairs_graph()),
    ];
    for (name, graph) in samples.iter() {
        let path = args
            .directory
            .join(name)
            .with_extension(args.extension.as_str());
        GraphFactory::to_file(graph, &path)?;
        tracing::info!(?path, "wrote sample graph");
    }

    Ok(())
}
