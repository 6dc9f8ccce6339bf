use std::process::ExitCode;

use clap::Parser;
use classic_paths::{
    graphs::{
        edge_list_graph::EdgeListGraph,
        graph_factory::GraphFactory,
        graph_functions::{brute_force_distances, is_spanning_tree, validate_path},
        path::ShortestPathRequest,
        Distance, Graph, GraphMode,
    },
    search::{
        bfs::bfs,
        collections::{
            dijkstra_data::{DijkstraData, DijkstraDataVec},
            vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
            vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
        },
        dfs::{dfs, dfs_recursive},
        dijkstra::dijkstra_with,
        floyd_warshall::floyd_warshall,
        kruskal::kruskal,
        prim::prim,
    },
    utility::{get_progressbar_long_jobs, init_logging},
};
use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Compares the searches against each other and against brute force on many
/// small random graphs.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of random graphs
    #[arg(short, long, default_value = "1000")]
    trials: u64,
    /// Vertices per graph. Brute force is exponential, keep this small
    #[arg(short, long, default_value = "8")]
    vertices: u32,
    /// Probability of every vertex pair becoming an edge, in [0, 1]
    #[arg(short, long, default_value = "0.3", value_parser = parse_probability)]
    edge_probability: f64,
    #[arg(short, long, default_value = "10")]
    max_weight: u32,
    #[arg(short, long, default_value = "0")]
    seed: u64,
}

fn parse_probability(value: &str) -> Result<f64, String> {
    let probability: f64 = value.parse().map_err(|error| format!("{}", error))?;
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(format!("{} is not a probability", probability))
    }
}

struct Buffers {
    data: DijkstraDataVec,
    expanded: VertexExpandedDataVec,
    queue: VertexDistanceQueueBinaryHeap,
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    let failures = (0..args.trials)
        .into_par_iter()
        .progress_with(get_progressbar_long_jobs("cross checking", args.trials))
        .map_init(
            || Buffers {
                data: DijkstraDataVec::new(args.vertices),
                expanded: VertexExpandedDataVec::new(args.vertices),
                queue: VertexDistanceQueueBinaryHeap::new(),
            },
            |buffers, trial| {
                let mut rng = StdRng::seed_from_u64(args.seed.wrapping_add(trial));
                let graph = if rng.gen_bool(0.5) {
                    GraphFactory::random_connected(
                        &mut rng,
                        args.vertices,
                        args.edge_probability,
                        args.max_weight,
                    )
                } else {
                    GraphFactory::random(
                        &mut rng,
                        GraphMode::Directed,
                        args.vertices,
                        args.edge_probability,
                        args.max_weight,
                    )
                };
                check_graph(&graph, buffers)
                    .into_iter()
                    .map(|failure| format!("trial {}: {}", trial, failure))
                    .collect_vec()
            },
        )
        .flatten()
        .collect::<Vec<_>>();

    for failure in failures.iter() {
        tracing::error!("{}", failure);
    }
    tracing::info!(
        trials = args.trials,
        failures = failures.len(),
        "cross check done"
    );

    if failures.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn check_graph(graph: &EdgeListGraph, buffers: &mut Buffers) -> Vec<String> {
    let mut failures = Vec::new();
    let all_pairs = floyd_warshall(graph);
    let unit_graph = graph.unit_weighted();

    for source in graph.vertices() {
        buffers.data.clear();
        buffers.expanded.clear();
        buffers.queue.clear();
        dijkstra_with(
            graph,
            &mut buffers.data,
            &mut buffers.expanded,
            &mut buffers.queue,
            source,
            None,
            &mut (),
        );

        let expected = brute_force_distances(graph, source);
        let expected_hops = brute_force_distances(&unit_graph, source);
        let bfs_data = bfs(graph, source);
        let dfs_data = dfs(graph, source);

        for target in graph.vertices() {
            let expected_distance = expected.get(&target).copied();
            let distance = Some(buffers.data.get_distance(target)).filter(|&d| d != Distance::MAX);
            if distance != expected_distance {
                failures.push(format!(
                    "dijkstra {}->{}: {:?} expected {:?}",
                    source, target, distance, expected_distance
                ));
            }
            if all_pairs.distance(source, target) != expected_distance {
                failures.push(format!(
                    "floyd-warshall {}->{}: {:?} expected {:?}",
                    source,
                    target,
                    all_pairs.distance(source, target),
                    expected_distance
                ));
            }
            let hops = bfs_data.hops(target).map(Distance::from);
            if hops != expected_hops.get(&target).copied() {
                failures.push(format!("bfs hops {}->{} differ", source, target));
            }
            if bfs_data.hops(target).is_some() != dfs_data.is_visited(target) {
                failures.push(format!("bfs and dfs disagree on reaching {}", target));
            }

            if let Some(path) = buffers.data.get_path(target) {
                let request = ShortestPathRequest::new(source, target);
                match validate_path(graph, &request, &path) {
                    Ok(weight) if weight == path.distance => {}
                    other => failures.push(format!(
                        "dijkstra path {}->{} invalid: {:?}",
                        source, target, other
                    )),
                }
            }
        }

        match dfs_recursive(graph, source) {
            Ok(recursive) if recursive.visit_order == dfs_data.visit_order => {}
            other => failures.push(format!(
                "recursive dfs from {} differs: {:?}",
                source,
                other.map(|data| data.visit_order)
            )),
        }
    }

    if graph.mode() == GraphMode::Undirected {
        let minimum_tree = kruskal(graph);
        for start in graph.vertices() {
            let tree = prim(graph, start).tree;
            if tree.weight != minimum_tree.weight || !is_spanning_tree(graph, &tree.edges) {
                failures.push(format!(
                    "prim from {} has weight {} expected {}",
                    start, tree.weight, minimum_tree.weight
                ));
            }
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::parse_probability;

    #[test]
    fn edge_probability_must_be_in_unit_interval() {
        assert_eq!(parse_probability("0.25"), Ok(0.25));
        assert_eq!(parse_probability("1"), Ok(1.0));
        assert!(parse_probability("1.5").is_err());
        assert!(parse_probability("-0.1").is_err());
        assert!(parse_probability("NaN").is_err());
        assert!(parse_probability("often").is_err());
    }
}
