//! dijkstra-demo: shortest paths over the fixed five-vertex sample graph.
//!
//! Prints the ancestor chain of the target vertex (nearest ancestor first)
//! followed by the distance from the start to every reachable vertex.

use dijkstra_core::{shortest_paths_with, Graph, NoopObserver, Selection, ShortestPaths, VertexId};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// (from, to, weight) triples of the sample graph.
const SAMPLE_EDGES: [(VertexId, VertexId, i64); 7] = [
    (1, 2, 4),
    (1, 3, 1),
    (3, 2, 1),
    (3, 4, 5),
    (2, 4, 3),
    (2, 5, 1),
    (4, 5, 2),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    from: VertexId,
    to: VertexId,
    directed: bool,
    selection: Selection,
    json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            from: 1,
            to: 5,
            directed: false,
            selection: Selection::LinearScan,
            json: false,
        }
    }
}

enum Command {
    Run(Options),
    Help,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(msg) => {
            eprintln!("dijkstra-demo: {}. Use --help for options.", msg);
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&options) {
        eprintln!("dijkstra-demo: {}", e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: dijkstra-demo [--from N] [--to N] [--directed] [--heap] [--json]");
    println!();
    println!("Options:");
    println!("  --from N     Start vertex (default 1)");
    println!("  --to N       Target vertex for the ancestor chain (default 5)");
    println!("  --directed   Insert the sample edges one way only");
    println!("  --heap       Use binary-heap selection instead of the linear scan");
    println!("  --json       Emit the result as JSON");
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => return Ok(Command::Help),
            "--from" => options.from = parse_vertex("--from", iter.next())?,
            "--to" => options.to = parse_vertex("--to", iter.next())?,
            "--directed" => options.directed = true,
            "--heap" => options.selection = Selection::BinaryHeap,
            "--json" => options.json = true,
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(Command::Run(options))
}

fn parse_vertex(flag: &str, value: Option<&String>) -> Result<VertexId, String> {
    let value = value.ok_or_else(|| format!("{} needs a vertex id", flag))?;
    value
        .parse()
        .map_err(|_| format!("{} expects a non-negative integer, got '{}'", flag, value))
}

fn build_sample(directed: bool) -> dijkstra_core::Result<Graph> {
    let mut graph = Graph::new(directed);
    let stored = graph.load_edges(SAMPLE_EDGES)?;
    debug!(
        stored,
        arcs = graph.edge_count(),
        directed,
        "sample graph built"
    );
    Ok(graph)
}

fn run(options: &Options) -> dijkstra_core::Result<()> {
    let graph = build_sample(options.directed)?;
    let paths = shortest_paths_with(&graph, options.from, options.selection, &mut NoopObserver)?;

    if options.json {
        println!("{}", to_json(&paths, options.to));
    } else {
        println!("{}", format_ancestors(&paths, options.to));
        println!();
        for line in format_distances(&paths) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Ancestors of `target`, nearest first, space separated.
fn format_ancestors(paths: &ShortestPaths, target: VertexId) -> String {
    if !paths.is_reachable(target) {
        return format!("No path from {} to {}", paths.start(), target);
    }
    paths
        .ancestors(target)
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_distances(paths: &ShortestPaths) -> Vec<String> {
    paths
        .all_distances()
        .into_iter()
        .map(|row| {
            format!(
                "Shortest distance from {} to {}: {}",
                row.start, row.vertex, row.distance
            )
        })
        .collect()
}

fn to_json(paths: &ShortestPaths, target: VertexId) -> serde_json::Value {
    let distances: Vec<serde_json::Value> = paths
        .all_distances()
        .into_iter()
        .map(|row| json!({ "vertex": row.vertex, "distance": row.distance }))
        .collect();

    json!({
        "start": paths.start(),
        "target": target,
        "ancestors": paths.ancestors(target),
        "path": paths.path_to(target),
        "distances": distances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample_paths(from: VertexId) -> ShortestPaths {
        let graph = build_sample(false).unwrap();
        shortest_paths_with(&graph, from, Selection::LinearScan, &mut NoopObserver).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        match parse_args(&[]).unwrap() {
            Command::Run(options) => assert_eq!(options, Options::default()),
            Command::Help => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_flags() {
        let flags = ["--from", "2", "--to", "4", "--directed", "--heap", "--json"];
        match parse_args(&args(&flags)).unwrap() {
            Command::Run(options) => {
                assert_eq!(options.from, 2);
                assert_eq!(options.to, 4);
                assert!(options.directed);
                assert!(options.json);
                assert_eq!(options.selection, Selection::BinaryHeap);
            }
            Command::Help => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_help() {
        assert!(matches!(parse_args(&args(&["--help"])), Ok(Command::Help)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--from"])).is_err());
        assert!(parse_args(&args(&["--to", "x"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_sample_ancestors() {
        assert_eq!(format_ancestors(&sample_paths(1), 5), "2 3 1");
    }

    #[test]
    fn test_unreachable_target() {
        assert_eq!(format_ancestors(&sample_paths(1), 9), "No path from 1 to 9");
    }

    #[test]
    fn test_sample_distances() {
        let lines = format_distances(&sample_paths(1));
        assert_eq!(
            lines,
            vec![
                "Shortest distance from 1 to 1: 0",
                "Shortest distance from 1 to 2: 2",
                "Shortest distance from 1 to 3: 1",
                "Shortest distance from 1 to 4: 5",
                "Shortest distance from 1 to 5: 3",
            ]
        );
    }

    #[test]
    fn test_json_shape() {
        let value = to_json(&sample_paths(1), 5);
        assert_eq!(value["start"], 1);
        assert_eq!(value["path"], json!([1, 3, 2, 5]));
        assert_eq!(value["ancestors"], json!([2, 3, 1]));
        assert_eq!(value["distances"].as_array().map(|a| a.len()), Some(5));
        assert_eq!(value["distances"][3], json!({ "vertex": 4, "distance": 5 }));
    }

    #[test]
    fn test_json_unreachable_path_is_null() {
        let value = to_json(&sample_paths(1), 7);
        assert!(value["path"].is_null());
    }

    #[test]
    fn test_directed_sample() {
        let graph = build_sample(true).unwrap();
        let mut noop = NoopObserver;
        let paths = shortest_paths_with(&graph, 5, Selection::LinearScan, &mut noop).unwrap();
        assert_eq!(paths.reachable_count(), 1);
    }

    #[test]
    fn test_invalid_start_errors() {
        let options = Options {
            from: 0,
            ..Options::default()
        };
        assert!(run(&options).is_err());
    }
}
