use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use graph_walk_core::{Graph, GraphError};
use tracing::info;

/// Load the graph to traverse.
///
/// `None` selects the built-in sample, `-` reads edge lines from stdin, and
/// anything else is an edge-list file.
pub fn load_graph(edges: Option<&Path>) -> Result<Graph> {
    let graph = match edges {
        None => Graph::sample(),
        Some(path) if path == Path::new("-") => {
            load_graph_from(io::stdin().lock()).context("reading edge list from stdin")?
        }
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading edge list {}", path.display()))?;
            Graph::parse_edge_list(&text)
        }
    };

    let source = edges.map_or_else(|| "sample".to_string(), |p| p.display().to_string());
    info!(
        source = %source,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Parse edge lines from any reader.
pub fn load_graph_from<R: Read>(mut reader: R) -> io::Result<Graph> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(Graph::parse_edge_list(&text))
}

/// Pick the start node: the requested one if the graph has it, otherwise
/// the first node in ascending order.
pub fn resolve_start(graph: &Graph, requested: Option<&str>) -> Result<String, GraphError> {
    match requested {
        Some(node) => graph.require_node(node).map(|()| node.to_owned()),
        None => graph.default_start().map(str::to_owned),
    }
}

/// The sample graph as `source,target` lines, ready to feed back via `--edges`.
pub fn sample_edge_lines() -> String {
    Graph::sample()
        .edges()
        .map(|(from, to)| format!("{},{}\n", from, to))
        .collect()
}
