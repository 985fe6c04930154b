use std::collections::HashSet;

use anyhow::{Context, Result};
use graph_walk_core::{Algorithm, Graph, Traversal};
use serde::Serialize;

use crate::settings::{DiagramSettings, OutputFormat};

/// Render a finished traversal in the requested format.
pub fn render(
    format: OutputFormat,
    graph: &Graph,
    traversal: &Traversal,
    diagram: &DiagramSettings,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text(traversal)),
        OutputFormat::Dot => Ok(dot(graph, traversal, diagram)),
        OutputFormat::Json => json(graph, traversal),
    }
}

/// Order line followed by the numbered step listing.
pub fn text(traversal: &Traversal) -> String {
    let mut out = format!(
        "{} Traversal Order: {}\n\nTraversal Steps\n",
        traversal.algorithm,
        traversal.arrow_path()
    );
    for (step, node) in traversal.steps() {
        out.push_str(&format!("{}. Visited: {}\n", step, node));
    }
    out
}

/// Graphviz digraph of the whole graph.
///
/// An edge is highlighted when its endpoints are consecutive in the
/// visitation order. Every node is declared up front so nodes without any
/// edge still appear.
pub fn dot(graph: &Graph, traversal: &Traversal, diagram: &DiagramSettings) -> String {
    let traversed = traversal.traversed_pairs();
    let mut out = String::from("digraph traversal {\n");
    out.push_str(&format!("    rankdir={};\n", quote(diagram.rankdir.as_str())));

    for node in graph.nodes() {
        out.push_str(&format!("    {};\n", quote(node)));
    }
    for (from, to) in graph.edges() {
        let (color, penwidth) = if traversed.contains(&(from, to)) {
            (&diagram.traversed_color, diagram.traversed_penwidth)
        } else {
            (&diagram.untraversed_color, diagram.untraversed_penwidth)
        };
        out.push_str(&format!(
            "    {} -> {} [color={}, penwidth={}];\n",
            quote(from),
            quote(to),
            quote(color),
            penwidth
        ));
    }

    out.push_str("}\n");
    out
}

#[derive(Serialize)]
struct Step<'a> {
    step: usize,
    node: &'a str,
}

#[derive(Serialize)]
struct Report<'a> {
    algorithm: Algorithm,
    start: &'a str,
    order: &'a [String],
    steps: Vec<Step<'a>>,
    /// Graph edges drawn as traversed, each listed once.
    traversed_edges: Vec<[&'a str; 2]>,
}

pub fn json(graph: &Graph, traversal: &Traversal) -> Result<String> {
    let pairs = traversal.traversed_pairs();
    let mut seen = HashSet::new();
    let traversed_edges = graph
        .edges()
        .filter(|edge| pairs.contains(edge) && seen.insert(*edge))
        .map(|(from, to)| [from, to])
        .collect();

    let report = Report {
        algorithm: traversal.algorithm,
        start: &traversal.start,
        order: &traversal.order,
        steps: traversal
            .steps()
            .map(|(step, node)| Step { step, node })
            .collect(),
        traversed_edges,
    };
    let mut out = serde_json::to_string_pretty(&report).context("serializing traversal report")?;
    out.push('\n');
    Ok(out)
}

/// Double-quoted DOT identifier.
fn quote(id: &str) -> String {
    format!("\"{}\"", id.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Rankdir;

    fn sample_run(algorithm: Algorithm, start: &str) -> (Graph, Traversal) {
        let graph = Graph::sample();
        let traversal = algorithm.run(&graph, start);
        (graph, traversal)
    }

    #[test]
    fn test_text_bfs() {
        let (_, t) = sample_run(Algorithm::Bfs, "G");
        assert_eq!(
            text(&t),
            "BFS Traversal Order: G → F → H\n\nTraversal Steps\n1. Visited: G\n2. Visited: F\n3. Visited: H\n"
        );
    }

    #[test]
    fn test_text_dfs_header() {
        let (_, t) = sample_run(Algorithm::Dfs, "A");
        let out = text(&t);
        assert!(out.starts_with("DFS Traversal Order: A → B → C → E → H → G → F → D\n"));
        assert!(out.ends_with("8. Visited: D\n"));
    }

    #[test]
    fn test_dot_highlights_consecutive_edges() {
        let (g, t) = sample_run(Algorithm::Bfs, "A");
        let out = dot(&g, &t, &DiagramSettings::default());
        // A → B is consecutive in the order; A → D is not (B sits between them).
        assert!(out.contains("\"A\" -> \"B\" [color=\"#d32f2f\", penwidth=3];"));
        assert!(out.contains("\"A\" -> \"D\" [color=\"#4285f4\", penwidth=1];"));
        // D, C are consecutive and D → C is an edge.
        assert!(out.contains("\"D\" -> \"C\" [color=\"#d32f2f\", penwidth=3];"));
        assert!(out.contains("rankdir=\"LR\";"));
        assert_eq!(out.matches(" -> ").count(), 10);
    }

    #[test]
    fn test_dot_single_node_nothing_highlighted() {
        let (g, t) = sample_run(Algorithm::Dfs, "F");
        let out = dot(&g, &t, &DiagramSettings::default());
        assert!(!out.contains("#d32f2f"));
        assert!(out.contains("    \"F\";\n"));
    }

    #[test]
    fn test_dot_uses_diagram_settings() {
        let (g, t) = sample_run(Algorithm::Bfs, "G");
        let diagram = DiagramSettings {
            rankdir: Rankdir::Tb,
            traversed_color: "red".to_string(),
            traversed_penwidth: 5,
            ..DiagramSettings::default()
        };
        let out = dot(&g, &t, &diagram);
        assert!(out.contains("rankdir=\"TB\";"));
        assert!(out.contains("\"G\" -> \"F\" [color=\"red\", penwidth=5];"));
    }

    #[test]
    fn test_dot_quotes_identifiers() {
        let g = Graph::from_edges([("say \"hi\"", "back\\slash")]);
        let t = Algorithm::Bfs.run(&g, "say \"hi\"");
        let out = dot(&g, &t, &DiagramSettings::default());
        assert!(out.contains("\"say \\\"hi\\\"\" -> \"back\\\\slash\""));
    }

    #[test]
    fn test_json_report() {
        let (g, t) = sample_run(Algorithm::Bfs, "G");
        let value: serde_json::Value = serde_json::from_str(&json(&g, &t).unwrap()).unwrap();
        assert_eq!(value["algorithm"], "bfs");
        assert_eq!(value["start"], "G");
        assert_eq!(value["order"], serde_json::json!(["G", "F", "H"]));
        assert_eq!(value["steps"][2], serde_json::json!({"step": 3, "node": "H"}));
        // F → H is consecutive but not an edge, so only G → F is drawn as traversed.
        assert_eq!(value["traversed_edges"], serde_json::json!([["G", "F"]]));
    }

    #[test]
    fn test_json_traversed_edges_deduplicated() {
        let g = Graph::parse_edge_list("A,B\nA,B\nB,C");
        let t = Algorithm::Bfs.run(&g, "A");
        let value: serde_json::Value = serde_json::from_str(&json(&g, &t).unwrap()).unwrap();
        assert_eq!(value["traversed_edges"], serde_json::json!([["A", "B"], ["B", "C"]]));
    }

    #[test]
    fn test_render_dispatch() {
        let (g, t) = sample_run(Algorithm::Bfs, "A");
        let diagram = DiagramSettings::default();
        assert_eq!(render(OutputFormat::Text, &g, &t, &diagram).unwrap(), text(&t));
        assert!(render(OutputFormat::Dot, &g, &t, &diagram)
            .unwrap()
            .starts_with("digraph traversal {"));
        assert!(render(OutputFormat::Json, &g, &t, &diagram)
            .unwrap()
            .ends_with("}\n"));
    }
}
