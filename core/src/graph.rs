use std::collections::HashMap;

use tracing::debug;

use crate::error::GraphError;

/// Node identifier as the user typed it (e.g. "A").
pub type NodeId = String;

/// Adjacency of the built-in sample graph.
///
/// `F` has no outgoing edges; it is only reachable through `G`.
pub const SAMPLE_ADJACENCY: &[(&str, &[&str])] = &[
    ("A", &["B", "D"]),
    ("B", &["C", "E", "G"]),
    ("C", &["A"]),
    ("D", &["C"]),
    ("E", &["H"]),
    ("F", &[]),
    ("G", &["F", "H"]),
    ("H", &[]),
];

/// Parse one `source,target` edge line.
///
/// Returns None for blank lines, lines without a separator, lines with more
/// than one separator, and lines where either side is empty after trimming.
pub fn parse_edge_line(line: &str) -> Option<(&str, &str)> {
    let (source, target) = line.trim().split_once(',')?;
    if target.contains(',') {
        return None;
    }
    let (source, target) = (source.trim(), target.trim());
    if source.is_empty() || target.is_empty() {
        return None;
    }
    Some((source, target))
}

/// In-memory directed graph: one ordered adjacency list per node.
///
/// Every node mentioned as an edge target also has an entry (possibly
/// empty), so a known node never reads as missing. `order` keeps nodes in
/// first-mention order for reproducible listings and diagrams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    outgoing: HashMap<NodeId, Vec<NodeId>>,
    order: Vec<NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            outgoing: HashMap::with_capacity(node_count),
            order: Vec::with_capacity(node_count),
        }
    }

    /// Build from `(source, target)` pairs, in the order given.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (source, target) in edges {
            graph.add_edge(source.as_ref(), target.as_ref());
        }
        graph
    }

    /// Build from `(node, neighbors)` entries. Nodes with an empty list are kept.
    pub fn from_adjacency<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in entries {
            graph.add_node(node);
            for target in neighbors {
                graph.add_edge(node, target);
            }
        }
        graph
    }

    /// The built-in sample graph (see [`SAMPLE_ADJACENCY`]).
    pub fn sample() -> Self {
        Self::from_adjacency(SAMPLE_ADJACENCY.iter().copied())
    }

    /// Parse free-text edge lines (`source,target`, one per line).
    ///
    /// Malformed lines are skipped, never reported as errors.
    pub fn parse_edge_list(text: &str) -> Self {
        let mut graph = Self::new();
        for (index, line) in text.lines().enumerate() {
            match parse_edge_line(line) {
                Some((source, target)) => graph.add_edge(source, target),
                None if line.trim().is_empty() => {}
                None => debug!(line = index + 1, content = line, "skipping malformed edge line"),
            }
        }
        graph
    }

    /// Register a node with no edges. Returns false if it already existed.
    pub fn add_node(&mut self, id: &str) -> bool {
        if self.outgoing.contains_key(id) {
            return false;
        }
        self.outgoing.insert(id.to_owned(), Vec::new());
        self.order.push(id.to_owned());
        true
    }

    /// Add a directed edge, creating either endpoint on first mention.
    /// Duplicate edges are kept.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.add_node(from);
        self.add_node(to);
        if let Some(list) = self.outgoing.get_mut(from) {
            list.push(to.to_owned());
        }
    }

    /// Outgoing neighbors in insertion order. Unknown nodes have none.
    pub fn neighbors(&self, id: &str) -> &[NodeId] {
        self.outgoing.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.outgoing.contains_key(id)
    }

    /// Nodes in first-mention order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Nodes in ascending order: the choices offered for a start node.
    pub fn sorted_nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = self.nodes().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Every edge as `(source, target)`, grouped by source in first-mention order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes().flat_map(move |from| {
            self.neighbors(from)
                .iter()
                .map(move |to| (from, to.as_str()))
        })
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Strict membership check for callers that must reject unknown start nodes.
    pub fn require_node(&self, id: &str) -> Result<(), GraphError> {
        if self.is_empty() {
            return Err(GraphError::Empty);
        }
        if self.contains(id) {
            return Ok(());
        }
        Err(GraphError::UnknownNode {
            node: id.to_owned(),
            available: self.sorted_nodes().into_iter().map(str::to_owned).collect(),
        })
    }

    /// First node in ascending order, the default start-node selection.
    pub fn default_start(&self) -> Result<&str, GraphError> {
        self.nodes().min().ok_or(GraphError::Empty)
    }
}
