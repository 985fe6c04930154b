use thiserror::Error;

/// Failures of strict node lookups.
///
/// Traversals never return these. They exist for callers that validate a
/// start node before running one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph has no nodes")]
    Empty,

    #[error("node '{node}' not found (available: {})", .available.join(", "))]
    UnknownNode { node: String, available: Vec<String> },
}

/// An algorithm name that is neither BFS nor DFS.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}': use 'bfs' or 'dfs'")]
pub struct ParseAlgorithmError(pub String);
