//! graph-walk-core: directed graph model and traversal engine.
//!
//! Holds a small directed graph as an adjacency list keyed by string node
//! identifiers and provides BFS and DFS traversals. Ties between neighbors
//! are always broken by ascending lexicographic order, so the visitation
//! order depends only on the graph, never on how its edges were entered.
//!
//! No I/O and no rendering: callers build a [`Graph`], pick a start node,
//! run one [`Algorithm`] and render the returned [`Traversal`].

mod error;
mod graph;
mod traversal;

pub use error::{GraphError, ParseAlgorithmError};
pub use graph::{parse_edge_line, Graph, NodeId, SAMPLE_ADJACENCY};
pub use traversal::{bfs, dfs, dfs_iterative, Algorithm, Traversal};
