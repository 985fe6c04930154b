use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ParseAlgorithmError;
use crate::graph::{Graph, NodeId};

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
}

impl Algorithm {
    /// Run this traversal from `start` and package the result.
    pub fn run(self, graph: &Graph, start: &str) -> Traversal {
        let order = match self {
            Algorithm::Bfs => bfs(graph, start),
            Algorithm::Dfs => dfs(graph, start),
        };
        Traversal {
            algorithm: self,
            start: start.to_owned(),
            order,
        }
    }

    /// Short label used in output headers.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "Breadth-First Search",
            Algorithm::Dfs => "Depth-First Search",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" | "depth" => Ok(Algorithm::Dfs),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Outcome of one traversal request.
///
/// `order` starts with `start` and lists every reachable node exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal {
    pub algorithm: Algorithm,
    pub start: NodeId,
    pub order: Vec<NodeId>,
}

impl Traversal {
    /// Visitation order joined with arrows: `A → B → C`.
    pub fn arrow_path(&self) -> String {
        self.order.join(" → ")
    }

    /// Numbered steps, counting from 1.
    pub fn steps(&self) -> impl Iterator<Item = (usize, &str)> {
        self.order
            .iter()
            .enumerate()
            .map(|(i, node)| (i + 1, node.as_str()))
    }

    /// Consecutive pairs of the visitation order.
    ///
    /// An edge of the graph counts as traversed when it matches one of these
    /// pairs. For DFS a backtrack jump (e.g. last leaf of one branch to the
    /// next sibling subtree) is a pair too, but it only highlights anything if
    /// the graph actually holds that edge.
    pub fn traversed_pairs(&self) -> HashSet<(&str, &str)> {
        self.order
            .windows(2)
            .map(|w| (w[0].as_str(), w[1].as_str()))
            .collect()
    }
}

/// Neighbors of `node` in ascending lexicographic order.
///
/// Duplicate edges stay duplicated here; the visited checks absorb them.
fn sorted_neighbors<'a>(graph: &'a Graph, node: &str) -> Vec<&'a str> {
    let mut neighbors: Vec<&str> = graph.neighbors(node).iter().map(String::as_str).collect();
    neighbors.sort_unstable();
    neighbors
}

/// Breadth-first visitation order from `start`.
///
/// FIFO frontier; a neighbor is enqueued only when it is neither visited nor
/// already waiting, so each node enters the queue once. `queued` mirrors the
/// queue contents so the waiting check is O(1).
///
/// `start` is not validated: an unknown node simply has no neighbors.
pub fn bfs<'a>(graph: &'a Graph, start: &'a str) -> Vec<NodeId> {
    let mut order: Vec<NodeId> = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queued: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    queue.push_back(start);
    queued.insert(start);

    while let Some(current) = queue.pop_front() {
        queued.remove(current);
        if !visited.insert(current) {
            continue;
        }
        trace!(node = current, "bfs visit");
        order.push(current.to_owned());

        for next in sorted_neighbors(graph, current) {
            if !visited.contains(next) && queued.insert(next) {
                queue.push_back(next);
            }
        }
    }

    debug!(start, visited = order.len(), "bfs complete");
    order
}

/// Depth-first (pre-order) visitation order from `start`.
///
/// Recursive; the visited set is shared by the whole call tree so a node
/// reached along two paths is emitted once, on the first.
pub fn dfs<'a>(graph: &'a Graph, start: &'a str) -> Vec<NodeId> {
    let mut visited: HashSet<&str> = HashSet::new();
    let order = dfs_visit(graph, start, &mut visited);
    debug!(start, visited = order.len(), "dfs complete");
    order
}

fn dfs_visit<'a>(graph: &'a Graph, node: &'a str, visited: &mut HashSet<&'a str>) -> Vec<NodeId> {
    visited.insert(node);
    trace!(node, "dfs visit");
    let mut order = vec![node.to_owned()];

    for next in sorted_neighbors(graph, node) {
        if !visited.contains(next) {
            order.extend(dfs_visit(graph, next, visited));
        }
    }
    order
}

/// Explicit-stack DFS producing exactly the same order as [`dfs`].
///
/// Each frame holds the neighbors of one node that are still to be tried,
/// stored descending so `pop()` yields them in ascending order. Stack depth
/// is bounded by heap, not by the thread stack.
pub fn dfs_iterative<'a>(graph: &'a Graph, start: &'a str) -> Vec<NodeId> {
    fn pending<'a>(graph: &'a Graph, node: &str) -> Vec<&'a str> {
        let mut neighbors = sorted_neighbors(graph, node);
        neighbors.reverse();
        neighbors
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut order: Vec<NodeId> = Vec::new();
    let mut stack: Vec<Vec<&str>> = Vec::new();

    visited.insert(start);
    order.push(start.to_owned());
    stack.push(pending(graph, start));

    while let Some(frame) = stack.last_mut() {
        match frame.pop() {
            Some(next) if !visited.contains(next) => {
                visited.insert(next);
                trace!(node = next, depth = stack.len(), "dfs visit");
                order.push(next.to_owned());
                stack.push(pending(graph, next));
            }
            Some(_) => {}
            None => {
                stack.pop();
            }
        }
    }

    debug!(start, visited = order.len(), "dfs (iterative) complete");
    order
}
