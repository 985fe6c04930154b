use graph_walk_core::{bfs, dfs, dfs_iterative, Graph};
use std::collections::VecDeque;
use std::time::Instant;

/// Largest node count the recursive DFS is run on; beyond this only the
/// explicit-stack variant is timed. Node count bounds recursion depth from
/// above, so this stands in for a depth check without walking the graph first.
const RECURSIVE_DFS_MAX_NODES: u64 = 10_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(200_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: graph-walk-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all      Run all generators and benchmark each (default)");
        println!("  lsystem  Fractal branching tree (shallow, wide)");
        println!("  random   Erdos-Renyi uniform random edges");
        println!("  dla      Diffusion-limited aggregation (long winding paths)");
        println!();
        println!("Default node_count: 200000");
        return;
    }

    if node_count < 2 {
        eprintln!("node_count must be at least 2");
        return;
    }

    println!("graph-walk-bench");
    println!("================");
    println!();

    let generators: Vec<(&str, fn(u64) -> Graph)> = match mode {
        "lsystem" => vec![("L-system tree", gen_lsystem)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("L-system tree", gen_lsystem as fn(u64) -> Graph),
            ("Erdos-Renyi random", gen_random),
            ("DLA (organic branching)", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> Graph, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    println!(
        "Generated in {:.2}s: {} nodes, {} edges",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count()
    );

    let root = node(0);
    println!();
    println!("{:>16} {:>12} {:>10}", "traversal", "visited", "time");
    println!("{:->16} {:->12} {:->10}", "", "", "");

    let t = Instant::now();
    let by_bfs = bfs(&graph, &root);
    report("bfs", by_bfs.len(), t);

    let t = Instant::now();
    let by_stack = dfs_iterative(&graph, &root);
    report("dfs (stack)", by_stack.len(), t);

    if node_count <= RECURSIVE_DFS_MAX_NODES {
        let t = Instant::now();
        let by_recursion = dfs(&graph, &root);
        report("dfs (recursive)", by_recursion.len(), t);
        if by_recursion != by_stack {
            println!("{:>16} MISMATCH between recursive and stack DFS", "");
        }
    }

    if by_bfs.len() != by_stack.len() {
        println!("{:>16} MISMATCH: bfs and dfs reached different node counts", "");
    }
    println!();
}

fn report(label: &str, visited: usize, started: Instant) {
    println!(
        "{:>16} {:>12} {:>8.1}ms",
        label,
        visited,
        started.elapsed().as_secs_f64() * 1000.0
    );
}

// ---------------------------------------------------------------------------
// Generators: O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

fn node(i: u64) -> String {
    format!("n{}", i)
}

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

/// L-system fractal tree: every node gets up to three children.
///
/// Depth grows with log(n), so even the recursive DFS stays shallow. Child
/// insertion order is shuffled to exercise the lexicographic tie-break.
fn gen_lsystem(node_count: u64) -> Graph {
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(42);
    let branching = 3u64;

    graph.add_node(&node(0));
    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            let mut children: Vec<u64> = Vec::with_capacity(branching as usize);
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                children.push(next_id);
                next_id += 1;
            }
            if children.len() > 1 {
                let k = rng.next(children.len() as u64) as usize;
                children.rotate_left(k);
            }
            for child in children {
                graph.add_edge(&node(parent), &node(child));
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Erdos-Renyi: ~5 uniform random out-edges per node, self-loops included.
fn gen_random(node_count: u64) -> Graph {
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        graph.add_node(&node(i));
    }
    for _ in 0..node_count * 5 {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        graph.add_edge(&node(from), &node(to));
    }

    graph
}

/// DLA (Diffusion-Limited Aggregation): organic branching growth.
///
/// Each new node is attached from a random recent "surface" node, with an
/// occasional long-range back edge that creates cycles. Produces long
/// winding paths: deep enough to overflow a recursive DFS at large sizes.
fn gen_dla(node_count: u64) -> Graph {
    let mut graph = Graph::with_capacity(node_count as usize);
    let mut rng = FastRng::new(77777);

    graph.add_node(&node(0));

    // VecDeque for O(1) pop_front when evicting the oldest surface node.
    let surface_max = 10_000usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        graph.add_edge(&node(attach_to), &node(new_node));

        // 10% chance of an edge back into older structure
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            graph.add_edge(&node(new_node), &node(other));
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    graph
}
