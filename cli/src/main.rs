//! graph-walk: run BFS or DFS over a small directed graph and show the result.
//!
//! The graph comes from the built-in sample or from `source,target` edge
//! lines. The chosen traversal runs once and its visitation order is
//! rendered as text, a Graphviz diagram, or JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use graph_walk_core::Algorithm;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod input;
mod render;
mod settings;

use settings::{OutputFormat, Settings};

/// Visualize breadth-first and depth-first traversal of a directed graph
#[derive(Parser)]
#[command(name = "graph-walk", version, about)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Settings file (TOML)
    #[arg(long, global = true, env = "GRAPH_WALK_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a traversal and render the visitation order
    Walk(WalkArgs),
    /// List the nodes that can be chosen as a start node
    Nodes(SourceArgs),
    /// Print the built-in sample graph as edge lines
    Sample,
}

#[derive(Args)]
struct SourceArgs {
    /// Edge list with one `source,target` per line; `-` reads stdin.
    /// Without it the built-in sample graph is used.
    #[arg(long, value_name = "FILE")]
    edges: Option<PathBuf>,
}

#[derive(Args)]
struct WalkArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Start node (default: first node in ascending order)
    #[arg(long)]
    start: Option<String>,

    /// Traversal to run: bfs or dfs
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("graph-walk: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Walk(args) => walk(args, &settings),
        Commands::Nodes(args) => {
            let graph = input::load_graph(args.edges.as_deref())?;
            for node in graph.sorted_nodes() {
                println!("{}", node);
            }
            Ok(())
        }
        Commands::Sample => {
            print!("{}", input::sample_edge_lines());
            Ok(())
        }
    }
}

/// Walk options after layering flags over the settings file.
#[derive(Debug, PartialEq, Eq)]
struct WalkChoices<'a> {
    /// None defers to the graph's first node.
    start: Option<&'a str>,
    algorithm: Algorithm,
    format: OutputFormat,
}

/// Flags win over settings-file values, which win over built-in defaults.
fn merge_choices<'a>(args: &'a WalkArgs, settings: &'a Settings) -> WalkChoices<'a> {
    WalkChoices {
        start: args.start.as_deref().or(settings.start.as_deref()),
        algorithm: args.algorithm.unwrap_or(settings.algorithm),
        format: args.format.unwrap_or(settings.format),
    }
}

fn walk(args: WalkArgs, settings: &Settings) -> Result<()> {
    let graph = input::load_graph(args.source.edges.as_deref())?;
    let WalkChoices {
        start,
        algorithm,
        format,
    } = merge_choices(&args, settings);
    let start = input::resolve_start(&graph, start)?;

    info!(algorithm = algorithm.full_name(), start = %start, ?format, "running traversal");
    let traversal = algorithm.run(&graph, &start);
    info!(visited = traversal.order.len(), of = graph.node_count(), "traversal finished");

    print!(
        "{}",
        render::render(format, &graph, &traversal, &settings.diagram)?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_walk_flags() {
        let cli = Cli::parse_from([
            "graph-walk", "walk", "--edges", "g.txt", "--start", "B", "-a", "dfs", "-f", "dot",
        ]);
        let Commands::Walk(args) = cli.command else {
            panic!("expected walk");
        };
        assert_eq!(args.source.edges, Some(PathBuf::from("g.txt")));
        assert_eq!(args.start.as_deref(), Some("B"));
        assert_eq!(args.algorithm, Some(Algorithm::Dfs));
        assert_eq!(args.format, Some(OutputFormat::Dot));
    }

    #[test]
    fn test_parse_walk_defaults_left_unset() {
        let cli = Cli::parse_from(["graph-walk", "walk"]);
        let Commands::Walk(args) = cli.command else {
            panic!("expected walk");
        };
        assert!(args.source.edges.is_none());
        assert!(args.algorithm.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["graph-walk", "walk", "-a", "astar"]).is_err());
    }

    fn walk_args(argv: &[&str]) -> WalkArgs {
        let cli = Cli::parse_from(["graph-walk", "walk"].iter().chain(argv));
        let Commands::Walk(args) = cli.command else {
            panic!("expected walk");
        };
        args
    }

    fn file_settings() -> Settings {
        Settings::parse("algorithm = \"dfs\"\nformat = \"json\"\nstart = \"C\"\n").unwrap()
    }

    #[test]
    fn test_flags_override_settings_file() {
        let args = walk_args(&["--start", "G", "-a", "bfs", "-f", "dot"]);
        let settings = file_settings();
        assert_eq!(
            merge_choices(&args, &settings),
            WalkChoices {
                start: Some("G"),
                algorithm: Algorithm::Bfs,
                format: OutputFormat::Dot,
            }
        );
    }

    #[test]
    fn test_settings_file_fills_missing_flags() {
        let args = walk_args(&[]);
        let settings = file_settings();
        assert_eq!(
            merge_choices(&args, &settings),
            WalkChoices {
                start: Some("C"),
                algorithm: Algorithm::Dfs,
                format: OutputFormat::Json,
            }
        );
    }

    #[test]
    fn test_flags_and_file_mix() {
        let args = walk_args(&["-a", "bfs"]);
        let settings = file_settings();
        let choices = merge_choices(&args, &settings);
        assert_eq!(choices.algorithm, Algorithm::Bfs);
        assert_eq!(choices.format, OutputFormat::Json);
        assert_eq!(choices.start, Some("C"));
    }

    #[test]
    fn test_builtin_defaults_without_flags_or_file() {
        let args = walk_args(&[]);
        let settings = Settings::default();
        assert_eq!(
            merge_choices(&args, &settings),
            WalkChoices {
                start: None,
                algorithm: Algorithm::Bfs,
                format: OutputFormat::Text,
            }
        );
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["graph-walk", "nodes", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }
}
