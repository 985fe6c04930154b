use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use graph_walk_core::Algorithm;
use serde::Deserialize;
use tracing::debug;

/// How a traversal is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Arrow-joined order plus numbered steps
    #[default]
    Text,
    /// Graphviz digraph with traversed edges highlighted
    Dot,
    /// Machine-readable report
    Json,
}

/// Graphviz layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rankdir {
    #[default]
    Lr,
    Tb,
    Rl,
    Bt,
}

impl Rankdir {
    pub fn as_str(self) -> &'static str {
        match self {
            Rankdir::Lr => "LR",
            Rankdir::Tb => "TB",
            Rankdir::Rl => "RL",
            Rankdir::Bt => "BT",
        }
    }
}

/// Settings file contents. Every key is optional; command-line flags win.
///
/// ```toml
/// algorithm = "dfs"
/// format = "dot"
/// start = "A"
///
/// [diagram]
/// rankdir = "TB"
/// traversed_color = "#d32f2f"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub format: OutputFormat,
    pub start: Option<String>,
    pub diagram: DiagramSettings,
}

/// Styling for the `dot` output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagramSettings {
    pub rankdir: Rankdir,
    pub traversed_color: String,
    pub untraversed_color: String,
    pub traversed_penwidth: u32,
    pub untraversed_penwidth: u32,
}

impl Default for DiagramSettings {
    fn default() -> Self {
        Self {
            rankdir: Rankdir::Lr,
            traversed_color: "#d32f2f".to_string(),
            untraversed_color: "#4285f4".to_string(),
            traversed_penwidth: 3,
            untraversed_penwidth: 1,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or defaults when no file is configured.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let settings = Self::parse(&text)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
