//! Command-line argument parsing for rqlens.
//!
//! Uses clap to parse CLI arguments.

use crate::adapters::Adapter;
use clap::Parser;
use std::path::PathBuf;

/// A terminal viewer for SPARQL query results.
#[derive(Parser, Debug)]
#[command(name = "rqlens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// SPARQL JSON result files to open, one tab each (use "-" for stdin)
    #[arg(value_name = "RESULTS", required = true)]
    pub results: Vec<PathBuf>,

    /// Pin a view instead of probing (auto, map, graph, chart, table)
    #[arg(short = 'v', long, value_name = "VIEW", default_value = "auto")]
    pub view: String,

    /// Directory containing example .rq query files (overrides config)
    #[arg(short = 'q', long, value_name = "DIR")]
    pub queries_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run in headless mode: print a text rendering of each result and exit
    #[arg(long)]
    pub headless: bool,
}

/// The view selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewChoice {
    /// Probe adapters in priority order.
    #[default]
    Auto,
    /// Pin a specific adapter.
    Adapter(Adapter),
    /// Pin the tabular fallback.
    Table,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Parses the --view argument.
    pub fn parse_view(&self) -> std::result::Result<ViewChoice, String> {
        match self.view.to_lowercase().as_str() {
            "auto" => Ok(ViewChoice::Auto),
            "table" => Ok(ViewChoice::Table),
            other => Adapter::parse(other).map(ViewChoice::Adapter).ok_or_else(|| {
                format!("Invalid view: {other}. Expected: auto, map, graph, chart, or table")
            }),
        }
    }
}
