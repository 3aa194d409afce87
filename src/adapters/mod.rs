//! Result adapters for rqlens.
//!
//! Each adapter answers two questions about a tabular result: "can I render
//! this shape?" (a pure probe over the column names) and "what does it look
//! like?" (a visual structure built fresh per render). Adapters live in a
//! static, priority-ordered registry; the first adapter whose probe passes
//! wins unless the user has pinned a view. Results matching no adapter fall
//! back to the plain tabular display.

pub mod chart;
pub mod graph;
pub mod map;
pub mod project;

pub use chart::BarSeries;
pub use graph::{GraphEdge, GraphNode, NetworkGraph};
pub use map::{MapPlot, MapPoint};
pub use project::{project, project_result, resolve_role, role_present, ProjectedRow};

use crate::results::TabularResult;

/// The registered result adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    Map,
    Graph,
    Chart,
}

/// All adapters, in descending render priority.
pub const ALL: [Adapter; 3] = [Adapter::Map, Adapter::Graph, Adapter::Chart];

impl Adapter {
    /// Display label shown in the view switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Map => "Map",
            Self::Graph => "Graph",
            Self::Chart => "Chart",
        }
    }

    /// Decorative icon glyph for the view switcher.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Map => "⊕",
            Self::Graph => "◉",
            Self::Chart => "▥",
        }
    }

    /// Render priority; lower ranks are probed first.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Map => 0,
            Self::Graph => 1,
            Self::Chart => 2,
        }
    }

    /// Capability probe over the column names only.
    pub fn probe(&self, columns: &[String]) -> bool {
        match self {
            Self::Map => map::probe(columns),
            Self::Graph => graph::probe(columns),
            Self::Chart => chart::probe(columns),
        }
    }

    /// Builds this adapter's visual structure for a result.
    ///
    /// Callers are expected to have consulted [`Adapter::probe`] first; a
    /// build on a non-matching result simply yields an empty structure.
    pub fn build(&self, result: &TabularResult) -> Visual {
        match self {
            Self::Map => Visual::Map(map::build(result)),
            Self::Graph => Visual::Graph(graph::build(result)),
            Self::Chart => Visual::Chart(chart::build(result)),
        }
    }

    /// Parses an adapter name as used by `--view`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "map" => Some(Self::Map),
            "graph" => Some(Self::Graph),
            "chart" => Some(Self::Chart),
            _ => None,
        }
    }
}

/// A renderer-specific output model, rebuilt on every render call.
#[derive(Debug, Clone, PartialEq)]
pub enum Visual {
    Map(MapPlot),
    Graph(NetworkGraph),
    Chart(BarSeries),
}

/// Selects the first adapter (in priority order) that can render `columns`.
///
/// `None` means no custom adapter applies and the caller should fall back
/// to the tabular display.
pub fn select(columns: &[String]) -> Option<Adapter> {
    ALL.into_iter().find(|a| a.probe(columns))
}

/// Returns every adapter whose probe passes, in priority order.
pub fn matching(columns: &[String]) -> Vec<Adapter> {
    ALL.into_iter().filter(|a| a.probe(columns)).collect()
}
