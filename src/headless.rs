//! Headless rendering.
//!
//! Renders a result set as plain text for scripting and tests: the probe
//! outcome, the selected adapter, and a dump of the visual structure it
//! produced. Results matching no adapter print as a tab-separated table,
//! the same fallback the TUI uses.

use crate::adapters::{self, Adapter, Visual};
use crate::results::TabularResult;
use std::fmt::Write;

/// Renders a result headlessly.
///
/// `pinned` overrides the priority-order selection, mirroring the user
/// picking a view in the TUI.
pub fn render(name: &str, result: &TabularResult, pinned: Option<Adapter>) -> String {
    let adapter = pinned.or_else(|| adapters::select(&result.columns));

    let mut out = String::new();
    let _ = writeln!(out, "source: {name}");
    let _ = writeln!(out, "columns: {}", result.columns.join(", "));
    let _ = writeln!(out, "rows: {}", result.row_count());

    match adapter {
        Some(adapter) => {
            let _ = writeln!(out, "adapter: {}", adapter.label());
            dump_visual(&mut out, &adapter.build(result));
        }
        None => {
            let _ = writeln!(out, "adapter: none (tabular fallback)");
            dump_table(&mut out, result);
        }
    }

    out
}

/// Renders a result as the plain table, ignoring the adapter registry.
pub fn render_table(name: &str, result: &TabularResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "source: {name}");
    let _ = writeln!(out, "columns: {}", result.columns.join(", "));
    let _ = writeln!(out, "rows: {}", result.row_count());
    let _ = writeln!(out, "adapter: none (table pinned)");
    dump_table(&mut out, result);
    out
}

fn dump_visual(out: &mut String, visual: &Visual) {
    match visual {
        Visual::Map(plot) => {
            let _ = writeln!(out, "points: {}", plot.points.len());
            for p in &plot.points {
                let label = p.label.as_deref().unwrap_or("-");
                let link = p.link.as_deref().unwrap_or("-");
                let _ = writeln!(out, "  {} {} {label} {link}", p.lat, p.lon);
            }
        }
        Visual::Graph(graph) => {
            let _ = writeln!(out, "nodes: {}", graph.nodes.len());
            for n in &graph.nodes {
                let _ = writeln!(out, "  {} ({})", n.id, n.label);
            }
            let _ = writeln!(out, "edges: {}", graph.edges.len());
            for e in &graph.edges {
                let label = e.label.as_deref().unwrap_or("");
                let _ = writeln!(out, "  {} -> {} [{label}]", e.from, e.to);
            }
        }
        Visual::Chart(series) => {
            let _ = writeln!(out, "legend: {}", series.legend);
            let _ = writeln!(out, "bars: {}", series.len());
            for (label, value) in series.labels.iter().zip(&series.values) {
                let _ = writeln!(out, "  {label}\t{value}");
            }
        }
    }
}

fn dump_table(out: &mut String, result: &TabularResult) {
    let _ = writeln!(out, "{}", result.columns.join("\t"));
    for row in &result.rows {
        let cells: Vec<&str> = result
            .columns
            .iter()
            .map(|col| row.get(col).map(|t| t.value.as_str()).unwrap_or(""))
            .collect();
        let _ = writeln!(out, "{}", cells.join("\t"));
    }
}
