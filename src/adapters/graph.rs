//! Graph adapter: tabular results to a directed node/edge graph.
//!
//! A result qualifies when its columns contain subject-like and object-like
//! variables; the predicate is display-only and never gates the probe. Node
//! identity is the resolved identifier string; the first label seen for an
//! identifier wins. Multi-edges between the same pair are kept as-is.

use crate::adapters::project::{project_result, resolve_role, role_present, ProjectedRow};
use crate::results::TabularResult;
use std::collections::HashMap;
use tracing::debug;

/// Subject synonyms, in priority order.
const SUBJECT: &[&str] = &["s", "subject"];

/// Predicate synonyms; optional, used only as the edge label.
const PREDICATE: &[&str] = &["p", "predicate"];

/// Object synonyms, in priority order.
const OBJECT: &[&str] = &["o", "object"];

/// Subject label synonyms; falls back to the identifier.
const SUBJECT_LABEL: &[&str] = &["sLabel", "subjectLabel"];

/// Object label synonyms; falls back to the identifier.
const OBJECT_LABEL: &[&str] = &["oLabel", "objectLabel"];

/// A directed graph extracted from one result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkGraph {
    /// Deduplicated nodes, in first-seen order.
    pub nodes: Vec<GraphNode>,
    /// One edge per surviving row, in source-row order.
    pub edges: Vec<GraphEdge>,
}

/// One graph node.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    /// Identifier: the resolved subject/object value.
    pub id: String,
    /// Display label; the identifier itself if no label column was bound.
    pub label: String,
}

/// One directed edge.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    /// Predicate value, if bound. Whether it is shown is the view's call.
    pub label: Option<String>,
}

impl NetworkGraph {
    /// Returns the index of a node by id, if present.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }
}

/// Capability probe: subject and object roles must be present.
pub fn probe(columns: &[String]) -> bool {
    role_present(columns, SUBJECT) && role_present(columns, OBJECT)
}

/// Builds the node/edge set for a result.
pub fn build(result: &TabularResult) -> NetworkGraph {
    let rows = project_result(result);
    let total = rows.len();

    let mut graph = NetworkGraph::default();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for row in &rows {
        let (Some(subject), Some(object)) =
            (resolve_role(row, SUBJECT), resolve_role(row, OBJECT))
        else {
            continue;
        };

        intern_node(&mut graph, &mut seen, subject, label_for(row, SUBJECT_LABEL, subject));
        intern_node(&mut graph, &mut seen, object, label_for(row, OBJECT_LABEL, object));

        graph.edges.push(GraphEdge {
            from: subject.to_string(),
            to: object.to_string(),
            label: resolve_role(row, PREDICATE).map(str::to_string),
        });
    }

    if graph.edges.len() < total {
        debug!(
            dropped = total - graph.edges.len(),
            total, "graph: dropped rows missing subject or object"
        );
    }

    graph
}

/// Resolves a node label, falling back to the identifier.
fn label_for(row: &ProjectedRow, synonyms: &[&str], id: &str) -> String {
    resolve_role(row, synonyms).unwrap_or(id).to_string()
}

/// Adds a node unless its identifier was already seen; first label wins.
fn intern_node(
    graph: &mut NetworkGraph,
    seen: &mut HashMap<String, usize>,
    id: &str,
    label: String,
) {
    if !seen.contains_key(id) {
        seen.insert(id.to_string(), graph.nodes.len());
        graph.nodes.push(GraphNode {
            id: id.to_string(),
            label,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{binding, TabularResult, Term};

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn spo_row(s: &str, p: &str, o: &str) -> crate::results::Binding {
        binding([
            ("s", Term::uri(s)),
            ("p", Term::uri(p)),
            ("o", Term::uri(o)),
        ])
    }

    #[test]
    fn test_probe_requires_subject_and_object() {
        assert!(probe(&columns(&["s", "p", "o"])));
        assert!(probe(&columns(&["subject", "object"])));
        // Predicate alone does not gate the probe.
        assert!(probe(&columns(&["s", "o"])));
        assert!(!probe(&columns(&["s", "p"])));
        assert!(!probe(&columns(&["place", "name", "population"])));
    }

    #[test]
    fn test_build_single_triple() {
        let result = TabularResult::with_data(
            columns(&["s", "p", "o"]),
            vec![spo_row("ex:A", "ex:rel", "ex:B")],
        );

        let graph = build(&result);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0].id, "ex:A");
        assert_eq!(graph.nodes[1].id, "ex:B");
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].from, "ex:A");
        assert_eq!(graph.edges[0].to, "ex:B");
        assert_eq!(graph.edges[0].label.as_deref(), Some("ex:rel"));
    }

    #[test]
    fn test_build_edge_without_predicate() {
        let result = TabularResult::with_data(
            columns(&["s", "o"]),
            vec![binding([("s", Term::uri("ex:A")), ("o", Term::uri("ex:B"))])],
        );

        let graph = build(&result);
        assert_eq!(graph.edges[0].label, None);
    }

    #[test]
    fn test_build_deduplicates_nodes() {
        let result = TabularResult::with_data(
            columns(&["s", "p", "o"]),
            vec![
                spo_row("ex:A", "ex:rel", "ex:B"),
                spo_row("ex:B", "ex:rel", "ex:C"),
                spo_row("ex:A", "ex:other", "ex:C"),
            ],
        );

        let graph = build(&result);
        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["ex:A", "ex:B", "ex:C"]);
        assert_eq!(graph.edges.len(), 3);
    }

    #[test]
    fn test_build_keeps_multi_edges() {
        let result = TabularResult::with_data(
            columns(&["s", "p", "o"]),
            vec![
                spo_row("ex:A", "ex:rel", "ex:B"),
                spo_row("ex:A", "ex:rel2", "ex:B"),
            ],
        );

        let graph = build(&result);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn test_build_drops_rows_missing_subject_or_object() {
        let result = TabularResult::with_data(
            columns(&["s", "p", "o"]),
            vec![
                spo_row("ex:A", "ex:rel", "ex:B"),
                binding([("s", Term::uri("ex:C")), ("p", Term::uri("ex:rel"))]),
                binding([("o", Term::uri("ex:D"))]),
            ],
        );

        let graph = build(&result);
        assert_eq!(graph.edges.len(), 1);
        // Dropped rows contribute no nodes either.
        assert_eq!(graph.nodes.len(), 2);
    }

    #[test]
    fn test_first_seen_label_wins() {
        let result = TabularResult::with_data(
            columns(&["s", "sLabel", "o", "oLabel"]),
            vec![
                binding([
                    ("s", Term::uri("ex:A")),
                    ("sLabel", Term::literal("Alpha")),
                    ("o", Term::uri("ex:B")),
                    ("oLabel", Term::literal("Beta")),
                ]),
                binding([
                    ("s", Term::uri("ex:B")),
                    ("sLabel", Term::literal("Beta renamed")),
                    ("o", Term::uri("ex:A")),
                    ("oLabel", Term::literal("Alpha renamed")),
                ]),
            ],
        );

        let graph = build(&result);
        assert_eq!(graph.nodes[graph.node_index("ex:A").unwrap()].label, "Alpha");
        assert_eq!(graph.nodes[graph.node_index("ex:B").unwrap()].label, "Beta");
    }

    #[test]
    fn test_label_falls_back_to_identifier() {
        let result = TabularResult::with_data(
            columns(&["s", "o"]),
            vec![binding([("s", Term::uri("ex:A")), ("o", Term::uri("ex:B"))])],
        );

        let graph = build(&result);
        assert_eq!(graph.nodes[0].label, "ex:A");
    }

    #[test]
    fn test_node_count_bound() {
        let result = TabularResult::with_data(
            columns(&["s", "p", "o"]),
            vec![
                spo_row("ex:A", "ex:rel", "ex:B"),
                spo_row("ex:C", "ex:rel", "ex:D"),
            ],
        );

        let graph = build(&result);
        assert!(graph.nodes.len() <= 2 * graph.edges.len());
    }
}
