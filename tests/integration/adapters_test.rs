//! Adapter integration tests.
//!
//! Runs parsed SPARQL JSON documents through the probe/build pipeline and
//! checks the visual structures end to end, including the registry's
//! priority ordering and the silent row-drop behavior.

use pretty_assertions::assert_eq;
use rqlens::adapters::{self, Adapter, Visual};
use rqlens::results::parse_results;

const GEO_DOC: &str = r#"{
  "head": { "vars": ["latitude", "longDeg", "name", "url"] },
  "results": {
    "bindings": [
      {
        "latitude": { "type": "literal", "value": "35.6762" },
        "longDeg": { "type": "literal", "value": "139.6503" },
        "name": { "type": "literal", "value": "Tokyo" },
        "url": { "type": "uri", "value": "https://example.org/tokyo" }
      },
      {
        "latitude": { "type": "literal", "value": "not-a-number" },
        "longDeg": { "type": "literal", "value": "10.0" },
        "name": { "type": "literal", "value": "Nowhere" }
      },
      {
        "latitude": { "type": "literal", "value": "91.0" },
        "longDeg": { "type": "literal", "value": "200.0" },
        "name": { "type": "literal", "value": "OffTheChart" },
        "url": { "type": "uri", "value": "ftp://example.org/file" }
      }
    ]
  }
}"#;

#[test]
fn test_map_pipeline_with_synonym_columns() {
    let result = parse_results(GEO_DOC).unwrap();

    // The probe only sees column names, so synonym spellings must match.
    assert_eq!(adapters::select(&result.columns), Some(Adapter::Map));

    let Visual::Map(plot) = Adapter::Map.build(&result) else {
        panic!("expected a map structure");
    };

    // Row two fails to parse and is dropped; the out-of-range row stays.
    assert_eq!(plot.points.len(), 2);
    assert_eq!(plot.points[0].label.as_deref(), Some("Tokyo"));
    assert_eq!(
        plot.points[0].link.as_deref(),
        Some("https://example.org/tokyo")
    );

    // Finite coordinates outside the usual ranges are kept as-is.
    assert_eq!(plot.points[1].lat, 91.0);
    assert_eq!(plot.points[1].lon, 200.0);
    // Non-http(s) links are treated as absent.
    assert_eq!(plot.points[1].link, None);
}

#[test]
fn test_graph_pipeline_with_labels() {
    let doc = r#"{
      "head": { "vars": ["s", "sLabel", "p", "o", "oLabel"] },
      "results": {
        "bindings": [
          {
            "s": { "type": "uri", "value": "ex:A" },
            "sLabel": { "type": "literal", "value": "Alpha" },
            "p": { "type": "uri", "value": "ex:knows" },
            "o": { "type": "uri", "value": "ex:B" },
            "oLabel": { "type": "literal", "value": "Beta" }
          },
          {
            "s": { "type": "uri", "value": "ex:B" },
            "o": { "type": "uri", "value": "ex:A" }
          },
          {
            "s": { "type": "uri", "value": "ex:C" }
          }
        ]
      }
    }"#;
    let result = parse_results(doc).unwrap();

    assert_eq!(adapters::select(&result.columns), Some(Adapter::Graph));

    let Visual::Graph(graph) = Adapter::Graph.build(&result) else {
        panic!("expected a graph structure");
    };

    // ex:C has no object and is dropped; the first two rows survive.
    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 2);

    let alpha = graph.nodes.iter().find(|n| n.id == "ex:A").unwrap();
    assert_eq!(alpha.label, "Alpha");
    // ex:B got its label from row one's oLabel; row two does not override it.
    let beta = graph.nodes.iter().find(|n| n.id == "ex:B").unwrap();
    assert_eq!(beta.label, "Beta");

    assert_eq!(graph.edges[0].label.as_deref(), Some("ex:knows"));
    assert_eq!(graph.edges[1].label, None);
}

#[test]
fn test_chart_pipeline_keeps_every_row() {
    let doc = r#"{
      "head": { "vars": ["classLabel", "count", "legendLabel"] },
      "results": {
        "bindings": [
          {
            "classLabel": { "type": "literal", "value": "Person" },
            "count": { "type": "literal", "value": "120" },
            "legendLabel": { "type": "literal", "value": "Instances" }
          },
          {
            "count": { "type": "literal", "value": "nope" }
          }
        ]
      }
    }"#;
    let result = parse_results(doc).unwrap();

    assert_eq!(adapters::select(&result.columns), Some(Adapter::Chart));

    let Visual::Chart(series) = Adapter::Chart.build(&result) else {
        panic!("expected a chart structure");
    };

    // The chart never drops rows: defaults fill the gaps instead.
    assert_eq!(series.len(), result.row_count());
    assert_eq!(series.legend, "Instances");
    assert_eq!(series.labels, vec!["Person", ""]);
    assert_eq!(series.values, vec![120.0, 0.0]);
}

#[test]
fn test_priority_order_map_beats_graph_and_chart() {
    // A result whose columns satisfy all three probes at once.
    let columns: Vec<String> = ["lat", "long", "s", "o", "label", "count"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(adapters::select(&columns), Some(Adapter::Map));
    assert_eq!(
        adapters::matching(&columns),
        vec![Adapter::Map, Adapter::Graph, Adapter::Chart]
    );
}

#[test]
fn test_no_adapter_for_plain_tabular_results() {
    let doc = r#"{
      "head": { "vars": ["person", "email"] },
      "results": {
        "bindings": [
          {
            "person": { "type": "uri", "value": "ex:P1" },
            "email": { "type": "literal", "value": "p1@example.org" }
          }
        ]
      }
    }"#;
    let result = parse_results(doc).unwrap();
    assert_eq!(adapters::select(&result.columns), None);
}

#[test]
fn test_empty_result_probes_but_builds_empty() {
    let doc = r#"{
      "head": { "vars": ["lat", "long"] },
      "results": { "bindings": [] }
    }"#;
    let result = parse_results(doc).unwrap();

    // Probes work on column names alone, so an empty result still matches.
    assert_eq!(adapters::select(&result.columns), Some(Adapter::Map));

    let Visual::Map(plot) = Adapter::Map.build(&result) else {
        panic!("expected a map structure");
    };
    assert!(plot.points.is_empty());
    assert_eq!(plot.bounds(), None);
}
