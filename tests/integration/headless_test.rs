//! Headless rendering integration tests.
//!
//! Drives the same pipeline the `--headless` flag uses: parse a document,
//! pick an adapter, and render the outcome as plain text.

use rqlens::adapters::Adapter;
use rqlens::headless;
use rqlens::results::parse_results;

const CHART_DOC: &str = r#"{
  "head": { "vars": ["label", "value"] },
  "results": {
    "bindings": [
      {
        "label": { "type": "literal", "value": "Person" },
        "value": { "type": "literal", "value": "12" }
      },
      {
        "label": { "type": "literal", "value": "Place" },
        "value": { "type": "literal", "value": "7" }
      }
    ]
  }
}"#;

#[test]
fn test_headless_auto_selects_chart() {
    let result = parse_results(CHART_DOC).unwrap();
    let out = headless::render("counts", &result, None);

    assert!(out.contains("source: counts"));
    assert!(out.contains("columns: label, value"));
    assert!(out.contains("adapter: Chart"));
    assert!(out.contains("legend: Values"));
    assert!(out.contains("Person\t12"));
}

#[test]
fn test_headless_pinned_adapter_overrides_probe() {
    // Columns satisfy both graph and chart shapes; pin the chart.
    let doc = r#"{
      "head": { "vars": ["s", "o", "label", "count"] },
      "results": {
        "bindings": [
          {
            "s": { "type": "uri", "value": "ex:A" },
            "o": { "type": "uri", "value": "ex:B" },
            "label": { "type": "literal", "value": "A" },
            "count": { "type": "literal", "value": "3" }
          }
        ]
      }
    }"#;
    let result = parse_results(doc).unwrap();

    let auto = headless::render("mixed", &result, None);
    assert!(auto.contains("adapter: Graph"));

    let pinned = headless::render("mixed", &result, Some(Adapter::Chart));
    assert!(pinned.contains("adapter: Chart"));
}

#[test]
fn test_headless_tabular_fallback_with_sparse_row() {
    let doc = r#"{
      "head": { "vars": ["person", "email"] },
      "results": {
        "bindings": [
          {
            "person": { "type": "uri", "value": "ex:P1" },
            "email": { "type": "literal", "value": "p1@example.org" }
          },
          {
            "person": { "type": "uri", "value": "ex:P2" }
          }
        ]
      }
    }"#;
    let result = parse_results(doc).unwrap();
    let out = headless::render("people", &result, None);

    assert!(out.contains("adapter: none (tabular fallback)"));
    assert!(out.contains("person\temail"));
    // The unbound cell renders empty, keeping the column count stable.
    assert!(out.contains("ex:P2\t"));
}

#[test]
fn test_headless_table_pinned() {
    let result = parse_results(CHART_DOC).unwrap();
    let out = headless::render_table("counts", &result);

    assert!(out.contains("adapter: none (table pinned)"));
    assert!(out.contains("label\tvalue"));
    assert!(!out.contains("legend:"));
}
