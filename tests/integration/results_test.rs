//! Result parsing integration tests.
//!
//! Tests parsing of complete SPARQL JSON result documents into the tabular
//! model, including sparse rows and term metadata.

use pretty_assertions::assert_eq;
use rqlens::results::{parse_results, TermKind};

/// A realistic document: city coordinates with one sparse row.
const CITIES: &str = r#"{
  "head": { "vars": ["lat", "long", "label", "feature"] },
  "results": {
    "bindings": [
      {
        "lat": { "type": "literal", "value": "48.8566", "datatype": "http://www.w3.org/2001/XMLSchema#decimal" },
        "long": { "type": "literal", "value": "2.3522", "datatype": "http://www.w3.org/2001/XMLSchema#decimal" },
        "label": { "type": "literal", "value": "Paris", "xml:lang": "fr" },
        "feature": { "type": "uri", "value": "https://example.org/paris" }
      },
      {
        "lat": { "type": "literal", "value": "51.5074" },
        "long": { "type": "literal", "value": "-0.1278" }
      }
    ]
  }
}"#;

#[test]
fn test_parse_preserves_column_order_and_sparse_rows() {
    let result = parse_results(CITIES).unwrap();

    assert_eq!(result.columns, vec!["lat", "long", "label", "feature"]);
    assert_eq!(result.row_count(), 2);

    // Second row leaves label and feature unbound rather than empty.
    assert!(result.rows[1].contains_key("lat"));
    assert!(!result.rows[1].contains_key("label"));
    assert!(!result.rows[1].contains_key("feature"));
}

#[test]
fn test_parse_term_metadata() {
    let result = parse_results(CITIES).unwrap();
    let first = &result.rows[0];

    let lat = &first["lat"];
    assert_eq!(lat.kind, TermKind::Literal);
    assert_eq!(
        lat.datatype.as_deref(),
        Some("http://www.w3.org/2001/XMLSchema#decimal")
    );

    let label = &first["label"];
    assert_eq!(label.lang.as_deref(), Some("fr"));

    let feature = &first["feature"];
    assert_eq!(feature.kind, TermKind::Uri);
    assert_eq!(feature.value, "https://example.org/paris");
}

#[test]
fn test_parse_blank_nodes_and_legacy_typed_literal() {
    let doc = r#"{
      "head": { "vars": ["s", "o"] },
      "results": {
        "bindings": [
          {
            "s": { "type": "bnode", "value": "b0" },
            "o": { "type": "typed-literal", "value": "42", "datatype": "http://www.w3.org/2001/XMLSchema#integer" }
          }
        ]
      }
    }"#;

    let result = parse_results(doc).unwrap();
    assert_eq!(result.rows[0]["s"].kind, TermKind::Blank);
    assert_eq!(result.rows[0]["o"].kind, TermKind::Literal);
    assert_eq!(result.rows[0]["o"].value, "42");
}

#[test]
fn test_parse_empty_result_keeps_columns() {
    let doc = r#"{
      "head": { "vars": ["s", "p", "o"] },
      "results": { "bindings": [] }
    }"#;

    let result = parse_results(doc).unwrap();
    assert_eq!(result.columns, vec!["s", "p", "o"]);
    assert!(result.is_empty());
}

#[test]
fn test_parse_rejects_ask_results() {
    let doc = r#"{ "head": {}, "boolean": true }"#;
    assert!(parse_results(doc).is_err());
}

#[test]
fn test_parse_rejects_malformed_json() {
    assert!(parse_results("{ not json").is_err());
    assert!(parse_results(r#"{"head": {}}"#).is_err());
}
