//! SPARQL Query Results JSON parsing.
//!
//! Parses the W3C `application/sparql-results+json` format into a
//! [`TabularResult`]. Only SELECT results are supported; ASK results and
//! RDF serializations are rejected with a results error.

use crate::error::{Result, RqlensError};
use crate::results::types::{Binding, TabularResult, Term, TermKind};
use serde::Deserialize;
use std::collections::HashMap;

/// Wire representation of a SPARQL JSON results document.
#[derive(Debug, Deserialize)]
struct ResultsDocument {
    head: Head,
    results: Option<Results>,
    boolean: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct Head {
    #[serde(default)]
    vars: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Results {
    bindings: Vec<HashMap<String, WireTerm>>,
}

#[derive(Debug, Deserialize)]
struct WireTerm {
    #[serde(rename = "type")]
    term_type: String,
    value: String,
    datatype: Option<String>,
    #[serde(rename = "xml:lang")]
    lang: Option<String>,
}

impl WireTerm {
    fn into_term(self) -> Result<Term> {
        let kind = match self.term_type.as_str() {
            "uri" => TermKind::Uri,
            // "typed-literal" is the legacy spelling from the 2008 draft,
            // still emitted by some endpoints.
            "literal" | "typed-literal" => TermKind::Literal,
            "bnode" => TermKind::Blank,
            other => {
                return Err(RqlensError::results(format!(
                    "Unknown term type '{other}'"
                )))
            }
        };

        Ok(Term {
            value: self.value,
            kind,
            datatype: self.datatype,
            lang: self.lang,
        })
    }
}

/// Parses a SPARQL JSON results document into a [`TabularResult`].
pub fn parse_results(input: &str) -> Result<TabularResult> {
    let doc: ResultsDocument = serde_json::from_str(input)
        .map_err(|e| RqlensError::results(format!("Invalid SPARQL JSON results: {e}")))?;

    if doc.boolean.is_some() {
        return Err(RqlensError::results(
            "ASK results have no bindings to display",
        ));
    }

    let results = doc
        .results
        .ok_or_else(|| RqlensError::results("Missing 'results' section"))?;

    let columns = doc.head.vars;
    let mut rows = Vec::with_capacity(results.bindings.len());
    for wire_row in results.bindings {
        let mut row = Binding::with_capacity(wire_row.len());
        for (var, wire_term) in wire_row {
            // Bindings for undeclared variables indicate a malformed
            // document rather than a sparse row.
            if !columns.contains(&var) {
                return Err(RqlensError::results(format!(
                    "Binding for undeclared variable '{var}'"
                )));
            }
            row.insert(var, wire_term.into_term()?);
        }
        rows.push(row);
    }

    Ok(TabularResult::with_data(columns, rows))
}
