//! Result-set types for rqlens.
//!
//! Defines the structures used to represent a SPARQL SELECT result: an
//! ordered list of variable names plus a sparse sequence of row bindings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A tabular SPARQL SELECT result.
///
/// Rows are sparse: a binding may cover any subset of the declared columns
/// (unbound variables are simply absent from the map).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TabularResult {
    /// Ordered variable names, unique within the result.
    pub columns: Vec<String>,

    /// Row bindings, one map per solution.
    pub rows: Vec<Binding>,
}

/// One solution: a mapping from bound variable names to terms.
pub type Binding = HashMap<String, Term>;

impl TabularResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a result with the given columns and rows.
    pub fn with_data(columns: Vec<String>, rows: Vec<Binding>) -> Self {
        Self { columns, rows }
    }

    /// Returns true if the result holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// The kind of RDF term bound to a variable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TermKind {
    /// An IRI.
    Uri,
    /// A literal, possibly typed or language-tagged.
    #[default]
    Literal,
    /// A blank node.
    Blank,
}

/// A single bound RDF term.
///
/// The adapters only ever consume the lexical form; the kind tag and the
/// literal metadata are kept for the tabular display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Term {
    /// Lexical form of the term.
    pub value: String,

    /// Term kind tag.
    pub kind: TermKind,

    /// Datatype IRI, if the term is a typed literal.
    pub datatype: Option<String>,

    /// Language tag, if the term is a language-tagged literal.
    pub lang: Option<String>,
}

impl Term {
    /// Creates a URI term.
    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TermKind::Uri,
            datatype: None,
            lang: None,
        }
    }

    /// Creates a plain literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TermKind::Literal,
            datatype: None,
            lang: None,
        }
    }

    /// Creates a blank node term.
    pub fn blank(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: TermKind::Blank,
            datatype: None,
            lang: None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Builds a binding from (column, term) pairs; test and fixture helper.
pub fn binding<I, S>(pairs: I) -> Binding
where
    I: IntoIterator<Item = (S, Term)>,
    S: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
