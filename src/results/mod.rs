//! Result-set layer for rqlens.
//!
//! Provides the tabular result model, the SPARQL JSON results parser, and
//! the source seam through which results enter the application.

mod json;
mod source;
mod types;

pub use json::parse_results;
pub use source::{FileSource, InMemorySource, ResultSource};
pub use types::{binding, Binding, TabularResult, Term, TermKind};
