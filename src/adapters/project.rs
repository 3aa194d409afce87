//! Row projection and role resolution.
//!
//! Every adapter works on the same simplified view of a result: one plain
//! name-to-string map per row, holding only the columns bound in that row.
//! Semantic roles (latitude, subject, value, ...) are resolved against a
//! projected row through an ordered synonym list, first match wins.

use crate::results::{Binding, TabularResult};
use std::collections::HashMap;

/// A projected row: column name to lexical form, bound columns only.
pub type ProjectedRow = HashMap<String, String>;

/// Projects a result into plain per-row string maps.
///
/// The projection is sparse: unbound columns are omitted rather than filled
/// with a null marker, so rows with missing optional fields stay valid.
/// Pure and order-preserving.
pub fn project(columns: &[String], rows: &[Binding]) -> Vec<ProjectedRow> {
    rows.iter()
        .map(|row| {
            columns
                .iter()
                .filter_map(|col| {
                    row.get(col)
                        .map(|term| (col.clone(), term.value.clone()))
                })
                .collect()
        })
        .collect()
}

/// Projects a whole [`TabularResult`].
pub fn project_result(result: &TabularResult) -> Vec<ProjectedRow> {
    project(&result.columns, &result.rows)
}

/// Resolves a semantic role against a projected row.
///
/// Returns the value of the first synonym bound in the row, independently
/// per row: two rows of the same result may satisfy the same role through
/// different synonyms.
pub fn resolve_role<'a>(row: &'a ProjectedRow, synonyms: &[&str]) -> Option<&'a str> {
    synonyms
        .iter()
        .find_map(|syn| row.get(*syn).map(String::as_str))
}

/// Returns true if any synonym of a role appears in the column list.
///
/// This is the column-level counterpart of [`resolve_role`], used by the
/// capability probes, which see only the column names.
pub fn role_present(columns: &[String], synonyms: &[&str]) -> bool {
    synonyms.iter().any(|syn| columns.iter().any(|c| c == syn))
}
