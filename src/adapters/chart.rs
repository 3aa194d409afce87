//! Chart adapter: tabular results to a label/value bar series.
//!
//! A result qualifies when its columns contain a category-like and a
//! value-like variable. Unlike the map and graph adapters no row is ever
//! dropped: a missing category becomes the empty string and a missing or
//! unparsable value becomes zero.

use crate::adapters::project::{project_result, resolve_role, role_present};
use crate::results::TabularResult;

/// Category synonyms, in priority order.
const CATEGORY: &[&str] = &["label", "classLabel", "category", "bucket", "name"];

/// Value synonyms, in priority order.
const VALUE: &[&str] = &["value", "count", "total", "num"];

/// Legend synonym, read from the first row only.
const LEGEND: &[&str] = &["legendLabel"];

/// Legend shown when no `legendLabel` is bound on the first row.
const DEFAULT_LEGEND: &str = "Values";

/// A bar series extracted from one result.
///
/// `labels` and `values` are parallel and always have one entry per source
/// row, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BarSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Series legend.
    pub legend: String,
}

impl BarSeries {
    /// Returns the number of bars.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the series holds no bars.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Capability probe: both the category and value roles must be present.
pub fn probe(columns: &[String]) -> bool {
    role_present(columns, CATEGORY) && role_present(columns, VALUE)
}

/// Builds the bar series for a result.
pub fn build(result: &TabularResult) -> BarSeries {
    let rows = project_result(result);

    let legend = rows
        .first()
        .and_then(|row| resolve_role(row, LEGEND))
        .unwrap_or(DEFAULT_LEGEND)
        .to_string();

    let mut labels = Vec::with_capacity(rows.len());
    let mut values = Vec::with_capacity(rows.len());
    for row in &rows {
        labels.push(resolve_role(row, CATEGORY).unwrap_or("").to_string());
        values.push(
            resolve_role(row, VALUE)
                .and_then(|raw| raw.trim().parse::<f64>().ok())
                .unwrap_or(0.0),
        );
    }

    BarSeries {
        labels,
        values,
        legend,
    }
}
