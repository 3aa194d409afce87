//! Map adapter: tabular results to point markers.
//!
//! A result qualifies when its columns contain a latitude-like and a
//! longitude-like variable. Rows whose coordinates fail to parse as finite
//! floats are dropped silently; out-of-range but finite coordinates pass
//! through unchecked.

use crate::adapters::project::{project_result, resolve_role, role_present, ProjectedRow};
use crate::results::TabularResult;
use tracing::debug;
use url::Url;

/// Latitude synonyms, in priority order.
const LATITUDE: &[&str] = &["lat", "latitude", "latDecimal", "latDeg"];

/// Longitude synonyms, in priority order.
const LONGITUDE: &[&str] = &["long", "lon", "longitude", "longDecimal", "longDeg"];

/// Marker label synonyms; falls back to the subject column.
const LABEL: &[&str] = &["label", "name"];

/// Subject fallback used when no label column is bound.
const SUBJECT: &[&str] = &["s", "subject"];

/// Link synonyms; only http(s) URLs are kept.
const LINK: &[&str] = &["feature", "uri", "url"];

/// A set of point markers extracted from one result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapPlot {
    /// Surviving points, in source-row order.
    pub points: Vec<MapPoint>,
}

/// One point marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
    /// Popup label, if any label or subject column was bound.
    pub label: Option<String>,
    /// Validated http(s) link, if any.
    pub link: Option<String>,
}

impl MapPlot {
    /// Returns the bounding box of all points as (min_lat, min_lon, max_lat, max_lon).
    ///
    /// Returns `None` when the plot is empty, in which case the caller
    /// leaves its viewport unchanged.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        let mut bounds = (first.lat, first.lon, first.lat, first.lon);
        for p in &self.points[1..] {
            bounds.0 = bounds.0.min(p.lat);
            bounds.1 = bounds.1.min(p.lon);
            bounds.2 = bounds.2.max(p.lat);
            bounds.3 = bounds.3.max(p.lon);
        }
        Some(bounds)
    }
}

/// Capability probe: both coordinate roles must be present in the columns.
pub fn probe(columns: &[String]) -> bool {
    role_present(columns, LATITUDE) && role_present(columns, LONGITUDE)
}

/// Builds the point set for a result.
pub fn build(result: &TabularResult) -> MapPlot {
    let rows = project_result(result);
    let total = rows.len();

    let points: Vec<MapPoint> = rows.iter().filter_map(build_point).collect();
    if points.len() < total {
        debug!(
            dropped = total - points.len(),
            total, "map: dropped rows with missing or non-finite coordinates"
        );
    }

    MapPlot { points }
}

/// Builds one point from a projected row, or drops the row.
fn build_point(row: &ProjectedRow) -> Option<MapPoint> {
    let lat = parse_coordinate(resolve_role(row, LATITUDE)?)?;
    let lon = parse_coordinate(resolve_role(row, LONGITUDE)?)?;

    let label = resolve_role(row, LABEL)
        .or_else(|| resolve_role(row, SUBJECT))
        .map(str::to_string);
    let link = resolve_role(row, LINK).and_then(validate_link);

    Some(MapPoint {
        lat,
        lon,
        label,
        link,
    })
}

/// Parses a coordinate, rejecting non-numeric and non-finite values.
fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Keeps a link only if it parses as an http(s) URL.
fn validate_link(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| raw.to_string())
}
