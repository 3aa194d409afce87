//! Map view widget.
//!
//! Draws point markers over a world-map canvas. The viewport (center and
//! zoom) is retained across renders so pan and zoom survive result
//! re-renders; markers themselves are rebuilt every time. Fitting the
//! viewport to the plotted points is deferred to the next draw pass, when
//! the actual canvas size is known.

use crate::adapters::MapPlot;
use crate::config::MapConfig;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        Block, Borders,
    },
    Frame,
};

/// Maximum zoom reachable by hand; slippy-style, span = 360 / 2^zoom degrees.
const MAX_ZOOM: f64 = 18.0;

/// Padding factor applied around the point bounding box when fitting.
const FIT_PADDING: f64 = 1.2;

/// Retained map viewport state for one result tab.
pub struct MapView {
    center_lat: f64,
    center_lon: f64,
    zoom: f64,
    max_fit_zoom: f64,
    pending_fit: bool,
    /// Index of the selected marker, wrapped into range at draw time.
    pub selected: usize,
}

impl MapView {
    /// Creates a viewport at the configured neutral default.
    ///
    /// The first fit is already pending: it runs on the first draw that has
    /// points to show.
    pub fn new(config: &MapConfig) -> Self {
        Self {
            center_lat: config.center_lat,
            center_lon: config.center_lon,
            zoom: f64::from(config.zoom),
            max_fit_zoom: f64::from(config.max_fit_zoom),
            pending_fit: true,
            selected: 0,
        }
    }

    /// Schedules a bounding-box fit for the next draw pass.
    ///
    /// Requests are idempotent: a newer request before the pending one runs
    /// just causes a single recalculation.
    pub fn request_fit(&mut self) {
        self.pending_fit = true;
    }

    /// Pans the viewport by the given fraction of the visible span.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let (lon_span, lat_span) = self.spans(2.0);
        self.center_lon += dx * lon_span;
        self.center_lat += dy * lat_span;
        self.center_lat = self.center_lat.clamp(-90.0, 90.0);
        self.center_lon = self.center_lon.clamp(-180.0, 180.0);
    }

    /// Zooms in one level.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1.0).min(MAX_ZOOM);
    }

    /// Zooms out one level.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - 1.0).max(0.0);
    }

    /// Cycles marker selection forward.
    pub fn select_next(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Cycles marker selection backward.
    pub fn select_prev(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Current zoom level.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current viewport center as (lat, lon).
    pub fn center(&self) -> (f64, f64) {
        (self.center_lat, self.center_lon)
    }

    /// Fits the viewport to a point bounding box, capped at the fit zoom.
    fn fit(&mut self, bounds: (f64, f64, f64, f64)) {
        let (min_lat, min_lon, max_lat, max_lon) = bounds;
        self.center_lat = (min_lat + max_lat) / 2.0;
        self.center_lon = (min_lon + max_lon) / 2.0;

        // Smallest zoom that still contains the padded box on both axes.
        // A single point or a tight cluster would zoom without bound, hence
        // the cap.
        let lon_span = ((max_lon - min_lon) * FIT_PADDING).max(f64::EPSILON);
        let lat_span = ((max_lat - min_lat) * FIT_PADDING).max(f64::EPSILON);
        let zoom_lon = (360.0 / lon_span).log2();
        let zoom_lat = (180.0 / lat_span).log2();
        self.zoom = zoom_lon.min(zoom_lat).clamp(0.0, self.max_fit_zoom);
    }

    /// Visible (lon_span, lat_span) for a given height/width cell ratio.
    fn spans(&self, aspect: f64) -> (f64, f64) {
        let lon_span = 360.0 / 2f64.powf(self.zoom);
        (lon_span, lon_span / aspect)
    }

    /// Draws the map for the given plot.
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect, plot: &MapPlot) {
        // The deferred fit runs here, once the drawable area is settled.
        // An empty plot leaves the camera where it was.
        if self.pending_fit {
            if let Some(bounds) = plot.bounds() {
                self.fit(bounds);
            }
            self.pending_fit = false;
        }

        let selected = if plot.points.is_empty() {
            None
        } else {
            Some(self.selected % plot.points.len())
        };

        // Terminal cells are roughly twice as tall as wide.
        let aspect = if area.height > 2 {
            f64::from(area.width) / (f64::from(area.height) * 2.0)
        } else {
            2.0
        };
        let (lon_span, lat_span) = self.spans(aspect.max(0.5));

        let title = match selected.and_then(|i| plot.points.get(i)) {
            Some(point) => {
                let label = point.label.as_deref().unwrap_or("(unlabelled)");
                match &point.link {
                    Some(link) => format!(" Map · {label} · {link} "),
                    None => format!(" Map · {label} "),
                }
            }
            None => format!(" Map · {} points ", plot.points.len()),
        };

        let coords: Vec<(f64, f64)> = plot.points.iter().map(|p| (p.lon, p.lat)).collect();

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title(title))
            .x_bounds([
                self.center_lon - lon_span / 2.0,
                self.center_lon + lon_span / 2.0,
            ])
            .y_bounds([
                self.center_lat - lat_span / 2.0,
                self.center_lat + lat_span / 2.0,
            ])
            .paint(|ctx| {
                ctx.draw(&Map {
                    color: Color::DarkGray,
                    resolution: MapResolution::High,
                });
                ctx.draw(&Points {
                    coords: &coords,
                    color: Color::Red,
                });
                if let Some(i) = selected {
                    let point = &plot.points[i];
                    ctx.print(
                        point.lon,
                        point.lat,
                        Line::styled(
                            format!("◉ {}", point.label.as_deref().unwrap_or("")),
                            Style::default().fg(Color::Yellow),
                        ),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MapPoint;

    fn config() -> MapConfig {
        MapConfig::default()
    }

    fn point(lat: f64, lon: f64) -> MapPoint {
        MapPoint {
            lat,
            lon,
            label: None,
            link: None,
        }
    }

    #[test]
    fn test_new_uses_configured_center() {
        let view = MapView::new(&config());
        assert_eq!(view.center(), (20.0, 0.0));
        assert_eq!(view.zoom(), 2.0);
    }

    #[test]
    fn test_fit_centers_on_bounding_box() {
        let mut view = MapView::new(&config());
        view.fit((10.0, -20.0, 30.0, 40.0));
        assert_eq!(view.center(), (20.0, 10.0));
        assert!(view.zoom() > 0.0);
    }

    #[test]
    fn test_fit_caps_zoom_for_tight_cluster() {
        let mut view = MapView::new(&config());
        view.fit((48.2, 16.37, 48.2, 16.37));
        assert_eq!(view.zoom(), f64::from(config().max_fit_zoom));
    }

    #[test]
    fn test_zoom_bounds() {
        let mut view = MapView::new(&config());
        for _ in 0..40 {
            view.zoom_in();
        }
        assert_eq!(view.zoom(), MAX_ZOOM);
        for _ in 0..40 {
            view.zoom_out();
        }
        assert_eq!(view.zoom(), 0.0);
    }

    #[test]
    fn test_pan_clamps_to_world() {
        let mut view = MapView::new(&config());
        for _ in 0..100 {
            view.pan(1.0, 1.0);
        }
        let (lat, lon) = view.center();
        assert!(lat <= 90.0);
        assert!(lon <= 180.0);
    }

    #[test]
    fn test_selection_wraps() {
        let mut view = MapView::new(&config());
        view.select_next(3);
        view.select_next(3);
        view.select_next(3);
        assert_eq!(view.selected, 0);
        view.select_prev(3);
        assert_eq!(view.selected, 2);
    }

    #[test]
    fn test_selection_noop_when_empty() {
        let mut view = MapView::new(&config());
        view.select_next(0);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_bounds_used_by_fit_ignore_empty_plot() {
        let plot = MapPlot { points: vec![] };
        assert!(plot.bounds().is_none());
        let plot = MapPlot {
            points: vec![point(1.0, 2.0)],
        };
        assert_eq!(plot.bounds(), Some((1.0, 2.0, 1.0, 2.0)));
    }
}
