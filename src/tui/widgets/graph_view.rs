//! Graph view widget.
//!
//! Draws a directed node/edge graph with a force-directed layout. Node
//! positions are retained across renders of the same tab: replacing the
//! data keeps the positions of surviving node ids, so the layout does not
//! restart from scratch. The layout advances one iteration per tick.
//!
//! Edge labels start hidden; toggling re-renders the same data in place.

use crate::adapters::NetworkGraph;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Layout space half-extent; positions live in [-EXTENT, EXTENT].
const EXTENT: f64 = 1.0;

/// Repulsion strength between node pairs.
const REPULSION: f64 = 0.08;

/// Spring strength along edges.
const ATTRACTION: f64 = 0.05;

/// Pull toward the origin, keeps disconnected parts on screen.
const CENTERING: f64 = 0.02;

/// Maximum displacement per iteration.
const MAX_STEP: f64 = 0.08;

/// Arrowhead wing length, in layout units.
const ARROW_LEN: f64 = 0.06;

/// Retained graph layout state for one result tab.
pub struct GraphView {
    positions: HashMap<String, (f64, f64)>,
    /// Whether edge labels are drawn; initial state is hidden.
    pub show_edge_labels: bool,
}

impl GraphView {
    /// Creates an empty layout with labels hidden.
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            show_edge_labels: false,
        }
    }

    /// Toggles edge-label visibility.
    pub fn toggle_labels(&mut self) {
        self.show_edge_labels = !self.show_edge_labels;
    }

    /// Reconciles retained positions with the current node set.
    ///
    /// Surviving ids keep their positions; new ids are seeded
    /// deterministically on a circle; stale ids are forgotten.
    pub fn sync(&mut self, graph: &NetworkGraph) {
        self.positions
            .retain(|id, _| graph.node_index(id).is_some());

        for node in &graph.nodes {
            if !self.positions.contains_key(&node.id) {
                self.positions
                    .insert(node.id.clone(), seed_position(&node.id));
            }
        }
    }

    /// Advances the force simulation by one iteration.
    pub fn step(&mut self, graph: &NetworkGraph) {
        self.sync(graph);
        if graph.nodes.len() < 2 {
            return;
        }

        let mut forces: HashMap<&str, (f64, f64)> = graph
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), (0.0, 0.0)))
            .collect();

        // Pairwise repulsion.
        for (i, a) in graph.nodes.iter().enumerate() {
            for b in &graph.nodes[i + 1..] {
                let pa = self.positions[&a.id];
                let pb = self.positions[&b.id];
                let (dx, dy) = (pa.0 - pb.0, pa.1 - pb.1);
                let dist_sq = (dx * dx + dy * dy).max(1e-4);
                let push = REPULSION / dist_sq;
                let dist = dist_sq.sqrt();
                let (fx, fy) = (push * dx / dist, push * dy / dist);
                if let Some(f) = forces.get_mut(a.id.as_str()) {
                    f.0 += fx;
                    f.1 += fy;
                }
                if let Some(f) = forces.get_mut(b.id.as_str()) {
                    f.0 -= fx;
                    f.1 -= fy;
                }
            }
        }

        // Spring attraction along edges.
        for edge in &graph.edges {
            let (Some(&pa), Some(&pb)) =
                (self.positions.get(&edge.from), self.positions.get(&edge.to))
            else {
                continue;
            };
            let (dx, dy) = (pb.0 - pa.0, pb.1 - pa.1);
            if let Some(f) = forces.get_mut(edge.from.as_str()) {
                f.0 += ATTRACTION * dx;
                f.1 += ATTRACTION * dy;
            }
            if let Some(f) = forces.get_mut(edge.to.as_str()) {
                f.0 -= ATTRACTION * dx;
                f.1 -= ATTRACTION * dy;
            }
        }

        // Centering and displacement cap.
        for node in &graph.nodes {
            let pos = self.positions[&node.id];
            let (mut fx, mut fy) = forces[node.id.as_str()];
            fx -= CENTERING * pos.0;
            fy -= CENTERING * pos.1;

            let magnitude = (fx * fx + fy * fy).sqrt();
            if magnitude > MAX_STEP {
                fx = fx / magnitude * MAX_STEP;
                fy = fy / magnitude * MAX_STEP;
            }

            if let Some(entry) = self.positions.get_mut(&node.id) {
                entry.0 = (pos.0 + fx).clamp(-EXTENT, EXTENT);
                entry.1 = (pos.1 + fy).clamp(-EXTENT, EXTENT);
            }
        }
    }

    /// Returns the retained position of a node, if known.
    pub fn position(&self, id: &str) -> Option<(f64, f64)> {
        self.positions.get(id).copied()
    }

    /// Draws the graph.
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect, graph: &NetworkGraph) {
        self.sync(graph);

        let labels_hint = if self.show_edge_labels { "on" } else { "off" };
        let title = format!(
            " Graph · {} nodes · {} edges · labels {labels_hint} (l) ",
            graph.nodes.len(),
            graph.edges.len()
        );

        let node_coords: Vec<(f64, f64)> = graph
            .nodes
            .iter()
            .filter_map(|n| self.position(&n.id))
            .collect();

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title(title))
            .x_bounds([-1.3, 1.3])
            .y_bounds([-1.3, 1.3])
            .paint(|ctx| {
                for edge in &graph.edges {
                    let (Some(from), Some(to)) =
                        (self.position(&edge.from), self.position(&edge.to))
                    else {
                        continue;
                    };

                    ctx.draw(&CanvasLine {
                        x1: from.0,
                        y1: from.1,
                        x2: to.0,
                        y2: to.1,
                        color: Color::DarkGray,
                    });
                    for wing in arrowhead(from, to) {
                        ctx.draw(&wing);
                    }

                    if self.show_edge_labels {
                        if let Some(label) = &edge.label {
                            ctx.print(
                                (from.0 + to.0) / 2.0,
                                (from.1 + to.1) / 2.0,
                                Line::styled(
                                    label.clone(),
                                    Style::default().fg(Color::Magenta),
                                ),
                            );
                        }
                    }
                }

                ctx.draw(&Points {
                    coords: &node_coords,
                    color: Color::Cyan,
                });
                for node in &graph.nodes {
                    if let Some((x, y)) = self.position(&node.id) {
                        ctx.print(
                            x,
                            y,
                            Line::styled(
                                format!("● {}", node.label),
                                Style::default().fg(Color::Cyan),
                            ),
                        );
                    }
                }
            });

        frame.render_widget(canvas, area);
    }
}

impl Default for GraphView {
    fn default() -> Self {
        Self::new()
    }
}

/// Seeds a node position deterministically from its id.
fn seed_position(id: &str) -> (f64, f64) {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let hash = hasher.finish();
    let angle = (hash % 360) as f64 * std::f64::consts::PI / 180.0;
    let radius = 0.4 + ((hash >> 16) % 50) as f64 / 100.0;
    (radius * angle.cos(), radius * angle.sin())
}

/// Two short wing segments forming an arrowhead at the edge's target end.
fn arrowhead(from: (f64, f64), to: (f64, f64)) -> Vec<CanvasLine> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-6 {
        return Vec::new();
    }
    let (ux, uy) = (dx / len, dy / len);
    // Rotate the reversed direction by ±30 degrees.
    let (cos, sin) = (std::f64::consts::FRAC_PI_6.cos(), std::f64::consts::FRAC_PI_6.sin());
    [(cos, sin), (cos, -sin)]
        .into_iter()
        .map(|(c, s)| {
            let wx = -(ux * c - uy * s) * ARROW_LEN;
            let wy = -(ux * s + uy * c) * ARROW_LEN;
            CanvasLine {
                x1: to.0,
                y1: to.1,
                x2: to.0 + wx,
                y2: to.1 + wy,
                color: Color::DarkGray,
            }
        })
        .collect()
}
