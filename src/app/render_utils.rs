use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::flow::FlowGraph;

/// Accent for the source node and for edge start markers.
pub(super) const SOURCE_ACCENT: Color32 = Color32::from_rgb(50, 205, 50);
/// Accent for sink nodes and for edge end markers.
pub(super) const SINK_ACCENT: Color32 = Color32::from_rgb(211, 47, 47);
const NEUTRAL_STROKE: Color32 = Color32::from_rgb(32, 32, 32);

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(250, 250, 247));

    let step = 56.0;
    let grid = Stroke::new(1.0, Color32::from_rgba_unmultiplied(70, 80, 90, 26));

    let mut x = rect.left() + step;
    while x < rect.right() {
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], grid);
        x += step;
    }

    let mut y = rect.top() + step;
    while y < rect.bottom() {
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], grid);
        y += step;
    }
}

pub(super) fn role_stroke(graph: &FlowGraph, name: &str) -> Color32 {
    if name == graph.source {
        SOURCE_ACCENT
    } else if graph.sinks.contains(name) {
        SINK_ACCENT
    } else {
        NEUTRAL_STROKE
    }
}
