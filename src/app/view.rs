use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, vec2};

use crate::flow::NODE_RADIUS;

use super::FlowVizApp;
use super::render_utils::{SINK_ACCENT, SOURCE_ACCENT, draw_background, role_stroke};

const NODE_FONT_SIZE: f32 = 20.0;
const EDGE_FONT_SIZE: f32 = 15.0;
const LINE_WIDTH: f32 = 4.0;
const MARKER_RADIUS: f32 = 7.0;
/// Horizontal shift of the capacity label off the edge line.
const CAPACITY_LABEL_OFFSET: f32 = -50.0;

const NODE_FILL: Color32 = Color32::WHITE;
const TEXT_COLOR: Color32 = Color32::from_rgb(20, 20, 20);
const EDGE_COLOR: Color32 = Color32::from_rgb(20, 20, 20);

impl FlowVizApp {
    pub(super) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        draw_background(&painter, rect);

        let (pointer_pos, primary_down, primary_up, secondary_down) = ui.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.button_pressed(egui::PointerButton::Primary),
                input.pointer.button_released(egui::PointerButton::Primary),
                input.pointer.button_pressed(egui::PointerButton::Secondary),
            )
        });

        // Refresh the hover set before acting on button edges so a press
        // lands on what is under the pointer this frame.
        if let Some(pointer) = pointer_pos {
            self.pointer.pointer_moved(&mut self.graph, pointer);
        }
        if primary_down {
            self.pointer.primary_pressed();
        }
        if secondary_down {
            self.pointer.secondary_pressed(&mut self.graph);
        }
        if primary_up {
            self.pointer.primary_released();
        }

        ui.output_mut(|output| output.cursor_icon = self.pointer.cursor_icon());

        // Edges first so the lines sit under the node circles.
        for node in self.graph.nodes() {
            if !node.show_edges {
                continue;
            }

            for edge in &node.edges {
                let Some(target) = self.graph.get(&edge.target) else {
                    continue;
                };

                let delta = target.pos - node.pos;
                let length = delta.length();
                if length <= NODE_RADIUS * 2.0 {
                    // Coincident or overlapping circles leave no rim-to-rim
                    // segment to draw.
                    continue;
                }
                let dir = delta / length;

                let start = node.pos + dir * NODE_RADIUS;
                let end = target.pos - dir * NODE_RADIUS;
                painter.line_segment([start, end], Stroke::new(LINE_WIDTH, EDGE_COLOR));
                painter.circle_filled(start, MARKER_RADIUS, SOURCE_ACCENT);
                painter.circle_filled(end, MARKER_RADIUS, SINK_ACCENT);

                let midpoint = start + (end - start) * 0.5;
                painter.text(
                    midpoint + vec2(CAPACITY_LABEL_OFFSET, 0.0),
                    Align2::CENTER_CENTER,
                    edge.capacity.to_string(),
                    FontId::monospace(EDGE_FONT_SIZE),
                    TEXT_COLOR,
                );
            }
        }

        for node in self.graph.nodes() {
            painter.circle_filled(node.pos, NODE_RADIUS, NODE_FILL);
            painter.circle_stroke(
                node.pos,
                NODE_RADIUS,
                Stroke::new(LINE_WIDTH, role_stroke(&self.graph, &node.name)),
            );
            painter.text(
                node.pos,
                Align2::CENTER_CENTER,
                &node.name,
                FontId::monospace(NODE_FONT_SIZE),
                TEXT_COLOR,
            );
        }

        if let Some(name) = self.pointer.hovered_name()
            && let Some(node) = self.graph.get(name)
        {
            let status = format!("{}  |  {} outgoing edge(s)", node.name, node.edges.len());
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                status,
                FontId::proportional(13.0),
                TEXT_COLOR,
            );
        }

        if self.pointer.is_dragging() {
            ui.ctx().request_repaint();
        }
    }
}
