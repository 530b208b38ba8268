use eframe::egui::{CursorIcon, Pos2, Vec2};
use log::debug;

use crate::flow::{FlowGraph, NODE_RADIUS};

#[derive(Clone, Debug)]
struct HoverEntry {
    name: String,
    /// Node center minus pointer, captured at hover time. While dragging
    /// this keeps the node rigid under the pointer instead of snapping its
    /// center to it.
    offset: Vec2,
}

/// Pointer-driven interaction state: hover set, drag state, and the
/// per-node edge-visibility toggle. Mutates the graph directly; the view
/// only reads it.
#[derive(Clone, Debug, Default)]
pub struct PointerState {
    pointer: Pos2,
    hovered: Vec<HoverEntry>,
    dragged: Option<HoverEntry>,
}

impl PointerState {
    /// Rebuilds the hover set from scratch and, while dragging, moves the
    /// dragged node to `pointer + offset`. Hover requires the pointer
    /// strictly inside the node circle; ties go to the first node in
    /// graph insertion order.
    pub fn pointer_moved(&mut self, graph: &mut FlowGraph, pointer: Pos2) {
        self.pointer = pointer;

        self.hovered.clear();
        for node in graph.nodes() {
            let offset = node.pos - pointer;
            if offset.length() < NODE_RADIUS {
                self.hovered.push(HoverEntry {
                    name: node.name.clone(),
                    offset,
                });
            }
        }

        if let Some(drag) = &self.dragged
            && let Some(node) = graph.get_mut(&drag.name)
        {
            node.pos = pointer + drag.offset;
        }
    }

    /// Starts dragging the first hovered node. No-op when nothing is
    /// hovered.
    pub fn primary_pressed(&mut self) {
        if let Some(entry) = self.hovered.first() {
            debug!("drag start: {} at {:?}", entry.name, self.pointer);
            self.dragged = Some(entry.clone());
        }
    }

    /// Toggles edge visibility on the first hovered node. Drag state is
    /// untouched.
    pub fn secondary_pressed(&self, graph: &mut FlowGraph) {
        if let Some(entry) = self.hovered.first()
            && let Some(node) = graph.get_mut(&entry.name)
        {
            node.show_edges = !node.show_edges;
            debug!(
                "edges {} for {}",
                if node.show_edges { "shown" } else { "hidden" },
                node.name
            );
        }
    }

    pub fn primary_released(&mut self) {
        self.dragged = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// Name of the node a press would act on, if any.
    pub fn hovered_name(&self) -> Option<&str> {
        self.hovered.first().map(|entry| entry.name.as_str())
    }

    pub fn cursor_icon(&self) -> CursorIcon {
        if self.dragged.is_some() {
            CursorIcon::Grabbing
        } else if self.hovered.is_empty() {
            CursorIcon::Default
        } else {
            CursorIcon::Grab
        }
    }
}
