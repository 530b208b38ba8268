use eframe::egui::{self, Context};

use crate::flow::FlowGraph;

mod interaction;
mod render_utils;
mod view;

use interaction::PointerState;

/// The running application: the parsed graph plus the pointer state that
/// mutates it. One full redraw per frame; no retained scene.
pub struct FlowVizApp {
    graph: FlowGraph,
    pointer: PointerState,
}

impl FlowVizApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, graph: FlowGraph) -> Self {
        Self {
            graph,
            pointer: PointerState::default(),
        }
    }
}

impl eframe::App for FlowVizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_graph(ui));
    }
}
