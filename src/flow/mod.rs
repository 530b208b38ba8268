mod graph;
mod load;
mod parse;

pub use graph::{FlowGraph, NODE_RADIUS};
pub use load::load_flow_graph;
