use std::collections::{HashMap, HashSet};

use eframe::egui::{Pos2, pos2};

/// Node circle radius in surface pixels. Hit-testing and the initial
/// row layout both measure against this.
pub const NODE_RADIUS: f32 = 30.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowEdge {
    pub target: String,
    pub capacity: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlowNode {
    pub name: String,
    pub pos: Pos2,
    pub edges: Vec<FlowEdge>,
    pub show_edges: bool,
}

/// Directed flow network keyed by node name.
///
/// Nodes live in a `Vec` in first-seen order with a name index on the
/// side, so iteration order is deterministic. Hover tie-breaking and the
/// initial layout both depend on that order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlowGraph {
    nodes: Vec<FlowNode>,
    index_by_name: HashMap<String, usize>,
    pub source: String,
    pub sinks: HashSet<String>,
}

impl FlowGraph {
    /// Registers `name` if unseen and returns its index. The k-th distinct
    /// node lands at `(NODE_RADIUS + k * NODE_RADIUS * 1.5, NODE_RADIUS)`,
    /// a single placeholder row the user drags apart.
    pub fn register(&mut self, name: &str) -> usize {
        if let Some(&index) = self.index_by_name.get(name) {
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(FlowNode {
            name: name.to_owned(),
            pos: pos2(NODE_RADIUS + (index as f32) * NODE_RADIUS * 1.5, NODE_RADIUS),
            edges: Vec::new(),
            show_edges: false,
        });
        self.index_by_name.insert(name.to_owned(), index);
        index
    }

    /// Appends an outgoing edge. Repeated origin/target pairs are kept as
    /// separate edges; the log may legitimately repeat them.
    pub fn push_edge(&mut self, origin_index: usize, target: &str, capacity: u32) {
        if let Some(node) = self.nodes.get_mut(origin_index) {
            node.edges.push(FlowEdge {
                target: target.to_owned(),
                capacity,
            });
        }
    }

    pub fn get(&self, name: &str) -> Option<&FlowNode> {
        self.index_by_name
            .get(name)
            .and_then(|&index| self.nodes.get(index))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FlowNode> {
        self.index_by_name
            .get(name)
            .and_then(|&index| self.nodes.get_mut(index))
    }

    /// Nodes in first-seen order.
    pub fn nodes(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.edges.len()).sum()
    }
}
