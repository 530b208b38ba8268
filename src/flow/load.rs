use std::fs;

use anyhow::{Context, Result};

use super::graph::FlowGraph;
use super::parse::parse_flow_log;

/// Reads and parses the flow log at `path`. Any failure here is fatal to
/// startup; the error chain carries the path.
pub fn load_flow_graph(path: &str) -> Result<FlowGraph> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read flow log {path}"))?;

    let graph =
        parse_flow_log(&raw).with_context(|| format!("failed to parse flow log {path}"))?;

    Ok(graph)
}
