use std::fmt;

use log::info;

use super::graph::FlowGraph;

// Flow-description lines are positional: the origin name sits at field 3,
// the target at field 5, the capacity at field 8. The second-to-last line
// ends with the source name; the last line lists the sink names from
// field 6 onward, comma-separated.
const ORIGIN_FIELD: usize = 3;
const TARGET_FIELD: usize = 5;
const CAPACITY_FIELD: usize = 8;
const FLOW_LINE_FIELDS: usize = 9;
const SINK_LIST_FIELD: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    TooFewLines { found: usize },
    MalformedFlowLine { line_number: usize, fields: usize },
    InvalidCapacity { line_number: usize, token: String },
    MalformedSourceLine,
    MalformedSinkLine { fields: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewLines { found } => {
                write!(f, "expected at least 3 lines, found {found}")
            }
            Self::MalformedFlowLine { line_number, fields } => {
                write!(
                    f,
                    "line {line_number}: flow line has {fields} fields, expected at least {FLOW_LINE_FIELDS}"
                )
            }
            Self::InvalidCapacity { line_number, token } => {
                write!(f, "line {line_number}: capacity `{token}` is not a non-negative integer")
            }
            Self::MalformedSourceLine => {
                write!(f, "source summary line is empty")
            }
            Self::MalformedSinkLine { fields } => {
                write!(
                    f,
                    "sink summary line has {fields} fields, expected sink names from field {SINK_LIST_FIELD}"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses a flow log into a graph.
///
/// The log is N flow-description lines followed by two summary lines: one
/// naming the source, one listing the sinks. Trailing blank lines are
/// ignored so a file-final newline does not shift the summary lines.
///
/// Malformed input fails loudly: short flow lines and non-numeric
/// capacities are errors, never silently dropped or stored as garbage.
pub fn parse_flow_log(raw: &str) -> Result<FlowGraph, ParseError> {
    let mut lines = raw.lines().collect::<Vec<_>>();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    if lines.len() < 3 {
        return Err(ParseError::TooFewLines { found: lines.len() });
    }

    let sink_line = lines[lines.len() - 1];
    let source_line = lines[lines.len() - 2];
    let flow_lines = &lines[..lines.len() - 2];

    let mut graph = FlowGraph::default();

    for (index, line) in flow_lines.iter().enumerate() {
        let line_number = index + 1;
        let fields = line.split_whitespace().collect::<Vec<_>>();
        if fields.len() < FLOW_LINE_FIELDS {
            return Err(ParseError::MalformedFlowLine {
                line_number,
                fields: fields.len(),
            });
        }

        let capacity = fields[CAPACITY_FIELD].parse::<u32>().map_err(|_| {
            ParseError::InvalidCapacity {
                line_number,
                token: fields[CAPACITY_FIELD].to_owned(),
            }
        })?;

        let origin_index = graph.register(fields[ORIGIN_FIELD]);
        graph.register(fields[TARGET_FIELD]);
        graph.push_edge(origin_index, fields[TARGET_FIELD], capacity);
    }

    let source = source_line
        .split_whitespace()
        .next_back()
        .ok_or(ParseError::MalformedSourceLine)?
        .to_owned();
    graph.register(&source);
    graph.source = source;

    let sink_fields = sink_line.split_whitespace().collect::<Vec<_>>();
    if sink_fields.len() <= SINK_LIST_FIELD {
        return Err(ParseError::MalformedSinkLine {
            fields: sink_fields.len(),
        });
    }
    for token in &sink_fields[SINK_LIST_FIELD..] {
        let name = token.trim_end_matches(',');
        if name.is_empty() {
            continue;
        }
        graph.register(name);
        graph.sinks.insert(name.to_owned());
    }

    info!(
        "parsed flow log: {} nodes, {} edges, source {}, {} sink(s)",
        graph.node_count(),
        graph.edge_count(),
        graph.source,
        graph.sinks.len()
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::graph::NODE_RADIUS;
    use pretty_assertions::assert_eq;

    fn flow_line(origin: &str, target: &str, capacity: &str) -> String {
        // field:   0        1    2       3        4     5        6    7        8
        format!("12:00:01 pump station {origin} feeds {target} with capacity {capacity}")
    }

    fn source_line(name: &str) -> String {
        format!("flow originates at source node {name}")
    }

    fn sink_line(names: &str) -> String {
        // Sink names start at field 6.
        format!("water drains out at sink nodes: {names}")
    }

    fn log(flow: &[String], source: &str, sinks: &str) -> String {
        let mut lines = flow.to_vec();
        lines.push(source_line(source));
        lines.push(sink_line(sinks));
        lines.join("\n")
    }

    #[test]
    fn parses_single_edge_scenario() {
        let raw = log(&[flow_line("A", "B", "7")], "A", "B");
        let graph = parse_flow_log(&raw).unwrap();

        let names = graph.nodes().map(|node| node.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(graph.source, "A");
        assert_eq!(graph.sinks.len(), 1);
        assert!(graph.sinks.contains("B"));

        let edges = &graph.get("A").unwrap().edges;
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target, "B");
        assert_eq!(edges[0].capacity, 7);
        assert!(graph.get("B").unwrap().edges.is_empty());
    }

    #[test]
    fn node_positions_follow_first_seen_order() {
        let raw = log(
            &[flow_line("m", "n", "1"), flow_line("n", "p", "2")],
            "m",
            "p",
        );
        let graph = parse_flow_log(&raw).unwrap();

        for (k, node) in graph.nodes().enumerate() {
            assert_eq!(node.pos.x, NODE_RADIUS + (k as f32) * NODE_RADIUS * 1.5);
            assert_eq!(node.pos.y, NODE_RADIUS);
        }
        let names = graph.nodes().map(|node| node.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["m", "n", "p"]);
    }

    #[test]
    fn parsing_is_deterministic() {
        let raw = log(
            &[
                flow_line("a", "b", "4"),
                flow_line("b", "c", "9"),
                flow_line("a", "c", "2"),
            ],
            "a",
            "b, c",
        );
        let first = parse_flow_log(&raw).unwrap();
        let second = parse_flow_log(&raw).unwrap();

        let names = |graph: &FlowGraph| {
            graph.nodes().map(|node| node.name.clone()).collect::<Vec<_>>()
        };
        assert_eq!(names(&first), names(&second));
        assert_eq!(first.source, second.source);
        assert_eq!(first.sinks, second.sinks);
        assert_eq!(first.edge_count(), second.edge_count());
    }

    #[test]
    fn duplicate_flow_lines_keep_both_edges() {
        let raw = log(
            &[flow_line("a", "b", "5"), flow_line("a", "b", "5")],
            "a",
            "b",
        );
        let graph = parse_flow_log(&raw).unwrap();
        assert_eq!(graph.get("a").unwrap().edges.len(), 2);
    }

    #[test]
    fn destination_only_node_gets_empty_edge_list() {
        let raw = log(&[flow_line("a", "b", "1")], "a", "b");
        let graph = parse_flow_log(&raw).unwrap();
        assert!(graph.get("b").unwrap().edges.is_empty());
    }

    #[test]
    fn source_and_sinks_register_unseen_nodes() {
        let raw = log(&[flow_line("a", "b", "1")], "s", "t, b");
        let graph = parse_flow_log(&raw).unwrap();

        let names = graph.nodes().map(|node| node.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["a", "b", "s", "t"]);
        assert!(graph.get("s").unwrap().edges.is_empty());
        assert!(graph.get("t").unwrap().edges.is_empty());
    }

    #[test]
    fn sink_names_are_comma_trimmed_and_deduplicated() {
        let raw = log(&[flow_line("a", "b", "1")], "a", "b, c, b");
        let graph = parse_flow_log(&raw).unwrap();

        assert_eq!(graph.sinks.len(), 2);
        assert!(graph.sinks.contains("b"));
        assert!(graph.sinks.contains("c"));
    }

    #[test]
    fn node_set_covers_all_mentioned_names() {
        let raw = log(
            &[flow_line("a", "b", "1"), flow_line("c", "a", "2")],
            "s",
            "b, d",
        );
        let graph = parse_flow_log(&raw).unwrap();

        let mut names = graph.nodes().map(|node| node.name.as_str()).collect::<Vec<_>>();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b", "c", "d", "s"]);
    }

    #[test]
    fn trailing_blank_lines_are_ignored() {
        let raw = format!("{}\n\n", log(&[flow_line("a", "b", "7")], "a", "b"));
        let graph = parse_flow_log(&raw).unwrap();

        assert_eq!(graph.source, "a");
        assert!(graph.sinks.contains("b"));
        assert_eq!(graph.get("a").unwrap().edges[0].capacity, 7);
    }

    #[test]
    fn rejects_logs_with_fewer_than_three_lines() {
        let raw = format!("{}\n{}", source_line("a"), sink_line("b"));
        assert_eq!(
            parse_flow_log(&raw),
            Err(ParseError::TooFewLines { found: 2 })
        );
    }

    #[test]
    fn rejects_short_flow_lines() {
        let raw = log(
            &[flow_line("a", "b", "1"), "too short".to_owned()],
            "a",
            "b",
        );
        assert_eq!(
            parse_flow_log(&raw),
            Err(ParseError::MalformedFlowLine {
                line_number: 2,
                fields: 2,
            })
        );
    }

    #[test]
    fn rejects_non_numeric_capacity() {
        let raw = log(&[flow_line("a", "b", "lots")], "a", "b");
        assert_eq!(
            parse_flow_log(&raw),
            Err(ParseError::InvalidCapacity {
                line_number: 1,
                token: "lots".to_owned(),
            })
        );
    }

    #[test]
    fn rejects_negative_capacity() {
        let raw = log(&[flow_line("a", "b", "-3")], "a", "b");
        assert_eq!(
            parse_flow_log(&raw),
            Err(ParseError::InvalidCapacity {
                line_number: 1,
                token: "-3".to_owned(),
            })
        );
    }

    #[test]
    fn rejects_sink_line_without_sink_fields() {
        let raw = format!(
            "{}\n{}\nno sinks here",
            flow_line("a", "b", "1"),
            source_line("a")
        );
        assert_eq!(
            parse_flow_log(&raw),
            Err(ParseError::MalformedSinkLine { fields: 3 })
        );
    }
}
