//! DOT serialization of a diagram

use crate::graph::Diagram;
use std::fmt::Write;

/// Escape a string for use inside a double-quoted DOT id
///
/// Newlines become `\n` so Graphviz centres each label line.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            c => out.push(c),
        }
    }
    out
}

/// Serialize the diagram as a Graphviz `digraph`
///
/// Output is a pure function of the diagram: nodes then edges, each in
/// insertion order.
pub fn to_dot(diagram: &Diagram) -> String {
    let mut out = String::new();
    if let Some(comment) = diagram.comment() {
        for line in comment.lines() {
            let _ = writeln!(out, "// {}", line);
        }
    }
    out.push_str("digraph {\n");
    for node in diagram.nodes() {
        let _ = writeln!(
            out,
            "\t\"{}\" [label=\"{}\"]",
            escape(node.id.as_str()),
            escape(&node.label)
        );
    }
    for edge in diagram.edges() {
        let _ = writeln!(
            out,
            "\t\"{}\" -> \"{}\"",
            escape(edge.source.as_str()),
            escape(edge.target.as_str())
        );
    }
    out.push_str("}\n");
    out
}
