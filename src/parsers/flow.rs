//! Line parser for the `SOURCE [VALUE] TARGET` flow grammar.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::syntax::types::{FlowGraph, FlowLink, FlowNode};

use super::base::{Diagnostic, DiagnosticKind, ParseOutput, Parser};

/// `SOURCE [VALUE] TARGET`; names may not contain brackets.
static FLOW_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\[\]]+?)\s+\[(\d+(?:\.\d*)?|\.\d+)\]\s+([^\[\]]+)$")
        .expect("flow line pattern is valid")
});

/// Comment prefixes; a trimmed line starting with either is skipped.
pub const COMMENT_PREFIXES: &[&str] = &["//", ":"];

/// Parser for flow text, one flow per line.
pub struct FlowTextParser;

/// A flow accepted from the input, still keyed by node name.
struct RawFlow<'a> {
    source: &'a str,
    target: &'a str,
    value: f64,
    row: usize,
}

impl Parser for FlowTextParser {
    fn parse(&self, src: &str) -> ParseOutput {
        let mut flows: Vec<RawFlow<'_>> = Vec::new();
        let mut diagnostics = Vec::new();

        for (lineno, line) in src.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || COMMENT_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
                continue;
            }
            let Some(caps) = FLOW_LINE.captures(trimmed) else {
                diagnostics.push(Diagnostic::new(lineno + 1, DiagnosticKind::Unrecognized, trimmed));
                continue;
            };
            let value: f64 = match caps[2].parse() {
                Ok(v) => v,
                Err(_) => {
                    diagnostics.push(Diagnostic::new(
                        lineno + 1,
                        DiagnosticKind::Unrecognized,
                        trimmed,
                    ));
                    continue;
                }
            };
            if !value.is_finite() {
                diagnostics.push(Diagnostic::new(
                    lineno + 1,
                    DiagnosticKind::ValueOutOfRange,
                    trimmed,
                ));
                continue;
            }
            if value <= 0.0 {
                diagnostics.push(Diagnostic::new(
                    lineno + 1,
                    DiagnosticKind::NonPositiveValue,
                    trimmed,
                ));
                continue;
            }
            let (Some(source), Some(target)) = (caps.get(1), caps.get(3)) else {
                continue;
            };
            flows.push(RawFlow {
                source: source.as_str().trim(),
                target: target.as_str().trim(),
                value,
                row: flows.len(),
            });
        }

        let graph = build_graph(&flows);
        debug!(
            nodes = graph.node_count(),
            links = graph.link_count(),
            dropped = diagnostics.len(),
            "parsed flow text"
        );
        ParseOutput { graph, diagnostics }
    }
}

/// Order nodes by (earliest row, name), index them densely and re-express
/// flows by index in their original order.
fn build_graph(flows: &[RawFlow<'_>]) -> FlowGraph {
    let mut first_row: HashMap<&str, usize> = HashMap::new();
    for flow in flows {
        for name in [flow.source, flow.target] {
            first_row
                .entry(name)
                .and_modify(|row| *row = (*row).min(flow.row))
                .or_insert(flow.row);
        }
    }

    let mut ordered: Vec<(&str, usize)> = first_row.into_iter().collect();
    ordered.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    let index_of: HashMap<&str, usize> = ordered
        .iter()
        .enumerate()
        .map(|(i, (name, _))| (*name, i))
        .collect();

    let nodes = ordered
        .iter()
        .enumerate()
        .map(|(i, (name, row))| FlowNode::new(*name, *row, i))
        .collect();

    let links = flows
        .iter()
        .enumerate()
        .map(|(i, flow)| {
            FlowLink::new(
                index_of[flow.source],
                index_of[flow.target],
                flow.value,
                flow.row,
                i,
            )
        })
        .collect();

    FlowGraph { nodes, links }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_flow.rs"]
mod tests;
