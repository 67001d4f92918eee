//! Flow text parsing.

pub mod base;
pub mod flow;

pub use base::{Diagnostic, DiagnosticKind, ParseOutput, Parser};
pub use flow::FlowTextParser;

use crate::syntax::types::FlowGraph;

/// Parse flow text into an ordered graph, silently dropping unusable lines.
pub fn parse(src: &str) -> FlowGraph {
    FlowTextParser.parse(src).graph
}

/// Parse flow text and also report every dropped line.
///
/// Accepts and rejects exactly the same lines as [`parse`].
pub fn parse_with_diagnostics(src: &str) -> ParseOutput {
    FlowTextParser.parse(src)
}
