//! Parser trait definition and the diagnostics side channel.

use std::fmt;

use crate::syntax::types::FlowGraph;

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for flow text parsers.
///
/// Parsing never fails: lines that cannot be used are dropped and reported
/// through [`ParseOutput::diagnostics`].
pub trait Parser {
    /// Parse the input source string into an ordered flow graph.
    fn parse(&self, src: &str) -> ParseOutput;
}

// ─── Diagnostics ─────────────────────────────────────────────────────────────

/// Why a line was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The line is not a comment and does not match `SOURCE [VALUE] TARGET`.
    Unrecognized,
    /// The flow value was zero.
    NonPositiveValue,
    /// The flow value does not fit in a finite float.
    ValueOutOfRange,
}

/// A dropped input line (1-based line number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: DiagnosticKind,
    pub text: String,
}

impl Diagnostic {
    pub fn new(line: usize, kind: DiagnosticKind, text: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.kind {
            DiagnosticKind::Unrecognized => "not a flow line",
            DiagnosticKind::NonPositiveValue => "flow value must be > 0",
            DiagnosticKind::ValueOutOfRange => "flow value out of range",
        };
        write!(f, "line {}: {}: {}", self.line, reason, self.text)
    }
}

// ─── ParseOutput ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    pub graph: FlowGraph,
    pub diagnostics: Vec<Diagnostic>,
}
