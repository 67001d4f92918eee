//! Render pipeline: parse → layout → filter → color → build descriptors.
//!
//! Every call starts from scratch and owns everything it builds; the only
//! input besides the text is the settings snapshot passed in.

use tracing::debug;

use crate::color::propagate;
use crate::config::RenderConfig;
use crate::error::{LayoutError, SankeyError};
use crate::layout::{LayoutAdapter, LayoutRequest, RenderedGraph};
use crate::parsers::{Diagnostic, parse_with_diagnostics};
use crate::renderers::Diagram;
use crate::syntax::types::FlowGraph;

/// Result of rendering flow text.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub diagram: Diagram,
    /// Lines dropped by the parser.
    pub diagnostics: Vec<Diagnostic>,
}

/// Flow diagram engine bound to one layout adapter.
#[derive(Debug, Clone, Default)]
pub struct SankeyRenderer<A> {
    adapter: A,
}

impl<A: LayoutAdapter> SankeyRenderer<A> {
    pub fn new(adapter: A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Parse `src` and build its diagram.
    pub fn render(&self, src: &str, config: &RenderConfig) -> Result<RenderOutput, SankeyError> {
        let parsed = parse_with_diagnostics(src);
        for d in &parsed.diagnostics {
            debug!(line = d.line, kind = ?d.kind, "dropped input line");
        }
        let diagram = self.render_graph(&parsed.graph, config)?;
        Ok(RenderOutput {
            diagram,
            diagnostics: parsed.diagnostics,
        })
    }

    /// Build the diagram for an already parsed graph.
    pub fn render_graph(&self, graph: &FlowGraph, config: &RenderConfig) -> Result<Diagram, SankeyError> {
        config.validate()?;
        if graph.is_empty() {
            debug!("no flows to draw");
            return Ok(Diagram::empty(config));
        }
        graph.check_indices().map_err(LayoutError::InvalidGraph)?;
        let request = LayoutRequest::from_config(graph, config);
        let layout = self.adapter.layout(&request)?;
        let rendered = RenderedGraph::from_layout(layout);
        let colors = propagate(&rendered, &config.palette);
        Ok(Diagram::build(&rendered, &colors, config))
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_pipeline.rs"]
mod tests;
