//! Renderer trait and the per-element drawing stages.

pub mod diagram;
pub mod format;
pub mod geometry;
pub mod labels;
pub mod svg;

pub use diagram::{Diagram, FlowElement, LabelElement, NodeElement};
pub use geometry::{FlowEnds, FlowPath, RenderMode, flow_path};
pub use labels::{LabelBounds, LabelPlacement, LabelRule, TextAnchor, place_label, truncate_name};
pub use svg::SvgRenderer;

/// Trait for diagram backends.
pub trait Renderer {
    /// Render a built diagram to a string. An empty diagram renders as "".
    fn render(&self, diagram: &Diagram) -> String;
}
