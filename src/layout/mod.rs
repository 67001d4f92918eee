//! Layout seam.
//!
//! Positioning nodes (stage, x, y, thickness) is delegated to a
//! [`LayoutAdapter`]. The adapter may emit synthetic shadow nodes and links;
//! [`RenderedGraph::from_layout`] strips them before anything is colored or
//! labeled.

pub mod graph;
pub mod stages;
pub mod types;

pub use graph::RenderedGraph;
pub use stages::StageLayout;
pub use types::{LaidOutLink, LaidOutNode, LayoutOutput, LayoutRequest};

use crate::error::LayoutError;

/// Assigns geometry to a parsed flow graph.
pub trait LayoutAdapter {
    fn layout(&self, request: &LayoutRequest<'_>) -> Result<LayoutOutput, LayoutError>;
}

impl<A: LayoutAdapter + ?Sized> LayoutAdapter for &A {
    fn layout(&self, request: &LayoutRequest<'_>) -> Result<LayoutOutput, LayoutError> {
        (**self).layout(request)
    }
}

impl<A: LayoutAdapter + ?Sized> LayoutAdapter for Box<A> {
    fn layout(&self, request: &LayoutRequest<'_>) -> Result<LayoutOutput, LayoutError> {
        (**self).layout(request)
    }
}
