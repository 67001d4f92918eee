//! Layout types: the request handed to a layout adapter and the geometry it
//! returns.

use crate::config::RenderConfig;
use crate::syntax::types::FlowGraph;

// ─── LayoutRequest ────────────────────────────────────────────────────────────

/// Everything a layout adapter needs to position a flow graph.
#[derive(Debug, Clone)]
pub struct LayoutRequest<'a> {
    pub graph: &'a FlowGraph,
    /// Drawable width (margins excluded).
    pub width: f64,
    /// Drawable height (margins excluded).
    pub height: f64,
    pub node_width: f64,
    /// Vertical spacing factor, 0..1.
    pub spacing_factor: f64,
    /// Share of the height given to nodes, 0..1.
    pub height_factor: f64,
    pub left_justify_origins: bool,
    pub right_justify_endpoints: bool,
    pub iterations: usize,
}

impl<'a> LayoutRequest<'a> {
    pub fn from_config(graph: &'a FlowGraph, config: &RenderConfig) -> Self {
        Self {
            graph,
            width: config.inner_width(),
            height: config.inner_height(),
            node_width: config.node_width,
            spacing_factor: config.node_spacing / 100.0,
            height_factor: config.node_height_factor,
            left_justify_origins: config.left_justify_origins,
            right_justify_endpoints: config.right_justify_endpoints,
            iterations: config.layout_iterations,
        }
    }
}

// ─── LaidOutNode ──────────────────────────────────────────────────────────────

/// A node with its resolved position, size and aggregate value.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutNode {
    pub index: usize,
    pub name: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    /// Width of the node bar.
    pub dx: f64,
    /// Height of the node bar.
    pub dy: f64,
    pub stage: usize,
    /// Synthetic adapter artifact; never drawn.
    pub is_shadow: bool,
}

impl LaidOutNode {
    pub fn new(index: usize, name: impl Into<String>, value: f64) -> Self {
        Self {
            index,
            name: name.into(),
            value,
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            stage: 0,
            is_shadow: false,
        }
    }
}

// ─── LaidOutLink ──────────────────────────────────────────────────────────────

/// A link with its endpoint offsets and thickness.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLink {
    pub index: usize,
    pub source: usize,
    pub target: usize,
    pub value: f64,
    /// Offset of the link's top edge below the source node's top.
    pub sy: f64,
    /// Offset of the link's top edge below the target node's top.
    pub ty: f64,
    /// Thickness.
    pub dy: f64,
    pub is_shadow: bool,
}

impl LaidOutLink {
    pub fn new(index: usize, source: usize, target: usize, value: f64) -> Self {
        Self {
            index,
            source,
            target,
            value,
            sy: 0.0,
            ty: 0.0,
            dy: 0.0,
            is_shadow: false,
        }
    }
}

// ─── LayoutOutput ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutOutput {
    pub nodes: Vec<LaidOutNode>,
    pub links: Vec<LaidOutLink>,
}
