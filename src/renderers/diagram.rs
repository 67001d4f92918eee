//! Per-element drawing descriptors.
//!
//! A `Diagram` is everything a backend needs to draw: one path per flow
//! (already ordered thickest first) and one bar plus two-line label per node.
//! It holds no references into the layout, so it outlives the render call.

use crate::color::ColorAssignment;
use crate::config::{Margin, RenderConfig};
use crate::layout::graph::RenderedGraph;

use super::format::{darker, format_rounded};
use super::geometry::{FlowEnds, FlowPath, flow_path};
use super::labels::{LabelBounds, LabelFonts, LabelPlacement, place_label, truncate_name};

/// Node bars never get shorter than this.
pub const MIN_NODE_HEIGHT: f64 = 3.0;
pub const NODE_CORNER_RADIUS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FlowElement {
    /// Link index from the parser.
    pub index: usize,
    pub path: FlowPath,
    pub color: String,
    pub thickness: f64,
    /// Hover text.
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelElement {
    pub placement: LabelPlacement,
    /// Possibly truncated display name.
    pub name: String,
    pub value_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeElement {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub stroke: String,
    /// Hover text.
    pub title: String,
    pub label: LabelElement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub inner_width: f64,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub font_family: String,
    pub flow_opacity: f64,
    pub node_opacity: f64,
    pub node_border: f64,
    pub fonts: LabelFonts,
    pub flows: Vec<FlowElement>,
    pub nodes: Vec<NodeElement>,
}

impl Diagram {
    /// A diagram with no elements, sized from `config`.
    pub fn empty(config: &RenderConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            margin: config.margin,
            inner_width: config.inner_width(),
            title: config.title.clone(),
            subtitle: config.subtitle.clone(),
            font_family: config.font_family.clone(),
            flow_opacity: config.flow_opacity,
            node_opacity: config.node_opacity,
            node_border: config.node_border,
            fonts: LabelFonts::for_density(1),
            flows: Vec::new(),
            nodes: Vec::new(),
        }
    }

    pub fn build(graph: &RenderedGraph, colors: &ColorAssignment, config: &RenderConfig) -> Self {
        let mut diagram = Self::empty(config);
        if graph.is_empty() {
            return diagram;
        }
        diagram.fonts = LabelFonts::for_density(graph.densest_stage());

        let sep = config.thousands_separator;
        let unit = &config.value_unit;

        let mut flows: Vec<FlowElement> = graph
            .links
            .iter()
            .enumerate()
            .map(|(pos, link)| {
                let (s, t) = graph.ends(pos);
                let (source, target) = (&graph.nodes[s], &graph.nodes[t]);
                FlowElement {
                    index: link.index,
                    path: flow_path(&FlowEnds::new(source, target, link), config.flow_curvature),
                    color: colors.link(pos).to_string(),
                    thickness: link.dy,
                    title: format!(
                        "{} → {}\n{} {}",
                        source.name,
                        target.name,
                        format_rounded(link.value, sep),
                        unit
                    ),
                }
            })
            .collect();
        // Thin flows end up on top of thick ones.
        flows.sort_by(|a, b| b.thickness.total_cmp(&a.thickness));

        let (min_x, max_x) = graph.x_extent().unwrap_or((0.0, 0.0));
        let bounds = LabelBounds {
            min_x,
            max_x,
            width: config.inner_width(),
        };

        let nodes = graph
            .nodes
            .iter()
            .enumerate()
            .map(|(slot, node)| {
                let color = colors.node(slot).to_string();
                let value_text = format!("{} {}", format_rounded(node.value, sep), unit);
                NodeElement {
                    index: node.index,
                    x: node.x,
                    y: node.y,
                    width: node.dx,
                    height: node.dy.max(MIN_NODE_HEIGHT),
                    stroke: darker(&color, 1.0),
                    color,
                    title: format!("{}\n{}", node.name, value_text),
                    label: LabelElement {
                        placement: place_label(
                            node,
                            graph.in_degree(slot),
                            graph.out_degree(slot),
                            &bounds,
                        ),
                        name: truncate_name(&node.name).into_owned(),
                        value_text,
                    },
                }
            })
            .collect();

        diagram.flows = flows;
        diagram.nodes = nodes;
        diagram
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_diagram.rs"]
mod tests;
