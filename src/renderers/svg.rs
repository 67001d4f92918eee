//! SVG renderer: serializes a `Diagram` to an SVG document.
//!
//! Layer order: optional title block, flows (thickest first), node bars,
//! labels. Everything inside the margins sits in one translated group.

use super::Renderer;
use super::diagram::{Diagram, FlowElement, NodeElement, NODE_CORNER_RADIUS};
use super::format::escape;

// ── Constants ────────────────────────────────────────────────────────────────

const TITLE_OFFSET: f64 = 60.0;
const TITLE_FONT_SIZE: u32 = 22;
const SUBTITLE_FONT_SIZE: u32 = 14;
const TITLE_FILL: &str = "#0f172a";
const SUBTITLE_FILL: &str = "#64748b";
const NAME_FILL: &str = "#64748b";
const VALUE_FILL: &str = "#0f172a";

/// Renders diagrams as standalone SVG markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, diagram: &Diagram) -> String {
        if diagram.is_empty() {
            return String::new();
        }
        let (w, h) = (diagram.width, diagram.height);
        let font = escape(&diagram.font_family);

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            format!(
                r#"<g transform="translate({}, {})">"#,
                diagram.margin.left, diagram.margin.top
            ),
        ];

        if let Some(title) = render_title(diagram, &font) {
            parts.push(title);
        }

        parts.push(r#"<g id="sankey_flows">"#.to_string());
        for flow in &diagram.flows {
            parts.push(render_flow(flow, diagram.flow_opacity));
        }
        parts.push("</g>".to_string());

        parts.push(r#"<g id="sankey_nodes">"#.to_string());
        for node in &diagram.nodes {
            parts.push(render_node(node, diagram));
        }
        parts.push("</g>".to_string());

        parts.push(format!(r#"<g id="sankey_labels" font-family="{font}">"#));
        for node in &diagram.nodes {
            parts.push(render_label(node, diagram));
        }
        parts.push("</g>".to_string());

        parts.push("</g>".to_string());
        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

// ── Elements ─────────────────────────────────────────────────────────────────

fn render_title(diagram: &Diagram, font: &str) -> Option<String> {
    if diagram.title.is_none() && diagram.subtitle.is_none() {
        return None;
    }
    let cx = diagram.inner_width / 2.0;
    let mut parts = vec![format!(
        r#"<g transform="translate({cx}, -{TITLE_OFFSET})" text-anchor="middle" font-family="{font}">"#
    )];
    if let Some(title) = &diagram.title {
        parts.push(format!(
            r#"<text font-size="{TITLE_FONT_SIZE}px" font-weight="700" fill="{TITLE_FILL}">{}</text>"#,
            escape(title)
        ));
    }
    if let Some(subtitle) = &diagram.subtitle {
        parts.push(format!(
            r#"<text dy="1.5em" font-size="{SUBTITLE_FONT_SIZE}px" font-weight="400" fill="{SUBTITLE_FILL}">{}</text>"#,
            escape(subtitle)
        ));
    }
    parts.push("</g>".to_string());
    Some(parts.join("\n"))
}

fn render_flow(flow: &FlowElement, opacity: f64) -> String {
    let color = escape(&flow.color);
    let fill = if flow.path.filled { color.as_str() } else { "none" };
    format!(
        r#"<path d="{}" data-render-as="{}" fill="{fill}" stroke="{color}" stroke-width="{}" opacity="{opacity}"><title>{}</title></path>"#,
        flow.path.d,
        flow.path.mode.as_str(),
        flow.path.stroke_width,
        escape(&flow.title)
    )
}

fn render_node(node: &NodeElement, diagram: &Diagram) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="{}"><title>{}</title></rect>"#,
        node.x,
        node.y,
        node.width,
        node.height,
        escape(&node.color),
        diagram.node_opacity,
        escape(&node.stroke),
        diagram.node_border,
        escape(&node.title),
        r = NODE_CORNER_RADIUS,
    )
}

fn render_label(node: &NodeElement, diagram: &Diagram) -> String {
    let p = &node.label.placement;
    let anchor = p.anchor.as_str();
    let fonts = diagram.fonts;
    format!(
        concat!(
            r#"<g transform="translate({x}, {y})">"#,
            r#"<text text-anchor="{anchor}" dy="-0.3em" font-size="{name_px}px" fill="{name_fill}">{name}</text>"#,
            r#"<text text-anchor="{anchor}" dy="0.9em" font-size="{value_px}px" font-weight="700" fill="{value_fill}">{value}</text>"#,
            "</g>"
        ),
        x = p.x,
        y = p.y,
        anchor = anchor,
        name_px = fonts.name_px,
        name_fill = NAME_FILL,
        name = escape(&node.label.name),
        value_px = fonts.value_px,
        value_fill = VALUE_FILL,
        value = escape(&node.label.value_text),
    )
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
