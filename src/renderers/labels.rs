//! Node label placement.
//!
//! Labels go on the outside of the diagram where the topology allows it:
//! origins get their label on the left, endpoints on the right. Nodes with
//! both kinds of links fall back to their column position.

use std::borrow::Cow;

use crate::layout::types::LaidOutNode;

/// Horizontal gap between a node and an outside label.
pub const LABEL_GAP: f64 = 15.0;
/// Horizontal gap for labels of nodes in middle columns.
pub const INNER_LABEL_GAP: f64 = 10.0;
/// Names longer than this many characters are cut and get `...` appended.
pub const MAX_NAME_CHARS: usize = 35;
/// Above this many nodes in one stage, label fonts shrink.
pub const DENSE_STAGE_NODES: usize = 20;
const X_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    End,
}

impl TextAnchor {
    pub fn as_str(self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        }
    }
}

/// Which placement rule fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    Origin,
    Endpoint,
    Isolated,
    FirstStage,
    LastStage,
    LeftHalf,
    RightHalf,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub anchor: TextAnchor,
    pub rule: LabelRule,
}

/// Diagram-wide values the placement rules compare against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBounds {
    pub min_x: f64,
    pub max_x: f64,
    /// Drawable width; its midpoint splits left and right middle columns.
    pub width: f64,
}

pub fn place_label(
    node: &LaidOutNode,
    in_degree: usize,
    out_degree: usize,
    bounds: &LabelBounds,
) -> LabelPlacement {
    let left = node.x - LABEL_GAP;
    let right = node.x + node.dx + LABEL_GAP;
    let (x, anchor, rule) = if in_degree == 0 && out_degree > 0 {
        (left, TextAnchor::End, LabelRule::Origin)
    } else if out_degree == 0 && in_degree > 0 {
        (right, TextAnchor::Start, LabelRule::Endpoint)
    } else if in_degree == 0 && out_degree == 0 {
        (left, TextAnchor::End, LabelRule::Isolated)
    } else if (node.x - bounds.min_x).abs() < X_TOLERANCE {
        (left, TextAnchor::End, LabelRule::FirstStage)
    } else if (node.x - bounds.max_x).abs() < X_TOLERANCE {
        (right, TextAnchor::Start, LabelRule::LastStage)
    } else if node.x < bounds.width / 2.0 {
        (
            node.x + node.dx + INNER_LABEL_GAP,
            TextAnchor::Start,
            LabelRule::LeftHalf,
        )
    } else {
        (node.x - INNER_LABEL_GAP, TextAnchor::End, LabelRule::RightHalf)
    };
    LabelPlacement {
        x,
        y: node.y + node.dy / 2.0,
        anchor,
        rule,
    }
}

/// Cut names longer than [`MAX_NAME_CHARS`] characters and append `...`.
pub fn truncate_name(name: &str) -> Cow<'_, str> {
    match name.char_indices().nth(MAX_NAME_CHARS) {
        None => Cow::Borrowed(name),
        Some((cut, _)) => Cow::Owned(format!("{}...", &name[..cut])),
    }
}

/// Font sizes (px) for the two label lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelFonts {
    pub name_px: u32,
    pub value_px: u32,
}

impl LabelFonts {
    /// Sizes for a diagram whose most crowded stage holds `densest` nodes.
    pub fn for_density(densest: usize) -> Self {
        if densest > DENSE_STAGE_NODES {
            Self {
                name_px: 10,
                value_px: 11,
            }
        } else {
            Self {
                name_px: 11,
                value_px: 13,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_labels.rs"]
mod tests;
