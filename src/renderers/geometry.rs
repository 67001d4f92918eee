//! Flow path geometry.
//!
//! A flow is drawn either as a stroked cubic curve between the vertical
//! centers of its two ends, or, when the ends are nearly level or nearly
//! touching, as a filled quadrilateral spanning the full thickness.

use crate::layout::types::{LaidOutLink, LaidOutNode};

/// Flows whose end centers differ by less than this are drawn flat.
pub const FLAT_MIN_RISE: f64 = 2.0;
/// Flows whose ends are closer than this horizontally are drawn flat.
pub const FLAT_MIN_GAP: f64 = 12.0;
/// Stroke width used to outline flat flows.
pub const FLAT_STROKE_WIDTH: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Flat,
    Curved,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Flat => "flat",
            RenderMode::Curved => "curved",
        }
    }
}

/// Resolved end geometry of one flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowEnds {
    /// Trailing edge of the source node.
    pub source_x: f64,
    /// Top of the band where it leaves the source.
    pub source_top: f64,
    /// Leading edge of the target node.
    pub target_x: f64,
    /// Top of the band where it enters the target.
    pub target_top: f64,
    /// Band thickness.
    pub thickness: f64,
}

impl FlowEnds {
    pub fn new(source: &LaidOutNode, target: &LaidOutNode, link: &LaidOutLink) -> Self {
        Self {
            source_x: source.x + source.dx,
            source_top: source.y + link.sy,
            target_x: target.x,
            target_top: target.y + link.ty,
            thickness: link.dy,
        }
    }

    fn source_center(&self) -> f64 {
        self.source_top + self.thickness / 2.0
    }

    fn target_center(&self) -> f64 {
        self.target_top + self.thickness / 2.0
    }

    /// True when a curve would degenerate and the flat form must be used.
    pub fn is_degenerate(&self) -> bool {
        (self.source_center() - self.target_center()).abs() < FLAT_MIN_RISE
            || (self.target_x - self.source_x).abs() < FLAT_MIN_GAP
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowPath {
    /// SVG path data.
    pub d: String,
    pub mode: RenderMode,
    /// Flat flows are filled; curved flows are stroke only.
    pub filled: bool,
    pub stroke_width: f64,
}

/// Path for one flow. `curvature` is clamped to 0..=1 (non-finite → 0.5).
pub fn flow_path(ends: &FlowEnds, curvature: f64) -> FlowPath {
    if ends.is_degenerate() {
        return flat_path(ends);
    }
    let c = if curvature.is_finite() {
        curvature.clamp(0.0, 1.0)
    } else {
        0.5
    };
    let (x0, x1) = (ends.source_x, ends.target_x);
    let (y0, y1) = (ends.source_center(), ends.target_center());
    let xcp1 = lerp(x0, x1, c);
    let xcp2 = lerp(x0, x1, 1.0 - c);
    FlowPath {
        d: format!("M{x0} {y0}C{xcp1} {y0} {xcp2} {y1} {x1} {y1}"),
        mode: RenderMode::Curved,
        filled: false,
        stroke_width: ends.thickness.max(1.0),
    }
}

fn flat_path(ends: &FlowEnds) -> FlowPath {
    let dy = ends.thickness;
    let (sx, tx) = (ends.source_x, ends.target_x);
    let top = ends.source_top;
    let bottom = ends.target_top + dy;
    // 0.0 - dy keeps a zero thickness printing as "0", not "-0".
    let back = 0.0 - dy;
    FlowPath {
        d: format!("M{sx} {top}v{dy}L{tx} {bottom}v{back}z"),
        mode: RenderMode::Flat,
        filled: true,
        stroke_width: FLAT_STROKE_WIDTH,
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_geometry.rs"]
mod tests;
