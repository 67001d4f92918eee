//! Render settings.
//!
//! A `RenderConfig` is an immutable snapshot handed to every render call; a
//! caller that changes settings simply renders again with the new value.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::selection::SelectableList;

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Ordered, non-empty color list, cycled modulo its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new<S: Into<String>>(colors: impl IntoIterator<Item = S>) -> Result<Self, ConfigError> {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self(colors))
    }

    /// Color for the `n`-th draw, wrapping around.
    pub fn color(&self, n: usize) -> &str {
        &self.0[n % self.0.len()]
    }

    /// Color for anything the traversal never reached.
    pub fn fallback(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, color: &str) -> bool {
        self.0.iter().any(|c| c == color)
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = ConfigError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(p: Palette) -> Self {
        p.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect())
    }
}

pub const DEFAULT_PALETTE: &[&str] = &[
    "#3b82f6", "#10b981", "#f59e0b", "#8b5cf6", "#ef4444", "#06b6d4", "#ec4899", "#84cc16",
    "#f43f5e", "#94a3b8",
];

const TABLEAU_PALETTE: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

const SLATE_PALETTE: &[&str] = &[
    "#0f172a", "#334155", "#475569", "#64748b", "#94a3b8", "#cbd5e1",
];

// ─── Palette presets ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalettePreset {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

impl PalettePreset {
    pub fn palette(&self) -> Palette {
        Palette(self.colors.iter().map(|c| c.to_string()).collect())
    }
}

const DEFAULT_PRESET: PalettePreset = PalettePreset {
    name: "default",
    colors: DEFAULT_PALETTE,
};

pub const PALETTE_PRESETS: &[PalettePreset] = &[
    DEFAULT_PRESET,
    PalettePreset {
        name: "tableau",
        colors: TABLEAU_PALETTE,
    },
    PalettePreset {
        name: "slate",
        colors: SLATE_PALETTE,
    },
];

/// Selectable list over the built-in palette presets, "default" selected.
pub fn palette_presets() -> SelectableList<PalettePreset> {
    SelectableList::from_first(DEFAULT_PRESET, PALETTE_PRESETS[1..].iter().cloned())
}

/// Look a preset up by name (case-insensitive).
pub fn palette_preset(name: &str) -> Result<Palette, ConfigError> {
    let mut presets = palette_presets();
    if presets.select_where(|p| p.name.eq_ignore_ascii_case(name)) {
        return Ok(presets.selected().palette());
    }
    Err(ConfigError::UnknownPreset {
        name: name.to_string(),
        available: PALETTE_PRESETS
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(", "),
    })
}

// ─── Margin ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 100.0,
            right: 220.0,
            bottom: 40.0,
            left: 220.0,
        }
    }
}

// ─── RenderConfig ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Full SVG width, margins included.
    pub width: f64,
    /// Full SVG height, margins included.
    pub height: f64,
    pub margin: Margin,
    pub node_width: f64,
    /// Vertical spacing between nodes, in percent.
    pub node_spacing: f64,
    /// Share of the stage height given to nodes (0..1).
    pub node_height_factor: f64,
    pub node_opacity: f64,
    pub node_border: f64,
    pub left_justify_origins: bool,
    pub right_justify_endpoints: bool,
    pub flow_opacity: f64,
    /// Bezier control point position (0..1); clamped when rendering.
    pub flow_curvature: f64,
    pub layout_iterations: usize,
    pub palette: Palette,
    /// Unit appended to displayed values.
    pub value_unit: String,
    pub thousands_separator: char,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub font_family: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 600.0,
            margin: Margin::default(),
            node_width: 9.0,
            node_spacing: 85.0,
            node_height_factor: 0.5,
            node_opacity: 1.0,
            node_border: 0.0,
            left_justify_origins: false,
            right_justify_endpoints: true,
            flow_opacity: 0.45,
            flow_curvature: 0.5,
            layout_iterations: 25,
            palette: Palette::default(),
            value_unit: "tỷ".to_string(),
            thousands_separator: '.',
            title: None,
            subtitle: None,
            font_family: "Inter, sans-serif".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document; unspecified keys keep their defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    /// Drawable width inside the margins.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Drawable height inside the margins.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("node_width", self.node_width),
            ("node_border", self.node_border),
            ("margin.top", self.margin.top),
            ("margin.right", self.margin.right),
            ("margin.bottom", self.margin.bottom),
            ("margin.left", self.margin.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidNumber { field, value });
            }
        }
        for (field, value, max) in [
            ("node_spacing", self.node_spacing, 100.0),
            ("node_height_factor", self.node_height_factor, 1.0),
            ("node_opacity", self.node_opacity, 1.0),
            ("flow_opacity", self.flow_opacity, 1.0),
        ] {
            if !(0.0..=max).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value,
                    min: 0.0,
                    max,
                });
            }
        }
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(ConfigError::NoDrawableArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
