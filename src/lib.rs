//! sankey-flow: flow text to colored, labeled Sankey diagram renderer.
//!
//! Public API: [`render_flow_text`] for the common case, [`SankeyRenderer`]
//! to plug in another layout engine or inspect the built [`Diagram`].
//!
//! ```text
//! Wages [1500] Budget
//! Budget [450] Taxes
//! Budget [1050] Spending
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod layout;
pub mod parsers;
pub mod pipeline;
pub mod renderers;
pub mod selection;
pub mod syntax;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::{Palette, RenderConfig};
pub use error::{ConfigError, LayoutError, SankeyError};
pub use layout::{LayoutAdapter, StageLayout};
pub use pipeline::{RenderOutput, SankeyRenderer};
pub use renderers::{Diagram, Renderer, SvgRenderer};

/// Render flow text to an SVG document using the built-in stage layout.
///
/// Input without any valid flow line renders as an empty string.
pub fn render_flow_text(src: &str, config: &RenderConfig) -> Result<String, SankeyError> {
    let out = SankeyRenderer::new(StageLayout).render(src, config)?;
    Ok(SvgRenderer.render(&out.diagram))
}
