//! WASM bindings for sankey-flow.
//!
//! Exposes `render` and `renderWithOptions` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;

/// Render flow text to SVG with default settings.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    crate::render_flow_text(src, &RenderConfig::default()).map_err(|e| JsError::new(&e.to_string()))
}

/// Render flow text with settings given as a TOML document.
///
/// An empty `config` string means defaults.
#[wasm_bindgen(js_name = "renderWithOptions")]
pub fn render_with_options(src: &str, config: &str) -> Result<String, JsError> {
    let config = if config.trim().is_empty() {
        RenderConfig::default()
    } else {
        RenderConfig::from_toml_str(config).map_err(|e| JsError::new(&e.to_string()))?
    };
    crate::render_flow_text(src, &config).map_err(|e| JsError::new(&e.to_string()))
}
