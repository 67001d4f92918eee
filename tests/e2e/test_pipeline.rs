//! Library-level tests: flow text in, SVG out, through the public API only.

use std::fs;
use std::path::PathBuf;

use sankey_flow::config::palette_preset;
use sankey_flow::renderers::TextAnchor;
use sankey_flow::{
    RenderConfig, Renderer, SankeyError, SankeyRenderer, StageLayout, SvgRenderer, render_flow_text,
};

fn demos_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("demos");
    path
}

const SAMPLE: &str = "A [10] B\nA [5] C\nB [10] D\n";

// ─── SVG output ─────────────────────────────────────────────────────────────

#[test]
fn test_sample_renders_svg() {
    let svg = render_flow_text(SAMPLE, &RenderConfig::default()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<path ").count(), 3);
    assert_eq!(svg.matches("<rect ").count(), 4);
    assert!(svg.contains(">15 tỷ</text>"));
}

#[test]
fn test_no_valid_lines_renders_nothing() {
    let src = "just some text\nA [0] B\n// a comment\n";
    assert_eq!(render_flow_text(src, &RenderConfig::default()).unwrap(), "");
    assert_eq!(render_flow_text("", &RenderConfig::default()).unwrap(), "");
}

#[test]
fn test_same_input_same_output() {
    let config = RenderConfig::default();
    let a = render_flow_text(SAMPLE, &config).unwrap();
    let b = render_flow_text(SAMPLE, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_invalid_config_is_an_error() {
    let config = RenderConfig {
        width: 100.0,
        ..RenderConfig::default()
    };
    let err = render_flow_text(SAMPLE, &config).unwrap_err();
    assert!(matches!(err, SankeyError::Config(_)));
}

// ─── Demo files ─────────────────────────────────────────────────────────────

#[test]
fn test_budget_demo() {
    let src = fs::read_to_string(demos_dir().join("budget.flow")).unwrap();
    let config = RenderConfig::load(&demos_dir().join("budget.toml")).unwrap();
    assert_eq!(config.value_unit, "k");

    let out = SankeyRenderer::new(StageLayout).render(&src, &config).unwrap();
    assert!(out.diagnostics.is_empty());
    assert_eq!(out.diagram.nodes.len(), 10);
    assert_eq!(out.diagram.flows.len(), 9);

    let budget = out
        .diagram
        .nodes
        .iter()
        .find(|n| n.label.name == "Budget")
        .unwrap();
    assert_eq!(budget.label.value_text, "1,750 k");

    // Both income sources are origins: label on the left, anchored at the end.
    for name in ["Wages", "Side gig"] {
        let node = out.diagram.nodes.iter().find(|n| n.label.name == name).unwrap();
        assert_eq!(node.label.placement.anchor, TextAnchor::End);
    }

    let svg = SvgRenderer.render(&out.diagram);
    assert!(svg.contains(">Household budget</text>"));
}

#[test]
fn test_palette_preset_colors_used() {
    let config = RenderConfig {
        palette: palette_preset("tableau").unwrap(),
        ..RenderConfig::default()
    };
    let out = SankeyRenderer::new(StageLayout).render(SAMPLE, &config).unwrap();
    for node in &out.diagram.nodes {
        assert!(config.palette.contains(&node.color), "{}", node.color);
    }
}

#[test]
fn test_unknown_palette_preset() {
    let err = palette_preset("neon").unwrap_err();
    assert_eq!(
        err.to_string(),
        "unknown palette preset 'neon'; available: default, tableau, slate"
    );
}
