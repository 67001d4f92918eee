use super::*;

#[test]
fn test_defaults() {
    let c = RenderConfig::default();
    assert_eq!(c.width, 1100.0);
    assert_eq!(c.height, 600.0);
    assert_eq!(c.inner_width(), 660.0);
    assert_eq!(c.inner_height(), 460.0);
    assert_eq!(c.palette.len(), 10);
    assert_eq!(c.palette.fallback(), "#94a3b8");
    assert!(c.right_justify_endpoints);
    assert!(!c.left_justify_origins);
    assert!(c.validate().is_ok());
}

#[test]
fn test_palette_cycles() {
    let p = Palette::new(["#a", "#b", "#c"]).unwrap();
    assert_eq!(p.color(0), "#a");
    assert_eq!(p.color(4), "#b");
    assert_eq!(p.fallback(), "#c");
    assert!(p.contains("#b"));
    assert!(!p.contains("#d"));
}

#[test]
fn test_empty_palette_rejected() {
    let err = Palette::new(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyPalette));
}

#[test]
fn test_from_toml_partial() {
    let c = RenderConfig::from_toml_str(
        r##"
width = 900
flow_curvature = 0.3
palette = ["#111111", "#222222"]
thousands_separator = ","
value_unit = "USD"

[margin]
left = 100
"##,
    )
    .unwrap();
    assert_eq!(c.width, 900.0);
    assert_eq!(c.flow_curvature, 0.3);
    assert_eq!(c.palette.colors(), &["#111111".to_string(), "#222222".to_string()]);
    assert_eq!(c.thousands_separator, ',');
    assert_eq!(c.value_unit, "USD");
    assert_eq!(c.margin.left, 100.0);
    assert_eq!(c.margin.right, 220.0);
    assert_eq!(c.height, 600.0);
}

#[test]
fn test_from_toml_empty_palette_rejected() {
    assert!(RenderConfig::from_toml_str("palette = []").is_err());
}

#[test]
fn test_from_toml_unknown_syntax_rejected() {
    let err = RenderConfig::from_toml_str("width = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_validate_opacity_range() {
    let c = RenderConfig {
        flow_opacity: 1.5,
        ..RenderConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::OutOfRange {
            field: "flow_opacity",
            ..
        })
    ));
}

#[test]
fn test_validate_no_drawable_area() {
    let c = RenderConfig {
        width: 400.0,
        ..RenderConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::NoDrawableArea { .. })
    ));
}

#[test]
fn test_validate_rejects_nan() {
    let c = RenderConfig {
        node_width: f64::NAN,
        ..RenderConfig::default()
    };
    assert!(matches!(
        c.validate(),
        Err(ConfigError::InvalidNumber {
            field: "node_width",
            ..
        })
    ));
}

#[test]
fn test_palette_preset_lookup() {
    let p = palette_preset("Tableau").unwrap();
    assert_eq!(p.color(0), "#4e79a7");
    let err = palette_preset("neon").unwrap_err();
    assert!(err.to_string().contains("default, tableau, slate"));
}

#[test]
fn test_palette_presets_default_selected() {
    let presets = palette_presets();
    assert_eq!(presets.selected().name, "default");
    assert_eq!(presets.options().len(), PALETTE_PRESETS.len());
}
