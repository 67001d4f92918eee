//! Text and color helpers shared by the renderers.

/// Round to the nearest integer (halves up) and group thousands with `sep`.
///
/// Non-finite values render as `"0"`.
pub fn format_rounded(value: f64, sep: char) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value + 0.5).floor();
    if rounded == 0.0 {
        return "0".to_string();
    }
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

/// Escape text for use in SVG content and attribute values.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Darken a `#rgb` / `#rrggbb` color by `0.7^k`, returned as `rgb(r, g, b)`.
///
/// Anything that is not a hex color is returned unchanged.
pub fn darker(color: &str, k: f64) -> String {
    let Some((r, g, b)) = parse_hex(color) else {
        return color.to_string();
    };
    let f = 0.7_f64.powf(k);
    let ch = |c: u8| (c as f64 * f).round().clamp(0.0, 255.0) as u8;
    format!("rgb({}, {}, {})", ch(r), ch(g), ch(b))
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((nib(0)?, nib(1)?, nib(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_format.rs"]
mod tests;
