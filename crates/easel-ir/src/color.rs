//! Color normalization to 0..1 channel triples.

use easel_scene::Color;
use serde_json::Value;

/// Parses a CSS-flavored color string into a [`Color`].
///
/// Supported forms: `#rgb`, `#rrggbb`, `rgb(...)`, `rgba(...)`.
/// Anything else, including named colors, yields opaque black. Named
/// colors intentionally share the black fallback; there is no name
/// table.
pub fn parse_color(input: &str) -> Color {
    let input = input.trim();
    if let Some(hex) = input.strip_prefix('#') {
        return hex_to_rgb(hex);
    }
    if input.starts_with("rgb") {
        let groups = numeric_groups(input);
        if groups.len() >= 3 {
            let mut color = Color::new(groups[0] / 255.0, groups[1] / 255.0, groups[2] / 255.0);
            // Alpha is already in 0..1 on the wire, no scaling.
            if let Some(alpha) = groups.get(3) {
                color = color.with_alpha(*alpha);
            }
            return color;
        }
    }
    Color::BLACK
}

/// Parses a JSON color value: either a string form accepted by
/// [`parse_color`] or an already-normalized `{r, g, b, a?}` object.
pub fn parse_color_value(value: &Value) -> Color {
    match value {
        Value::String(text) => parse_color(text),
        Value::Object(map) => {
            match (channel(map.get("r")), channel(map.get("g")), channel(map.get("b"))) {
                (Some(r), Some(g), Some(b)) => Color {
                    r,
                    g,
                    b,
                    a: channel(map.get("a")),
                },
                _ => Color::BLACK,
            }
        }
        _ => Color::BLACK,
    }
}

fn channel(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

fn hex_to_rgb(hex: &str) -> Color {
    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };
    if expanded.len() < 6 {
        return Color::BLACK;
    }
    let byte = |range| {
        u8::from_str_radix(&expanded[range], 16)
            .map(|v| v as f64 / 255.0)
            .unwrap_or(0.0)
    };
    Color::new(byte(0..2), byte(2..4), byte(4..6))
}

// Runs of digits and dots, as they appear between the commas of an
// rgb()/rgba() expression.
fn numeric_groups(input: &str) -> Vec<f64> {
    let mut groups = Vec::new();
    let mut current = String::new();
    for ch in input.chars() {
        if ch.is_ascii_digit() || ch == '.' {
            current.push(ch);
        } else if !current.is_empty() {
            if let Ok(value) = current.parse() {
                groups.push(value);
            }
            current.clear();
        }
    }
    if let Ok(value) = current.parse() {
        groups.push(value);
    }
    groups
}
