// CSS-style color strings as used in dashboard configuration

use eyre::{eyre, Result, WrapErr};
use gpui::{Hsla, Rgba};

/// Parses `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` or one of a
/// handful of CSS color names.
pub fn parse_color(input: &str) -> Result<Hsla> {
    let s = input.trim().to_ascii_lowercase();

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).map(Hsla::from);
    }

    if let Some(body) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        let parts = split_components(body)?;
        if parts.len() != 4 {
            return Err(eyre!("rgba() expects 4 components, got {}", parts.len()));
        }
        return Ok(Hsla::from(Rgba {
            r: channel(parts[0])?,
            g: channel(parts[1])?,
            b: channel(parts[2])?,
            a: parts[3].clamp(0.0, 1.0),
        }));
    }

    if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts = split_components(body)?;
        if parts.len() != 3 {
            return Err(eyre!("rgb() expects 3 components, got {}", parts.len()));
        }
        return Ok(Hsla::from(Rgba {
            r: channel(parts[0])?,
            g: channel(parts[1])?,
            b: channel(parts[2])?,
            a: 1.0,
        }));
    }

    named(&s)
        .map(|hex| Hsla::from(gpui::rgb(hex)))
        .ok_or_else(|| eyre!("unknown color {:?}", input))
}

fn parse_hex(hex: &str) -> Result<Rgba> {
    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        n => return Err(eyre!("hex color must have 3 or 6 digits, got {}", n)),
    };
    let value = u32::from_str_radix(&expanded, 16)
        .wrap_err_with(|| format!("invalid hex color #{}", hex))?;
    Ok(gpui::rgb(value))
}

fn split_components(body: &str) -> Result<Vec<f32>> {
    body.split(',')
        .map(|part| {
            part.trim()
                .parse::<f32>()
                .wrap_err_with(|| format!("invalid color component {:?}", part))
        })
        .collect()
}

fn channel(value: f32) -> Result<f32> {
    if !(0.0..=255.0).contains(&value) {
        return Err(eyre!("color channel {} out of range", value));
    }
    Ok(value / 255.0)
}

fn named(name: &str) -> Option<u32> {
    let hex = match name {
        "black" => 0x000000,
        "white" => 0xffffff,
        "red" => 0xff0000,
        "green" => 0x008000,
        "blue" => 0x0000ff,
        "orange" => 0xffa500,
        "gray" | "grey" => 0x808080,
        _ => return None,
    };
    Some(hex)
}

/// Serde adapter reading and writing colors as CSS strings.
pub mod css_color {
    use super::*;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Hsla, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rgba = Rgba::from(*color);
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        serializer.serialize_str(&format!(
            "rgba({}, {}, {}, {})",
            to_byte(rgba.r),
            to_byte(rgba.g),
            to_byte(rgba.b),
            rgba.a
        ))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Hsla, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_color(&raw).map_err(serde::de::Error::custom)
    }
}
