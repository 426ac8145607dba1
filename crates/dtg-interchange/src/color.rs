//! RGBA <-> hex conversion for native color values.
//!
//! Native documents carry colors as 0-1 float channels; the graph stores
//! uppercase 6-digit hex. Alpha survives parsing but is dropped on the hex
//! side.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbaColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl RgbaColor {
    pub fn opaque_black() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

/// Render 0-1 float channels as uppercase `#RRGGBB`, rounding each channel
/// to the nearest of 0-255.
pub fn rgba_to_hex(color: &RgbaColor) -> String {
    format!(
        "#{:02X}{:02X}{:02X}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into float channels.
pub fn hex_to_rgba(hex: &str) -> Option<RgbaColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 && digits.len() != 8 {
        return None;
    }
    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(digits.get(range)?, 16)
            .ok()
            .map(|byte| f64::from(byte) / 255.0)
    };
    Some(RgbaColor {
        r: parse(0..2)?,
        g: parse(2..4)?,
        b: parse(4..6)?,
        a: if digits.len() == 8 { parse(6..8)? } else { 1.0 },
    })
}
