//! Hex color helpers for profile colors and card accents

use crate::validators::is_valid_hex_color;
use serde::{Deserialize, Serialize};

/// Fallback for missing or malformed profile colors
pub const DEFAULT_GRAY: &str = "#808080";

pub const TEXT_ON_LIGHT: &str = "#000000";
pub const TEXT_ON_DARK: &str = "#FFFFFF";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Perceived luminance in `[0, 1]` (ITU-R BT.601 weights).
    pub fn luminance(self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parses a 6-digit hex color, with or without the leading `#`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Appends a two-digit alpha channel to a 6-digit hex color.
///
/// `opacity` is clamped to `[0, 1]`. Colors that do not parse are returned
/// unchanged.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn add_opacity(hex: &str, opacity: f64) -> String {
    if hex_to_rgb(hex).is_none() {
        return hex.to_string();
    }
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("{hex}{alpha:02x}")
}

/// Moves each channel `percent` of the way toward white.
///
/// Negative percentages darken. Colors that do not parse are returned
/// unchanged.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn adjust_brightness(hex: &str, percent: f64) -> String {
    let Some(rgb) = hex_to_rgb(hex) else {
        return hex.to_string();
    };

    let adjust = |value: u8| {
        let value = f64::from(value);
        (value + (255.0 - value) * (percent / 100.0))
            .round()
            .clamp(0.0, 255.0) as u8
    };

    Rgb {
        r: adjust(rgb.r),
        g: adjust(rgb.g),
        b: adjust(rgb.b),
    }
    .to_hex()
}

/// Returns `color` if it is a valid hex color, otherwise [`DEFAULT_GRAY`].
pub fn validate_color(color: &str) -> &str {
    if is_valid_hex_color(color) {
        color
    } else {
        DEFAULT_GRAY
    }
}

/// Black text for light backgrounds, white for dark ones.
///
/// Backgrounds that do not parse as 6-digit hex get white text.
pub fn contrasting_text_color(background: &str) -> &'static str {
    match hex_to_rgb(background) {
        Some(rgb) if rgb.luminance() > 0.5 => TEXT_ON_LIGHT,
        _ => TEXT_ON_DARK,
    }
}
