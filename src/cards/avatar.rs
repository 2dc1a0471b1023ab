//! Member avatar helpers

use crate::colors::DEFAULT_GRAY;
use serde::Serialize;

/// Shown when a member has no usable name
pub const PLACEHOLDER_INITIAL: &str = "?";

/// Computed style for a circular avatar
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarStyles {
    pub background_color: String,
    pub width: u32,
    pub height: u32,
    pub border_radius: f64,
    pub font_size: u32,
}

/// First letter of the trimmed name, upper-cased.
pub fn initials(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| PLACEHOLDER_INITIAL.to_string(), |c| c.to_uppercase().collect())
}

/// Style for an avatar of diameter `size` pixels.
///
/// The font is 40% of the diameter, rounded down.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn avatar_styles(color: &str, size: u32) -> AvatarStyles {
    let background_color = if color.is_empty() {
        DEFAULT_GRAY
    } else {
        color
    };

    AvatarStyles {
        background_color: background_color.to_string(),
        width: size,
        height: size,
        border_radius: f64::from(size) / 2.0,
        font_size: (f64::from(size) * 0.4).floor() as u32,
    }
}
