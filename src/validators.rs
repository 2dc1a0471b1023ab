//! Input validation for chore, reward and profile data
//!
//! The `validate_*` functions return the normalized value or a user-facing
//! message; the `is_valid_*` predicates wrap them for callers that only need
//! a yes/no answer.

use regex::Regex;
use std::sync::LazyLock;

/// Largest point value a single task or quest may award.
pub const MAX_POINTS: u32 = 1000;

/// Task title length bounds, counted after trimming.
pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;

// `local@domain.tld` shape only; not RFC 5322.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// `#RGB` or `#RRGGBB`.
static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$")
        .expect("HEX_COLOR_REGEX: invalid regex pattern")
});

/// Checks an email address has the `local@domain.tld` shape.
///
/// # Examples
///
/// ```
/// use choreboard::validators::is_valid_email;
///
/// assert!(is_valid_email("parent@example.com"));
/// assert!(!is_valid_email("parent@localhost"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Checks a color is `#` followed by 3 or 6 hex digits.
///
/// # Examples
///
/// ```
/// use choreboard::validators::is_valid_hex_color;
///
/// assert!(is_valid_hex_color("#ABC"));
/// assert!(!is_valid_hex_color("#12345"));
/// assert!(!is_valid_hex_color("red"));
/// ```
pub fn is_valid_hex_color(color: &str) -> bool {
    HEX_COLOR_REGEX.is_match(color)
}

/// Validates a point value for a task or quest.
///
/// # Errors
///
/// Returns `Err` if the value is not a whole number in `1..=1000`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn validate_points(points: f64) -> Result<u32, String> {
    if points.fract() != 0.0 || !points.is_finite() {
        return Err("Points must be a whole number".to_string());
    }
    if points < 1.0 || points > f64::from(MAX_POINTS) {
        return Err(format!("Points must be between 1 and {MAX_POINTS}"));
    }
    Ok(points as u32)
}

pub fn is_valid_points(points: f64) -> bool {
    validate_points(points).is_ok()
}

/// Validates and trims a task title.
///
/// # Errors
///
/// Returns `Err` if the trimmed title is shorter than 3 or longer than 100
/// characters.
pub fn validate_task_title(title: &str) -> Result<String, String> {
    let trimmed = title.trim();
    let len = trimmed.chars().count();

    if len < TITLE_MIN_CHARS {
        return Err(format!("Title too short (min {TITLE_MIN_CHARS} characters)"));
    }
    if len > TITLE_MAX_CHARS {
        return Err(format!("Title too long (max {TITLE_MAX_CHARS} characters)"));
    }

    Ok(trimmed.to_string())
}

pub fn is_valid_task_title(title: &str) -> bool {
    validate_task_title(title).is_ok()
}
