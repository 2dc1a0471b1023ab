//! General-purpose helpers: ids, cloning, equality, word casing, and the
//! XDG directories used by the CLI.
//!
//! # Directory Structure
//!
//! - Data: `~/.local/share/choreboard/` - Configuration file
//! - State: `~/.local/state/choreboard/` - Log file
//!
//! # Example
//!
//! ```
//! use choreboard::utils::{capitalize, pluralize};
//!
//! assert_eq!(capitalize("hELLO"), "Hello");
//! assert_eq!(pluralize(2, "chore", None), "chores");
//! ```

use crate::core::error::Result;
use crate::core::value::FormData;
use directories::ProjectDirs;
use rand::Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

pub fn get_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "choreboard", "choreboard").map(|pd| pd.data_dir().to_path_buf())
}

pub fn get_state_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "choreboard", "choreboard")
        .and_then(|pd| pd.state_dir().map(std::path::Path::to_path_buf))
}

pub fn ensure_dirs() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use std::fs::DirBuilder;
        use std::os::unix::fs::DirBuilderExt;

        let mut builder = DirBuilder::new();
        builder.mode(0o700); // User read/write/execute only
        builder.recursive(true);

        if let Some(dir) = get_data_dir() {
            builder.create(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            builder.create(dir)?;
        }
    }

    #[cfg(not(unix))]
    {
        if let Some(dir) = get_data_dir() {
            std::fs::create_dir_all(dir)?;
        }
        if let Some(dir) = get_state_dir() {
            std::fs::create_dir_all(dir)?;
        }
    }

    Ok(())
}

/// Deep copy through a JSON round trip.
///
/// Only what survives serde_json survives the clone: skipped fields come
/// back as their defaults and non-finite floats become `null`.
///
/// # Errors
///
/// Returns [`Error::Serialization`](crate::Error::Serialization) if the value
/// does not serialize or the JSON form does not deserialize back into `T`.
pub fn deep_clone<T: Serialize + DeserializeOwned>(value: &T) -> Result<T> {
    let json = serde_json::to_value(value)?;
    Ok(serde_json::from_value(json)?)
}

/// One-level equality: same keys, and each key maps to an equal value.
pub fn shallow_equal(a: &FormData, b: &FormData) -> bool {
    a.len() == b.len() && a.iter().all(|(key, value)| b.get(key) == Some(value))
}

/// Probabilistically unique id: `<unix millis>-<9 base36 chars>`.
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect();
    format!("{}-{suffix}", chrono::Utc::now().timestamp_millis())
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Picks the singular form for a count of exactly one.
///
/// Falls back to appending `s` when no (non-empty) plural is given.
pub fn pluralize(count: usize, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        return singular.to_string();
    }
    match plural {
        Some(plural) if !plural.is_empty() => plural.to_string(),
        _ => format!("{singular}s"),
    }
}

const ELLIPSIS: &str = "...";

/// Shortens `s` to at most `max_chars` characters, ending in `...` when cut.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = s.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::value::FieldValue;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Reward {
        name: String,
        cost: u32,
        #[serde(skip)]
        cached_label: Option<String>,
    }

    #[test]
    fn test_deep_clone_round_trip() {
        let original = serde_json::json!({"a": [1, 2, {"b": "c"}]});
        let cloned = deep_clone(&original).unwrap();
        assert_eq!(cloned, original);
    }

    #[test]
    fn test_deep_clone_drops_unserialized_fields() {
        let reward = Reward {
            name: "Movie night".to_string(),
            cost: 50,
            cached_label: Some("50 pts".to_string()),
        };
        let cloned = deep_clone(&reward).unwrap();
        assert_eq!(cloned.name, "Movie night");
        assert_eq!(cloned.cost, 50);
        assert_eq!(cloned.cached_label, None);
    }

    #[test]
    fn test_shallow_equal() {
        let mut a = FormData::new();
        a.insert("title".into(), FieldValue::text("Dishes"));
        a.insert("points".into(), FieldValue::Number(5.0));
        let mut b = a.clone();
        assert!(shallow_equal(&a, &b));

        b.insert("points".into(), FieldValue::text("5"));
        assert!(!shallow_equal(&a, &b));

        b.remove("points");
        assert!(!shallow_equal(&a, &b));
    }

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        let (millis, suffix) = id.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 9);
        assert!(suffix.bytes().all(|b| ID_ALPHABET.contains(&b)));
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("hELLO wORLD"), "Hello world");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "point", None), "point");
        assert_eq!(pluralize(0, "point", None), "points");
        assert_eq!(pluralize(3, "child", Some("children")), "children");
        assert_eq!(pluralize(3, "task", Some("")), "tasks");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("a longer label", 8), "a lon...");
        assert_eq!(truncate_string("Müll rausbringen", 7), "Müll...");
        assert_eq!(truncate_string("abcdef", 2), "...");
    }
}
