//! Derived display state for the app's cards
//!
//! Each submodule pairs an entity (as the API serves it) with the pure
//! functions that turn it into labels, colors, icons and action flags.
//!
//! - [`avatar`] - Member avatar initials and sizing
//! - [`task`] - Chore cards
//! - [`quest`] - Quest cards
//! - [`store`] - Reward store items

pub mod avatar;
pub mod quest;
pub mod store;
pub mod task;

use serde::{Deserialize, Serialize};

/// Member references that the API sends either as one id or a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberRefs {
    One(String),
    Many(Vec<String>),
}

impl MemberRefs {
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Self::One(id) => vec![id.as_str()],
            Self::Many(ids) => ids.iter().map(String::as_str).collect(),
        }
    }

    pub fn contains(&self, member_id: &str) -> bool {
        self.ids().contains(&member_id)
    }
}

/// Visual treatment for an entity status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStyle {
    pub color: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_refs_from_json() {
        let one: MemberRefs = serde_json::from_str(r#""m1""#).unwrap();
        let many: MemberRefs = serde_json::from_str(r#"["m1", "m2"]"#).unwrap();
        assert_eq!(one.ids(), ["m1"]);
        assert!(many.contains("m2"));
        assert!(!one.contains("m2"));
    }
}
