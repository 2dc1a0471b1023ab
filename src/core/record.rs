//! Named field access over heterogeneous records
//!
//! Collection helpers (sorting, grouping, searching) address fields by name.
//! Anything that can hand out a [`FieldValue`] for a name implements [`Record`].

use super::value::{FieldValue, FormData};

pub trait Record {
    /// Value of the named field, or [`FieldValue::Unset`] if the record has none.
    fn field(&self, name: &str) -> FieldValue;
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> FieldValue {
        (**self).field(name)
    }
}

impl Record for FormData {
    fn field(&self, name: &str) -> FieldValue {
        self.get(name).cloned().unwrap_or_default()
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> FieldValue {
        self.get(name).map(FieldValue::from).unwrap_or_default()
    }
}

impl Record for serde_json::Value {
    fn field(&self, name: &str) -> FieldValue {
        self.as_object()
            .map(|obj| obj.field(name))
            .unwrap_or_default()
    }
}

/// Returns the first truthy value among several alternate field names.
///
/// Entities that were renamed across schema versions (`pointsValue` vs
/// `rewardValue`, `_id` vs `id`) resolve through this instead of ad-hoc
/// fallback chains. Falsy values (see [`FieldValue::is_falsy`]) fall through
/// to the next name, so a `pointsValue` of 0 defers to `value`. Returns
/// [`FieldValue::Unset`] when none are truthy.
pub fn resolve_first<R: Record + ?Sized>(record: &R, names: &[&str]) -> FieldValue {
    names
        .iter()
        .map(|name| record.field(name))
        .find(|value| !value.is_falsy())
        .unwrap_or_default()
}
