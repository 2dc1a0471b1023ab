//! Schema-driven form validation
//!
//! A form is described by an ordered list of [`FormField`] descriptors and
//! its current values live in a [`FormData`] map. Validation never fails
//! outright: every problem becomes a per-field message in
//! [`FormValidationResult`], at most one per field.

use crate::core::error::{Error, Result};
use crate::core::record::Record;
use crate::core::value::{FieldValue, FormData};
use crate::validators::{is_valid_email, is_valid_hex_color};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Input kind of a form field
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Textarea,
    Select,
    Email,
    Color,
}

/// One choice of a `select` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: FieldValue,
}

/// Descriptor for a single form input.
///
/// `min`/`max` are value bounds for `number` fields and character-count
/// bounds for `text`/`textarea` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FieldValue>,
}

impl FormField {
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            required: false,
            placeholder: None,
            options: Vec::new(),
            min: None,
            max: None,
            pattern: None,
            default_value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_option(mut self, label: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.options.push(SelectOption {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    fn compile_pattern(&self) -> Option<Result<Regex>> {
        self.pattern.as_deref().map(|pattern| {
            Regex::new(pattern).map_err(|e| Error::InvalidPattern {
                field: self.name.clone(),
                message: e.to_string(),
            })
        })
    }
}

/// Outcome of [`validate_form`]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl FormValidationResult {
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Validates `values` against `fields` in declaration order.
///
/// Per field: a blank required value reports "`<label>` is required"; a
/// falsy optional value (see [`FieldValue::is_falsy`]) is accepted as-is;
/// anything else is checked by type.
/// The first failing rule is the one reported.
pub fn validate_form(values: &FormData, fields: &[FormField]) -> FormValidationResult {
    let mut errors = BTreeMap::new();

    for field in fields {
        let value = values.field(&field.name);
        if let Some(message) = validate_field(field, &value) {
            errors.entry(field.name.clone()).or_insert(message);
        }
    }

    if !errors.is_empty() {
        tracing::debug!(fields = errors.len(), "Form validation failed");
    }

    FormValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Checks a single value against its descriptor.
pub fn validate_field(field: &FormField, value: &FieldValue) -> Option<String> {
    let label = &field.label;

    if field.required && value.is_blank() {
        return Some(format!("{label} is required"));
    }

    if value.is_falsy() {
        return None;
    }

    match field.field_type {
        FieldType::Number => validate_number(field, value),
        FieldType::Email => {
            (!is_valid_email(&value.to_string())).then(|| format!("{label} must be a valid email"))
        }
        FieldType::Text | FieldType::Textarea => validate_text(field, &value.to_string()),
        FieldType::Color => (!is_valid_hex_color(&value.to_string()))
            .then(|| format!("{label} must be a valid hex color")),
        FieldType::Select => None,
    }
}

fn validate_number(field: &FormField, value: &FieldValue) -> Option<String> {
    let label = &field.label;

    let Some(number) = value.as_number() else {
        return Some(format!("{label} must be a number"));
    };

    if let Some(min) = field.min
        && number < min
    {
        return Some(format!("{label} must be at least {min}"));
    }
    if let Some(max) = field.max
        && number > max
    {
        return Some(format!("{label} must be at most {max}"));
    }

    None
}

#[allow(clippy::cast_precision_loss)]
fn validate_text(field: &FormField, text: &str) -> Option<String> {
    let label = &field.label;
    let len = text.chars().count() as f64;

    if let Some(min) = field.min
        && len < min
    {
        return Some(format!("{label} must be at least {min} characters"));
    }
    if let Some(max) = field.max
        && len > max
    {
        return Some(format!("{label} must be at most {max} characters"));
    }

    match field.compile_pattern() {
        Some(Ok(regex)) if !regex.is_match(text) => Some(format!("{label} format is invalid")),
        Some(Err(e)) => {
            tracing::warn!("{e}");
            Some(format!("{label} format is invalid"))
        }
        _ => None,
    }
}

/// Up-front schema check: unique names and compilable patterns.
///
/// # Errors
///
/// Returns [`Error::DuplicateField`] or [`Error::InvalidPattern`] for the
/// first offending field.
pub fn check_schema(fields: &[FormField]) -> Result<()> {
    let mut seen = HashSet::new();
    for field in fields {
        if !seen.insert(field.name.as_str()) {
            return Err(Error::DuplicateField(field.name.clone()));
        }
        if let Some(compiled) = field.compile_pattern() {
            compiled?;
        }
    }
    Ok(())
}

/// Normalizes values before submission.
///
/// Every declared field gets a value: missing ones become `""`. Numbers are
/// coerced, text-like fields are trimmed, everything else passes through.
/// Number inputs that do not parse are kept verbatim so validation can
/// still reject them.
pub fn sanitize_form_data(values: &FormData, fields: &[FormField]) -> FormData {
    fields
        .iter()
        .map(|field| {
            let value = values.field(&field.name);
            let sanitized = match (field.field_type, value) {
                (_, FieldValue::Unset) => FieldValue::Text(String::new()),
                (FieldType::Number, value) => match value.as_number() {
                    Some(number) => FieldValue::Number(number),
                    None => {
                        tracing::debug!(field = %field.name, "Leaving unparsable number as-is");
                        value
                    }
                },
                (FieldType::Text | FieldType::Textarea | FieldType::Email, value) => {
                    FieldValue::Text(value.to_string().trim().to_string())
                }
                (FieldType::Select | FieldType::Color, value) => value,
            };
            (field.name.clone(), sanitized)
        })
        .collect()
}

/// Starting values for a fresh form.
///
/// Explicit defaults win. Otherwise number fields start at their minimum
/// (or 0), selects at their first option, and everything else empty.
pub fn get_initial_form_data(fields: &[FormField]) -> FormData {
    fields
        .iter()
        .map(|field| {
            let value = field.default_value.clone().unwrap_or_else(|| match field.field_type {
                FieldType::Number => FieldValue::Number(field.min.unwrap_or(0.0)),
                FieldType::Select => field
                    .options
                    .first()
                    .map_or_else(|| FieldValue::Text(String::new()), |opt| opt.value.clone()),
                _ => FieldValue::Text(String::new()),
            });
            (field.name.clone(), value)
        })
        .collect()
}

/// Whether any value in `current` differs from `initial`.
///
/// Two numbers compare numerically; anything else compares by its string
/// form, so `5` and `"5"` count as unchanged. A key that `initial` lacks
/// counts as changed unless it is also unset in `current`.
pub fn has_form_changes(current: &FormData, initial: &FormData) -> bool {
    current.iter().any(|(key, value)| {
        let original = initial.field(key);
        match (value, &original) {
            (FieldValue::Unset, FieldValue::Unset) => false,
            (_, FieldValue::Unset) | (FieldValue::Unset, _) => true,
            (FieldValue::Number(a), FieldValue::Number(b)) => a != b,
            _ => value.to_string() != original.to_string(),
        }
    })
}

/// Modal size presets
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModalVariant {
    Small,
    #[default]
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalSize {
    pub max_width: u32,
    pub padding: u32,
}

impl ModalVariant {
    pub fn size(self) -> ModalSize {
        match self {
            Self::Small => ModalSize {
                max_width: 400,
                padding: 16,
            },
            Self::Medium => ModalSize {
                max_width: 600,
                padding: 24,
            },
            Self::Large => ModalSize {
                max_width: 800,
                padding: 32,
            },
        }
    }
}

/// Size for a variant name, falling back to medium for unknown names.
pub fn modal_size(variant: &str) -> ModalSize {
    variant
        .parse::<ModalVariant>()
        .unwrap_or_default()
        .size()
}
