//! Core data model shared by every helper module
//!
//! - [`value`] - The [`FieldValue`](value::FieldValue) tagged union and `FormData`
//! - [`record`] - Named field access used by the collection helpers
//! - [`error`] - Crate error type

pub mod error;
pub mod record;
pub mod value;
