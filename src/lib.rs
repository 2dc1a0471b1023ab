//! choreboard - display-state and form helpers for a household chore app
//!
//! Pure functions that turn plain records (tasks, quests, store items,
//! members, form values) into what the UI shows, plus the generic collection
//! and timing utilities the screens share.
//!
//! # Architecture
//!
//! - [`core`] - `FieldValue`, `FormData`, the `Record` trait and the error type
//! - [`collections`] - Sorting, grouping, search and pagination
//! - [`timing`] - Debounce and throttle combinators
//! - [`forms`] - Schema-driven form validation and sanitization
//! - [`validators`] - Email, hex color, points and title checks
//! - [`colors`] - Hex parsing, opacity, brightness and contrast
//! - [`cards`] - Avatar, task, quest and store item card state
//! - [`config`] - CLI configuration persistence
//! - [`utils`] - Ids, cloning, casing and XDG directories

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]

pub mod cards;
pub mod collections;
pub mod colors;
pub mod config;
pub mod core;
pub mod forms;
pub mod timing;
pub mod utils;
pub mod validators;

// Re-export commonly used types
pub use core::error::{Error, Result};
pub use core::record::{Record, resolve_first};
pub use core::value::{FieldValue, FormData};
pub use forms::{FieldType, FormField, FormValidationResult};
