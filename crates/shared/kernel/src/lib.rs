//! Shared kernel - Value objects, identifiers and entity lifecycle.
//!
//! This crate holds the invariant-enforcing building blocks used by both
//! bounded contexts (item map and user information). It has no
//! infrastructure dependencies and performs no I/O.
//!
//! - **value_object**: type-checked equality contract
//! - **unique_id / id_translator**: canonical identifiers and their
//!   hyphenated external form
//! - **text**: shared free-text validation policy
//! - **field**: tombstone representation for soft-deleted content
//! - **entity**: lifecycle timestamps, soft-delete flag, update hook

pub mod constants;
pub mod entity;
pub mod error;
pub mod field;
pub mod id_translator;
pub mod json;
pub mod text;
pub mod unique_id;
pub mod value_object;

pub use constants::*;
pub use entity::{display_timestamp, parse_timestamp, Entity, Lifecycle};
pub use error::{DomainError, DomainResult, RangeViolation};
pub use field::Field;
pub use id_translator::IdTranslator;
pub use text::{is_blank, normalize_line_endings, TextPolicy};
pub use unique_id::UniqueId;
pub use value_object::{ValueEquality, ValueObject};
