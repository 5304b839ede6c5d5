//! Content-bearing field that may be replaced by a tombstone.
//!
//! Once an aggregate is soft-deleted its content fields become
//! [`Field::Tombstone`]. A tombstone carries no data, equals only another
//! tombstone of the same field type, and never equals a populated value.

use std::any::{type_name, Any};
use std::fmt::Debug;

use crate::value_object::ValueObject;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Present(T),
    Tombstone,
}

impl<T> Field<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Field::Tombstone)
    }

    /// The populated value, `None` once tombstoned
    pub fn as_present(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Tombstone => None,
        }
    }

    pub fn into_present(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Tombstone => None,
        }
    }

    /// Render the value, or `fallback` for a tombstone
    pub fn map_or<U>(&self, fallback: U, f: impl FnOnce(&T) -> U) -> U {
        match self {
            Field::Present(value) => f(value),
            Field::Tombstone => fallback,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Present(value)
    }
}

impl<T: Any + Debug> ValueObject for Field<T> {
    fn kind(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
