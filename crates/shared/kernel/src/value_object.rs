//! Value object equality contract.
//!
//! Value objects compare structurally through `PartialEq`. When two values
//! meet behind `&dyn ValueObject` (e.g. an `ItemId` against a `MapId`), the
//! comparison goes through [`ValueEquality::equals`], which refuses to
//! compare different concrete types instead of answering `false`.

use std::any::{type_name, Any};
use std::fmt::Debug;

use crate::error::{DomainError, DomainResult};

/// Immutable, self-validating value.
pub trait ValueObject: Any + Debug {
    /// Concrete type name, used in type mismatch reports
    fn kind(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Upcast for checked downcasting during comparison
    fn as_any(&self) -> &dyn Any;
}

/// Type-checked structural equality for value objects.
pub trait ValueEquality: ValueObject + PartialEq + Sized {
    /// Compare against another value object.
    ///
    /// # Errors
    /// Returns `DomainError::TypeMismatch` if `other` is a different
    /// concrete type.
    fn equals(&self, other: &dyn ValueObject) -> DomainResult<bool> {
        match other.as_any().downcast_ref::<Self>() {
            Some(other) => Ok(self == other),
            None => Err(DomainError::type_mismatch(self.kind(), other.kind())),
        }
    }
}

impl<T: ValueObject + PartialEq> ValueEquality for T {}

/// Implement [`ValueObject`] for a concrete type.
#[macro_export]
macro_rules! value_object {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ValueObject for $ty {
                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }
            }
        )+
    };
}
