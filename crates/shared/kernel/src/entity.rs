//! Entity lifecycle: timestamps, soft-delete flag and the update hook.

use chrono::{DateTime, Duration, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::constants::{DISPLAY_DATE_FORMAT, DISPLAY_UTC_OFFSET_SECONDS};
use crate::error::{DomainError, DomainResult, RangeViolation};

/// Naive layouts accepted for persisted timestamps (taken as UTC).
const NAIVE_TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Timestamps and soft-delete state shared by every aggregate.
///
/// `updated_at >= created_at` holds at all times. `deleted_at` equals
/// `created_at` until an actual deletion is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifecycle {
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: DateTime<Utc>,
    is_deleted: bool,
}

impl Lifecycle {
    /// Lifecycle of a freshly created aggregate.
    pub fn start() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            deleted_at: now,
            is_deleted: false,
        }
    }

    /// Rehydrate a persisted lifecycle.
    ///
    /// # Errors
    /// Returns `DomainError::Range` if `updated_at` precedes `created_at`.
    pub fn restore(
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: DateTime<Utc>,
        is_deleted: bool,
    ) -> DomainResult<Self> {
        if updated_at < created_at {
            return Err(DomainError::range("updated_at", RangeViolation::OutOfOrder));
        }
        Ok(Self {
            created_at,
            updated_at,
            deleted_at,
            is_deleted,
        })
    }

    /// Rehydrate a persisted lifecycle from timestamp strings.
    pub fn restore_from_strings(
        created_at: &str,
        updated_at: &str,
        deleted_at: &str,
        is_deleted: bool,
    ) -> DomainResult<Self> {
        Self::restore(
            parse_timestamp("created_at", created_at)?,
            parse_timestamp("updated_at", updated_at)?,
            parse_timestamp("deleted_at", deleted_at)?,
            is_deleted,
        )
    }

    /// The same timestamps with the soft-delete flag set.
    pub fn into_deleted(self) -> Self {
        Self {
            is_deleted: true,
            ..self
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> DateTime<Utc> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Check that a mutation may proceed: the operator must own the
    /// aggregate, and the aggregate must not be soft-deleted. Ownership is
    /// checked first.
    ///
    /// # Errors
    /// `DomainError::Authorization` or `DomainError::AlreadyDeleted`.
    pub fn guard_mutation(&self, is_owner: bool, aggregate: &'static str) -> DomainResult<()> {
        if !is_owner {
            return Err(DomainError::Authorization);
        }
        if self.is_deleted {
            return Err(DomainError::AlreadyDeleted(aggregate));
        }
        Ok(())
    }

    /// Advance `updated_at` to now. Always moves forward, even when the
    /// clock has not ticked since the previous update.
    pub fn touch(&mut self) {
        let now = Utc::now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/// Identity-bearing domain object.
pub trait Entity {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;

    fn lifecycle(&self) -> &Lifecycle;

    fn is_deleted(&self) -> bool {
        self.lifecycle().is_deleted()
    }

    /// Entities are the same when their identifiers are equal
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Parse a persisted UTC timestamp (RFC 3339, or a naive
/// `YYYY-MM-DD HH:MM:SS[.fff]` taken as UTC).
///
/// # Errors
/// Returns `DomainError::Format` naming `field` when no layout matches.
pub fn parse_timestamp(field: &'static str, value: &str) -> DomainResult<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| DomainError::format(field, format!("'{}' is not a timestamp", value)))
}

/// Render a timestamp in the fixed display offset and format.
pub fn display_timestamp(timestamp: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECONDS) {
        Some(offset) => timestamp.with_timezone(&offset).format(DISPLAY_DATE_FORMAT).to_string(),
        None => timestamp.format(DISPLAY_DATE_FORMAT).to_string(),
    }
}
