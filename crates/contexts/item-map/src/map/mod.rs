//! Map aggregate: a titled relation graph over items.

mod aggregate;
mod factory;
mod fields;
mod relation;
mod repository;

pub use aggregate::Map;
pub use factory::{MapFactory, NewMap, RestoreDeletedMap, RestoreMap};
pub use fields::{MapId, MapTitle};
pub use relation::{Connection, ConnectionInput, Relation};
pub use repository::MapRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockMapRepository;
