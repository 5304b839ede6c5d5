//! Item aggregate and its value objects.

mod aggregate;
mod factory;
mod fields;
mod repository;

pub use aggregate::Item;
pub use factory::{ItemFactory, NewItem, RestoreDeletedItem, RestoreItem};
pub use fields::{ItemContent, ItemId, ItemKeyword, ItemKeywords, ItemTitle};
pub use repository::ItemRepository;

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockItemRepository;
