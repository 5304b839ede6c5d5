//! Application services for the item-map context.

mod item_service;
mod map_service;

pub use item_service::{EditItem, ItemApplicationService};
pub use map_service::{EditMap, MapApplicationService};
