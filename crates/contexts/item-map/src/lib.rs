//! Item-map bounded context.
//!
//! Items are titled, keyword-tagged pieces of content. Maps connect items
//! into a parent/child graph. Both are owned by an author whose identifier
//! comes from the user-information context.

pub mod application;
pub mod dto;
pub mod item;
pub mod map;
pub mod user;

pub use application::{EditItem, EditMap, ItemApplicationService, MapApplicationService};
pub use dto::{ConnectionDto, ItemDto, MapDto};
pub use item::{
    Item, ItemContent, ItemFactory, ItemId, ItemKeyword, ItemKeywords, ItemRepository, ItemTitle,
    NewItem, RestoreDeletedItem, RestoreItem,
};
pub use map::{
    Connection, ConnectionInput, Map, MapFactory, MapId, MapRepository, MapTitle, NewMap,
    Relation, RestoreDeletedMap, RestoreMap,
};
pub use user::{Author, Operator, TranslatingUserService, UserId, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use item::MockItemRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use map::MockMapRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user::MockUserService;
