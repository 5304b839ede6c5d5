//! Item construction and rehydration.

use std::sync::Arc;

use kernel::{DomainResult, Lifecycle};
use serde::Deserialize;
use serde_json::Value;

use super::{Item, ItemContent, ItemId, ItemKeywords, ItemTitle};
use crate::user::UserService;

/// Input for a brand new item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    pub keywords: Vec<String>,
    pub content: String,
    pub author_id: String,
}

/// Persisted state of an active item.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreItem {
    pub id: String,
    pub title: String,
    /// JSON array of strings, as stored
    pub keywords: Value,
    pub content: String,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

/// Persisted state of a soft-deleted item. Content is not carried.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreDeletedItem {
    pub id: String,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

/// Builds `Item` aggregates. Every path runs the field validators except
/// `restore_deleted_item`, which substitutes tombstones.
#[derive(Clone)]
pub struct ItemFactory {
    users: Arc<dyn UserService>,
}

impl ItemFactory {
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }

    /// Fresh item with a generated id and all timestamps set to now.
    pub fn new_item(&self, input: NewItem) -> DomainResult<Item> {
        Ok(Item::active(
            ItemId::generate(),
            ItemTitle::new(input.title)?,
            ItemKeywords::new(input.keywords)?,
            ItemContent::new(input.content)?,
            self.users.author_from(&input.author_id)?,
            Lifecycle::start(),
        ))
    }

    /// Rehydrate an active item from its persisted primitives.
    pub fn restore_item(&self, input: RestoreItem) -> DomainResult<Item> {
        Ok(Item::active(
            ItemId::parse(&input.id)?,
            ItemTitle::new(input.title)?,
            ItemKeywords::from_json(&input.keywords)?,
            ItemContent::new(input.content)?,
            self.users.author_from(&input.author_id)?,
            Lifecycle::restore_from_strings(
                &input.created_at,
                &input.updated_at,
                &input.deleted_at,
                false,
            )?,
        ))
    }

    /// Rehydrate a soft-deleted item with tombstoned content.
    pub fn restore_deleted_item(&self, input: RestoreDeletedItem) -> DomainResult<Item> {
        Ok(Item::tombstone(
            ItemId::parse(&input.id)?,
            self.users.author_from(&input.author_id)?,
            Lifecycle::restore_from_strings(
                &input.created_at,
                &input.updated_at,
                &input.deleted_at,
                true,
            )?,
        ))
    }
}
