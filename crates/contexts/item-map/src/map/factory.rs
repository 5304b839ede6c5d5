//! Construction and rehydration of maps.

use std::sync::Arc;

use kernel::{DomainResult, Lifecycle};
use serde::Deserialize;
use serde_json::Value;

use super::{ConnectionInput, Map, MapId, MapTitle, Relation};
use crate::user::UserService;

/// Input for a brand new map.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMap {
    pub title: String,
    pub relation: Vec<ConnectionInput>,
    pub author_id: String,
}

/// Persisted state of an active map.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreMap {
    pub id: String,
    pub title: String,
    /// JSON array of `{"parent", "child"}` objects, as stored
    pub relation: Value,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

/// Persisted state of a soft-deleted map.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreDeletedMap {
    pub id: String,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
}

/// Builds `Map` aggregates.
#[derive(Clone)]
pub struct MapFactory {
    users: Arc<dyn UserService>,
}

impl MapFactory {
    pub fn new(users: Arc<dyn UserService>) -> Self {
        Self { users }
    }

    pub fn new_map(&self, input: NewMap) -> DomainResult<Map> {
        Ok(Map::active(
            MapId::generate(),
            MapTitle::new(input.title)?,
            Relation::from_inputs(&input.relation)?,
            self.users.author_from(&input.author_id)?,
            Lifecycle::start(),
        ))
    }

    pub fn restore_map(&self, input: RestoreMap) -> DomainResult<Map> {
        Ok(Map::active(
            MapId::parse(&input.id)?,
            MapTitle::new(input.title)?,
            Relation::from_json(&input.relation)?,
            self.users.author_from(&input.author_id)?,
            Lifecycle::restore_from_strings(
                &input.created_at,
                &input.updated_at,
                &input.deleted_at,
                false,
            )?,
        ))
    }

    pub fn restore_deleted_map(&self, input: RestoreDeletedMap) -> DomainResult<Map> {
        Ok(Map::tombstone(
            MapId::parse(&input.id)?,
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
