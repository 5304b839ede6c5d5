//! Map use cases.

use std::sync::Arc;

use common::{run_in_transaction, AppResult, UnitOfWork};
use kernel::{DomainError, DomainResult, Entity};
use serde::Deserialize;
use tracing::{info, warn};

use crate::dto::MapDto;
use crate::map::{
    ConnectionInput, Map, MapFactory, MapId, MapRepository, MapTitle, NewMap, Relation,
};
use crate::user::{Operator, UserService};

/// Replacement values for every editable map field.
#[derive(Debug, Clone, Deserialize)]
pub struct EditMap {
    pub title: String,
    pub relation: Vec<ConnectionInput>,
}

pub struct MapApplicationService {
    maps: Arc<dyn MapRepository>,
    factory: MapFactory,
    users: Arc<dyn UserService>,
    uow: Arc<dyn UnitOfWork>,
}

impl MapApplicationService {
    pub fn new(
        maps: Arc<dyn MapRepository>,
        users: Arc<dyn UserService>,
        uow: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            maps,
            factory: MapFactory::new(users.clone()),
            users,
            uow,
        }
    }

    pub async fn create_new_map(&self, input: NewMap) -> AppResult<MapId> {
        let map = self.factory.new_map(input)?;
        self.save(&map).await?;

        info!(map_id = %map.id(), connections = map.relation().map_or(0, Relation::len), "Map created");
        Ok(map.id().clone())
    }

    pub async fn remove_map(&self, id: &str, operator_id: &str) -> AppResult<()> {
        let map = self.map_of_id(id).await?;
        let operator = self.users.operator_from(operator_id)?;

        if let Err(e) = map.authorize_removal(&operator) {
            warn!(map_id = %map.id(), operator_id, error = %e, "Map removal refused");
            return Err(e.into());
        }

        run_in_transaction(self.uow.as_ref(), self.maps.remove(&map)).await?;

        info!(map_id = %map.id(), "Map removed");
        Ok(())
    }

    pub async fn edit_all(&self, id: &str, edit: EditMap, operator_id: &str) -> AppResult<()> {
        let mut map = self.map_of_id(id).await?;
        let operator = self.users.operator_from(operator_id)?;

        if let Err(e) = apply_edit(&mut map, edit, &operator) {
            if matches!(e, DomainError::Authorization) {
                warn!(map_id = %map.id(), operator_id, "Map edit refused");
            }
            return Err(e.into());
        }

        self.save(&map).await?;

        info!(map_id = %map.id(), "Map edited");
        Ok(())
    }

    pub async fn map_dto(&self, id: &str) -> AppResult<MapDto> {
        let map = self.map_of_id(id).await?;
        Ok(MapDto::from(&map))
    }

    async fn map_of_id(&self, id: &str) -> AppResult<Map> {
        let id = MapId::parse(id)?;
        self.maps.map_of_id(&id).await
    }

    async fn save(&self, map: &Map) -> AppResult<()> {
        run_in_transaction(self.uow.as_ref(), self.maps.save(map)).await
    }
}

fn apply_edit(map: &mut Map, edit: EditMap, operator: &Operator) -> DomainResult<()> {
    map.edit_title(MapTitle::new(edit.title)?, operator)?;
    map.edit_relation(Relation::from_inputs(&edit.relation)?, operator)
}
