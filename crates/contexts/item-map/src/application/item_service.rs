//! Item use cases.

use std::sync::Arc;

use common::{run_in_transaction, AppResult, UnitOfWork};
use kernel::{is_blank, DomainError, DomainResult, Entity, RangeViolation};
use serde::Deserialize;
use tracing::{info, warn};

use crate::dto::ItemDto;
use crate::item::{
    Item, ItemContent, ItemFactory, ItemId, ItemKeywords, ItemRepository, ItemTitle, NewItem,
};
use crate::user::{Operator, UserService};

/// Replacement values for every editable item field.
#[derive(Debug, Clone, Deserialize)]
pub struct EditItem {
    pub title: String,
    pub keywords: Vec<String>,
    pub content: String,
}

/// Application service for items. Writes run in a unit of work.
pub struct ItemApplicationService {
    items: Arc<dyn ItemRepository>,
    factory: ItemFactory,
    users: Arc<dyn UserService>,
    uow: Arc<dyn UnitOfWork>,
}

impl ItemApplicationService {
    pub fn new(
        items: Arc<dyn ItemRepository>,
        users: Arc<dyn UserService>,
        uow: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            items,
            factory: ItemFactory::new(users.clone()),
            users,
            uow,
        }
    }

    /// Create and persist a new item, returning its id
    pub async fn create_new_item(&self, input: NewItem) -> AppResult<ItemId> {
        let item = self.factory.new_item(input)?;
        self.save(&item).await?;

        info!(item_id = %item.id(), "Item created");
        Ok(item.id().clone())
    }

    /// Soft delete an item owned by the operator
    pub async fn remove_item(&self, id: &str, operator_id: &str) -> AppResult<()> {
        let item = self.item_of_id(id).await?;
        let operator = self.users.operator_from(operator_id)?;

        if let Err(e) = item.authorize_removal(&operator) {
            warn!(item_id = %item.id(), operator_id, error = %e, "Item removal refused");
            return Err(e.into());
        }

        run_in_transaction(self.uow.as_ref(), self.items.remove(&item)).await?;

        info!(item_id = %item.id(), "Item removed");
        Ok(())
    }

    /// Replace title, keywords and content, then persist
    pub async fn edit_all(&self, id: &str, edit: EditItem, operator_id: &str) -> AppResult<()> {
        let mut item = self.item_of_id(id).await?;
        let operator = self.users.operator_from(operator_id)?;

        if let Err(e) = apply_edit(&mut item, edit, &operator) {
            if matches!(e, DomainError::Authorization) {
                warn!(item_id = %item.id(), operator_id, "Item edit refused");
            }
            return Err(e.into());
        }

        self.save(&item).await?;

        info!(item_id = %item.id(), "Item edited");
        Ok(())
    }

    pub async fn item_dto(&self, id: &str) -> AppResult<ItemDto> {
        let item = self.item_of_id(id).await?;
        Ok(ItemDto::from(&item))
    }

    /// Split a comma-separated keyword string.
    ///
    /// Entries are returned as written. Each must contain no control
    /// character and at least one non-blank character.
    pub fn pick_up_keywords(raw: &str) -> AppResult<Vec<String>> {
        raw.split(',')
            .map(|keyword| {
                if keyword.chars().any(|c| c.is_ascii_control()) {
                    return Err(DomainError::range(
                        "item keyword",
                        RangeViolation::ForbiddenCharacter,
                    ));
                }
                if is_blank(keyword) {
                    return Err(DomainError::range("item keyword", RangeViolation::Blank));
                }
                Ok(keyword.to_string())
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }

    async fn item_of_id(&self, id: &str) -> AppResult<Item> {
        let id = ItemId::parse(id)?;
        self.items.item_of_id(&id).await
    }

    async fn save(&self, item: &Item) -> AppResult<()> {
        run_in_transaction(self.uow.as_ref(), self.items.save(item)).await
    }
}

fn apply_edit(item: &mut Item, edit: EditItem, operator: &Operator) -> DomainResult<()> {
    item.edit_title(ItemTitle::new(edit.title)?, operator)?;
    item.edit_keywords(ItemKeywords::new(edit.keywords)?, operator)?;
    item.edit_content(ItemContent::new(edit.content)?, operator)
}
