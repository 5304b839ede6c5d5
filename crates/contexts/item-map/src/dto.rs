//! Flattened, display-ready views of item-map aggregates.

use common::{AppError, AppResult};
use kernel::{display_timestamp, Entity};
use serde::Serialize;

use crate::item::Item;
use crate::map::Map;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: String,
    pub title: String,
    pub keywords: Vec<String>,
    pub content: String,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionDto {
    pub parent: String,
    pub child: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDto {
    pub id: String,
    pub title: String,
    pub relation: Vec<ConnectionDto>,
    pub author_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: String,
    pub is_deleted: bool,
}

impl From<&Item> for ItemDto {
    fn from(item: &Item) -> Self {
        let lifecycle = item.lifecycle();
        Self {
            id: item.id().to_string(),
            title: item.title().map_or(String::new(), |t| t.as_str().to_string()),
            keywords: item.keywords().map_or(Vec::new(), |k| k.to_strings()),
            content: item.content().map_or(String::new(), |c| c.as_str().to_string()),
            author_id: item.author().id().to_string(),
            created_at: display_timestamp(lifecycle.created_at()),
            updated_at: display_timestamp(lifecycle.updated_at()),
            deleted_at: display_timestamp(lifecycle.deleted_at()),
            is_deleted: lifecycle.is_deleted(),
        }
    }
}

impl From<&Map> for MapDto {
    fn from(map: &Map) -> Self {
        let lifecycle = map.lifecycle();
        let relation = map.relation().map_or(Vec::new(), |relation| {
            relation
                .iter()
                .map(|connection| ConnectionDto {
                    parent: connection.parent().to_string(),
                    child: connection.child().to_string(),
                })
                .collect()
        });

        Self {
            id: map.id().to_string(),
            title: map.title().map_or(String::new(), |t| t.as_str().to_string()),
            relation,
            author_id: map.author().id().to_string(),
            created_at: display_timestamp(lifecycle.created_at()),
            updated_at: display_timestamp(lifecycle.updated_at()),
            deleted_at: display_timestamp(lifecycle.deleted_at()),
            is_deleted: lifecycle.is_deleted(),
        }
    }
}

impl ItemDto {
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::internal(e.to_string()))
    }
}

impl MapDto {
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| AppError::internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::item::{ItemFactory, RestoreDeletedItem, RestoreItem};
    use crate::map::{MapFactory, RestoreMap};
    use crate::user::TranslatingUserService;
    use serde_json::{json, Value};

    const ID: &str = "0123456789abcdef0123456789abcdef";
    const AUTHOR: &str = "abcdefabcdefabcdefabcdefabcdef01";

    fn restored_item() -> Item {
        ItemFactory::new(Arc::new(TranslatingUserService::new()))
            .restore_item(RestoreItem {
                id: ID.to_string(),
                title: "Title".to_string(),
                keywords: json!(["a", "b"]),
                content: "line1\r\nline2".to_string(),
                author_id: AUTHOR.to_string(),
                created_at: "2024-01-01 15:30:00".to_string(),
                updated_at: "2024-01-01 15:30:00".to_string(),
                deleted_at: "2024-01-01 15:30:00".to_string(),
            })
            .unwrap()
    }

    #[test]
    fn test_item_dto_renders_display_time() {
        let dto = ItemDto::from(&restored_item());

        assert_eq!(dto.id, ID);
        assert_eq!(dto.keywords, vec!["a", "b"]);
        assert_eq!(dto.content, "line1\nline2");
        // 15:30 UTC is 00:30 the next day at +09:00
        assert_eq!(dto.created_at, "2024-01-02 00:30:00");
        assert!(!dto.is_deleted);
    }

    #[test]
    fn test_item_dto_json_is_camel_case() {
        let json: Value =
            serde_json::from_str(&ItemDto::from(&restored_item()).to_json().unwrap()).unwrap();

        assert_eq!(json["authorId"], AUTHOR);
        assert_eq!(json["isDeleted"], false);
        assert_eq!(json["updatedAt"], "2024-01-02 00:30:00");
    }

    #[test]
    fn test_tombstoned_item_renders_empty() {
        let item = ItemFactory::new(Arc::new(TranslatingUserService::new()))
            .restore_deleted_item(RestoreDeletedItem {
                id: ID.to_string(),
                author_id: AUTHOR.to_string(),
                created_at: "2024-01-01 00:00:00".to_string(),
                updated_at: "2024-01-01 00:00:00".to_string(),
                deleted_at: "2024-01-05 00:00:00".to_string(),
            })
            .unwrap();
        let dto = ItemDto::from(&item);

        assert_eq!(dto.title, "");
        assert!(dto.keywords.is_empty());
        assert_eq!(dto.content, "");
        assert!(dto.is_deleted);
        assert_eq!(dto.deleted_at, "2024-01-05 09:00:00");
    }

    #[test]
    fn test_map_dto_lists_connections() {
        let a = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
        let b = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
        let map = MapFactory::new(Arc::new(TranslatingUserService::new()))
            .restore_map(RestoreMap {
                id: ID.to_string(),
                title: "Path".to_string(),
                relation: json!([{"parent": a, "child": b}]),
                author_id: AUTHOR.to_string(),
                created_at: "2024-01-01 00:00:00".to_string(),
                updated_at: "2024-01-01 00:00:00".to_string(),
                deleted_at: "2024-01-01 00:00:00".to_string(),
            })
            .unwrap();

        let json: Value = serde_json::from_str(&MapDto::from(&map).to_json().unwrap()).unwrap();
        assert_eq!(json["relation"], json!([{"parent": a, "child": b}]));
        assert_eq!(json["title"], "Path");
    }
}
