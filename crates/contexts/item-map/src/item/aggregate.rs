//! Item aggregate.

use kernel::{DomainResult, Entity, Field, Lifecycle};

use super::fields::{ItemContent, ItemId, ItemKeywords, ItemTitle};
use crate::user::{Author, Operator};

const AGGREGATE: &str = "item";

/// A titled, keyword-tagged piece of content owned by an author.
///
/// Content fields are [`Field::Tombstone`] once the item is restored as
/// deleted. Every edit requires the operator to be the author and the item
/// to be active.
#[derive(Debug, Clone)]
pub struct Item {
    id: ItemId,
    title: Field<ItemTitle>,
    keywords: Field<ItemKeywords>,
    content: Field<ItemContent>,
    author: Author,
    lifecycle: Lifecycle,
}

impl Item {
    pub(crate) fn active(
        id: ItemId,
        title: ItemTitle,
        keywords: ItemKeywords,
        content: ItemContent,
        author: Author,
        lifecycle: Lifecycle,
    ) -> Self {
        Self {
            id,
            title: Field::Present(title),
            keywords: Field::Present(keywords),
            content: Field::Present(content),
            author,
            lifecycle,
        }
    }

    /// Soft-deleted aggregate. The lifecycle is always marked deleted.
    pub(crate) fn tombstone(id: ItemId, author: Author, lifecycle: Lifecycle) -> Self {
        Self {
            id,
            title: Field::Tombstone,
            keywords: Field::Tombstone,
            content: Field::Tombstone,
            author,
            lifecycle: lifecycle.into_deleted(),
        }
    }

    pub fn title(&self) -> &Field<ItemTitle> {
        &self.title
    }

    pub fn keywords(&self) -> &Field<ItemKeywords> {
        &self.keywords
    }

    pub fn content(&self) -> &Field<ItemContent> {
        &self.content
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn edit_title(&mut self, title: ItemTitle, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)?;
        self.title = Field::Present(title);
        self.lifecycle.touch();
        Ok(())
    }

    pub fn edit_keywords(&mut self, keywords: ItemKeywords, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)?;
        self.keywords = Field::Present(keywords);
        self.lifecycle.touch();
        Ok(())
    }

    pub fn edit_content(&mut self, content: ItemContent, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)?;
        self.content = Field::Present(content);
        self.lifecycle.touch();
        Ok(())
    }

    /// Check that `operator` may remove this item. The removal itself is
    /// carried out by the repository.
    ///
    /// # Errors
    /// `DomainError::Authorization` or `DomainError::AlreadyDeleted`.
    pub fn authorize_removal(&self, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)
    }

    fn guard(&self, operator: &Operator) -> DomainResult<()> {
        self.lifecycle
            .guard_mutation(self.author.is(operator), AGGREGATE)
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Item {}
