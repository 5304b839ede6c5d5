//! Map aggregate.

use kernel::{DomainResult, Entity, Field, Lifecycle};

use super::{MapId, MapTitle, Relation};
use crate::user::{Author, Operator};

const AGGREGATE: &str = "map";

/// A titled graph of items owned by an author.
#[derive(Debug, Clone)]
pub struct Map {
    id: MapId,
    title: Field<MapTitle>,
    relation: Field<Relation>,
    author: Author,
    lifecycle: Lifecycle,
}

impl Map {
    pub(crate) fn active(
        id: MapId,
        title: MapTitle,
        relation: Relation,
        author: Author,
        lifecycle: Lifecycle,
    ) -> Self {
        Self {
            id,
            title: Field::Present(title),
            relation: Field::Present(relation),
            author,
            lifecycle,
        }
    }

    /// Soft-deleted aggregate. The lifecycle is always marked deleted.
    pub(crate) fn tombstone(id: MapId, author: Author, lifecycle: Lifecycle) -> Self {
        Self {
            id,
            title: Field::Tombstone,
            relation: Field::Tombstone,
            author,
            lifecycle: lifecycle.into_deleted(),
        }
    }

    pub fn title(&self) -> &Field<MapTitle> {
        &self.title
    }

    pub fn relation(&self) -> &Field<Relation> {
        &self.relation
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn edit_title(&mut self, title: MapTitle, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)?;
        self.title = Field::Present(title);
        self.lifecycle.touch();
        Ok(())
    }

    pub fn edit_relation(&mut self, relation: Relation, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)?;
        self.relation = Field::Present(relation);
        self.lifecycle.touch();
        Ok(())
    }

    /// Owner and deletion checks ahead of a repository removal
    pub fn authorize_removal(&self, operator: &Operator) -> DomainResult<()> {
        self.guard(operator)
    }

    fn guard(&self, operator: &Operator) -> DomainResult<()> {
        self.lifecycle
            .guard_mutation(self.author.is(operator), AGGREGATE)
    }
}

impl Entity for Map {
    type Id = MapId;

    fn id(&self) -> &MapId {
        &self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Map {}
