//! Directed parent/child graph between items.

use std::collections::HashSet;

use kernel::json::{expect_array, expect_str, type_name_of};
use kernel::{DomainError, DomainResult, RangeViolation};
use serde::Deserialize;
use serde_json::Value;

use crate::item::ItemId;

/// One parent to child edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    parent: ItemId,
    child: ItemId,
}

impl Connection {
    pub fn new(parent: ItemId, child: ItemId) -> Self {
        Self { parent, child }
    }

    pub fn parent(&self) -> &ItemId {
        &self.parent
    }

    pub fn child(&self) -> &ItemId {
        &self.child
    }

    pub fn is_self_loop(&self) -> bool {
        self.parent == self.child
    }
}

/// Raw edge as received from outside.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionInput {
    pub parent: String,
    pub child: String,
}

impl ConnectionInput {
    pub fn new(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            child: child.into(),
        }
    }
}

/// Ordered, non-empty set of connections. No two connections share both
/// parent and child. Self-loops and cycles are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation(Vec<Connection>);

impl Relation {
    pub fn new(connections: Vec<Connection>) -> DomainResult<Self> {
        if connections.is_empty() {
            return Err(DomainError::range("relation", RangeViolation::NoElements));
        }

        let mut seen = HashSet::with_capacity(connections.len());
        if !connections.iter().all(|connection| seen.insert(connection)) {
            return Err(DomainError::range(
                "relation",
                RangeViolation::DuplicateConnection,
            ));
        }

        Ok(Self(connections))
    }

    /// Parse every endpoint as an `ItemId`, then validate the graph.
    pub fn from_inputs(inputs: &[ConnectionInput]) -> DomainResult<Self> {
        let connections = inputs
            .iter()
            .map(|input| {
                Ok(Connection::new(
                    ItemId::parse(&input.parent)?,
                    ItemId::parse(&input.child)?,
                ))
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(connections)
    }

    /// Build from an untyped JSON array of `{"parent": .., "child": ..}`.
    ///
    /// # Errors
    /// `DomainError::Type` for a non-array input, a non-object element or a
    /// missing or non-string endpoint.
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        let connections = expect_array("relation", value)?
            .iter()
            .map(connection_from_json)
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(connections)
    }

    pub fn connections(&self) -> &[Connection] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Connection> {
        self.0.iter()
    }
}

fn connection_from_json(value: &Value) -> DomainResult<Connection> {
    let object = value
        .as_object()
        .ok_or_else(|| DomainError::wrong_type("connection", "object", type_name_of(value)))?;

    let endpoint = |field: &'static str| -> DomainResult<ItemId> {
        let raw = object.get(field).unwrap_or(&Value::Null);
        ItemId::parse(expect_str(field, raw)?)
    };

    Ok(Connection::new(endpoint("parent")?, endpoint("child")?))
}

kernel::value_object!(Connection, Relation);
