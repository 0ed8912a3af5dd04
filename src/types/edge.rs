//! Edge records connecting two items.
//!
//! Timestamps follow the same RFC 3339 rule as [`Item`](crate::types::Item).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::item::ActorRef;

/// Free-form payload of an edge.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EdgeData {
    /// Display name of the edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// All other data fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// A directed connection between two items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// The edge key.
    #[serde(rename = "_key")]
    pub key: String,

    /// The document id, `connections/{key}`.
    #[serde(rename = "_id")]
    pub id: String,

    /// Id of the source item, `items/{key}`.
    #[serde(rename = "_from")]
    pub from: String,

    /// Id of the target item, `items/{key}`.
    #[serde(rename = "_to")]
    pub to: String,

    /// The document revision.
    #[serde(rename = "_rev")]
    pub rev: String,

    /// The edge type name (e.g., "Child").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,

    /// The edge payload.
    #[serde(default)]
    pub data: EdgeData,

    /// Key of the edge this one was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<String>,

    /// Who created the edge.
    pub created_by: ActorRef,

    /// When the edge was created.
    pub created_at: DateTime<Utc>,

    /// Who last updated the edge.
    pub updated_by: ActorRef,

    /// When the edge was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Edge {
    /// Returns `true` if this edge has the given type name.
    #[must_use]
    pub fn is_type(&self, edge_type: &str) -> bool {
        self.edge_type.as_deref() == Some(edge_type)
    }

    /// Returns `true` if this edge starts or ends at the item with `id`.
    #[must_use]
    pub fn touches(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }
}
