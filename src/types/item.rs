//! Item records.
//!
//! Items are the vertices of the Aquarium graph. Every item carries a
//! server-assigned key, a type name and a free-form [`ItemData`] payload.
//! Users and bots are items too, distinguished only by their `type`.
//!
//! Timestamps are parsed as RFC 3339 (the server's `toISOString` output). A
//! record with a timestamp in any other format fails to deserialize as a
//! whole; read the raw [`Value`] instead if that can happen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type name of user items.
pub const USER_TYPE: &str = "User";

/// Type name of bot items.
pub const BOT_TYPE: &str = "Bot";

/// Free-form payload of an item.
///
/// Only `name` is shared by convention; every other field is kept in
/// [`fields`](Self::fields) in the order the server sent it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ItemData {
    /// Display name of the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// All other data fields.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Reference to the actor that created or updated a record.
///
/// The server sends the user's key unless the request asked for populated
/// results, in which case the full user item is embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ActorRef {
    /// Key of the user.
    Key(String),
    /// The populated user item.
    Item(Box<Item>),
}

impl ActorRef {
    /// Returns the actor's key, whether or not it was populated.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Key(key) => key,
            Self::Item(item) => &item.key,
        }
    }

    /// Returns the populated item, if any.
    #[must_use]
    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Key(_) => None,
            Self::Item(item) => Some(item.as_ref()),
        }
    }
}

/// A vertex of the Aquarium graph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// The item key.
    #[serde(rename = "_key")]
    pub key: String,

    /// The document id, `items/{key}`.
    #[serde(rename = "_id")]
    pub id: String,

    /// The document revision.
    #[serde(rename = "_rev")]
    pub rev: String,

    /// The item type name (e.g., "Shot", "User").
    #[serde(rename = "type")]
    pub item_type: String,

    /// The item payload.
    #[serde(default)]
    pub data: ItemData,

    /// Key of the item this one was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<String>,

    /// Who created the item.
    pub created_by: ActorRef,

    /// When the item was created, RFC 3339.
    pub created_at: DateTime<Utc>,

    /// Who last updated the item.
    pub updated_by: ActorRef,

    /// When the item was last updated, RFC 3339.
    pub updated_at: DateTime<Utc>,

    /// Previous revisions, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<ItemHistory>>,
}

impl Item {
    /// Returns `true` if this item has the given type name.
    #[must_use]
    pub fn is_type(&self, item_type: &str) -> bool {
        self.item_type == item_type
    }

    /// Returns `true` if this item is a user.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.is_type(USER_TYPE)
    }

    /// Returns `true` if this item is a bot.
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.is_type(BOT_TYPE)
    }

    /// Returns the display name from the item data.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.data.name.as_deref()
    }
}

/// A user item.
pub type User = Item;

/// A bot item.
pub type Bot = Item;

/// A past revision of an item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemHistory {
    /// Key of the live item this revision belongs to.
    pub original_key: String,

    /// Message recorded with the revision.
    pub message: String,

    /// The item as it was at this revision.
    #[serde(flatten)]
    pub item: Item,

    /// Any other revision metadata.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
