//! Graph query results made of items and edges.

use serde::{Deserialize, Serialize};

use crate::types::edge::Edge;
use crate::types::item::{Bot, Item, User};

/// An item together with the edges around it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Context {
    /// The item at the center.
    pub item: Item,

    /// Edges connected to the item.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// A path through the graph.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Path {
    /// Items along the path, in order.
    #[serde(default)]
    pub vertices: Vec<Item>,

    /// Edges between consecutive vertices.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Path {
    /// Returns the number of edges in the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the path has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Response of a user sign-in, once the token has been moved to the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SigninResponse {
    /// The signed-in user.
    pub user: User,
}

/// Response of a bot sign-in, once the token has been moved to the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BotSigninResponse {
    /// The signed-in bot.
    pub bot: Bot,
}
