//! Response shapes of the Aquarium API.
//!
//! The client returns raw [`serde_json::Value`]s; these types are what the
//! server is expected to send and can be obtained with
//! [`serde_json::from_value`]. Nothing in the client validates responses
//! against them.
//!
//! # Example
//!
//! ```rust,ignore
//! use aquarium_api::types::{Context, Item};
//!
//! let item: Item = serde_json::from_value(client.get("items/123456", None).await?)?;
//! let context: Context = serde_json::from_value(
//!     client.get("items/123456/context", None).await?,
//! )?;
//! ```

mod context;
mod edge;
mod item;

pub use context::{BotSigninResponse, Context, Path, SigninResponse};
pub use edge::{Edge, EdgeData};
pub use item::{ActorRef, Bot, Item, ItemData, ItemHistory, User, BOT_TYPE, USER_TYPE};
