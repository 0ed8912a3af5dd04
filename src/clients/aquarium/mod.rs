//! High-level Aquarium API client.
//!
//! - [`AquariumClient`]: verb methods plus sign-in operations
//! - [`AquariumError`]: error type for client operations
//!
//! # Example
//!
//! ```rust,ignore
//! use aquarium_api::clients::aquarium::AquariumClient;
//!
//! let client = AquariumClient::new("https://aquarium.example.com", Some("token"), None)?;
//! let me = client.me().await?;
//! ```

mod client;
mod errors;

pub use client::AquariumClient;
pub use errors::AquariumError;
