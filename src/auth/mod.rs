//! Authentication types for the Aquarium API SDK.
//!
//! This module provides the session state shared by a client and its
//! clones, and the building blocks of the sign-in exchange.
//!
//! # Overview
//!
//! - [`Session`]: base URL, token and tenant domain used by every request
//! - [`signin`]: sign-in endpoint paths and token extraction
//!
//! # Authentication Flows
//!
//! Aquarium accepts a bearer token in the `authorization` header. A token is
//! obtained in one of three ways:
//!
//! - **Personal or saved token**: passed at construction
//! - **User sign-in**: `email` + `password`, via
//!   [`AquariumClient::signin`](crate::AquariumClient::signin)
//! - **Bot sign-in**: bot key + secret, via
//!   [`AquariumClient::signin_bot`](crate::AquariumClient::signin_bot)
//!
//! ```rust,ignore
//! use aquarium_api::AquariumClient;
//!
//! let client = AquariumClient::new("https://aquarium.example.com", None, None)?;
//! let me = client.signin("jane@example.com", "password").await?;
//! assert!(client.session().is_authenticated());
//! ```

pub mod session;
pub mod signin;

pub use session::Session;
