//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the trading client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Registration, login, identity, and error-body DTOs
//! - [`wallet`] - Wallet balance DTOs
//! - [`portfolio`] - Holdings and buy/sell transaction DTOs
//! - [`stock`] - Quote, chart, and company-search DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior), with explicit
//!   renames where the backend emits keys that are not valid Rust
//!   identifiers (`52_week_high`, `52_week_low`)
//! - **Unknown fields**: ignored on deserialization, so server-side schema
//!   additions do not break the client
//! - **All types**: implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /user/login
//! Content-Type: application/json
//!
//! {
//!   "username": "alice",
//!   "password": "MyPassword123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "message": "Logged in successfully" }
//! ```

pub mod auth;
pub mod portfolio;
pub mod stock;
pub mod wallet;

pub use auth::*;
pub use portfolio::*;
pub use stock::*;
pub use wallet::*;
