//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the trading client and the
//! backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and account management DTOs
//!   - **[`dto::wallet`]**: Wallet balance DTOs
//!   - **[`dto::portfolio`]**: Holdings and trade DTOs
//!   - **[`dto::stock`]**: Stock quote, chart, and company search DTOs
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_usd`]**: Format a dollar amount for display
//!   - **[`utils::format_quantity`]**: Format a share count for display
//!
//! ## Wire Format
//!
//! The backend is a FastAPI-style JSON server:
//! - Field names use **snake_case** in Rust, which maps to **snake_case**
//!   in JSON by default
//! - Error bodies carry a single `detail` string (see [`dto::auth::ErrorDetail`])
//! - The stock-quote endpoint substitutes the literal string `"N/A"` for
//!   figures it cannot source; those fields decode leniently to `None`
//!
//! ## Usage in the client
//!
//! ```rust,no_run
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     username: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("alice"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience. Wildcard re-exports are
// used here since this is a DTO library where all exports are public API.
pub use dto::*;
pub use utils::*;
