//! # Backend API Client Module
//!
//! HTTP gateway to the trading backend. One function per endpoint, grouped
//! per resource; every function attaches the ambient session cookie, maps
//! non-success statuses onto [`crate::core::error::ApiError`], and never
//! retries.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient struct and common functionality
//! ├── auth.rs       - Account endpoints (login, register, logout, me, delete)
//! ├── wallet.rs     - Wallet balance endpoints (get, set)
//! ├── portfolio.rs  - Holdings and trade endpoints (view, buy, sell)
//! └── stock.rs      - Market data endpoints (query, chart, search)
//! ```

pub mod auth;
pub mod client;
pub mod portfolio;
pub mod stock;
pub mod wallet;

pub use client::ApiClient;
