//! # Stock Trading Client Core - Library Root
//!
//! Session, wallet, and market-data plumbing for a stock-trading demo
//! client. This crate is the non-visual core: a view layer (web, desktop,
//! or test harness) wires the stores together, forwards input activity,
//! and renders whatever the stores publish.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                view layer (external)                │
//! │     reads stores, renders, forwards input events    │
//! └───────────────┬─────────────────────────┬───────────┘
//!                 │ calls                   │ AppEvent channel
//!                 ▼                         │
//! ┌───────────────────────────────┐         │
//! │ app: SessionStore             │─────────┤
//! │      WalletBalanceCache       │─────────┤
//! │      InactivityMonitor        │─────────┘
//! └───────────────┬───────────────┘
//!                 │ ApiService trait
//!                 ▼
//! ┌───────────────────────────────┐
//! │ services::api::ApiClient      │  reqwest + cookie store
//! └───────────────┬───────────────┘
//!                 │ HTTP (ambient session cookie)
//!                 ▼
//!         trading backend API
//! ```
//!
//! ## Module Structure
//!
//! - **[`app`]**: the stores (session phase and identity, inactivity
//!   watchdog, wallet balance cache) plus the [`app::AppEvent`] channel
//! - **[`core`]**: the [`core::ApiError`] taxonomy and the
//!   [`core::ApiService`] trait the stores depend on
//! - **[`services`]**: the HTTP gateway, one function per backend endpoint
//! - **[`utils`]**: pure input validation
//! - **[`logging`]**: tracing initialization for embedding applications
//!
//! ## Wiring
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use client::app::{
//!     event_channel, AppEvent, InactivityMonitor, SessionPhase, SessionStore,
//!     WalletBalanceCache,
//! };
//! use client::services::api::ApiClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let _guard = client::logging::init();
//!
//!     let api = Arc::new(ApiClient::from_env());
//!     let (events_tx, events) = event_channel();
//!
//!     let session = Arc::new(SessionStore::new(api.clone(), events_tx.clone()));
//!     let wallet = Arc::new(WalletBalanceCache::new(api.clone(), events_tx));
//!
//!     // Resolve the ambient credential before gating any view: the phase
//!     // stays Unknown until this returns, and views must not redirect
//!     // while it is Unknown.
//!     if session.check_session().await == SessionPhase::Authenticated {
//!         let _ = wallet.fetch_balance().await;
//!
//!         // The watchdog belongs to the authenticated region only; drop
//!         // the handle on logout. Input handlers call record_activity().
//!         let _monitor = InactivityMonitor::mount(session.clone());
//!     }
//!
//!     while let Ok(event) = events.recv().await {
//!         match event {
//!             AppEvent::LoggedOut { .. } => { /* navigate to the login view */ }
//!             AppEvent::BalanceUpdated(_) => { /* repaint the balance */ }
//!             _ => {}
//!         }
//!     }
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! Cooperative async on Tokio; suspension happens only at network
//! boundaries. Each store is the single writer of its state behind a
//! `parking_lot` lock that is never held across an await. The wallet
//! cache stamps every fetch with a generation and discards responses
//! that lost to a newer request, so a slow startup fetch cannot
//! overwrite a fresher post-login value.

pub mod app;
pub mod core;
pub mod logging;
pub mod services;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types for convenience
pub use crate::app::{
    event_channel, AppEvent, BalanceRefresh, InactivityMonitor, LogoutReason, SessionPhase,
    SessionStore, WalletBalanceCache,
};
pub use crate::core::{ApiError, ApiService, Result};
pub use crate::services::api::ApiClient;
