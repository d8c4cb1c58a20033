//! # Application State Core
//!
//! The three stores behind every view, plus the event channel they
//! publish on:
//!
//! - **[`session`]**: authenticated/unauthenticated phase and the cached
//!   identity snapshot
//! - **[`inactivity`]**: idle watchdog that forces a logout after the
//!   threshold passes without input
//! - **[`wallet`]**: wallet balance cache with stale-response protection
//! - **[`events`]**: the [`AppEvent`] notification channel
//!
//! Each cross-cutting concern has exactly one authoritative store and one
//! writer; views read synchronously and react to events.

pub mod events;
pub mod inactivity;
pub mod session;
pub mod wallet;

pub use events::{event_channel, AppEvent};
pub use inactivity::{InactivityMonitor, DEFAULT_IDLE_TIMEOUT};
pub use session::{LogoutReason, SessionPhase, SessionStore};
pub use wallet::{BalanceRefresh, WalletBalanceCache};
