//! # Application Events
//!
//! Notifications the stores publish for the view layer. The core performs
//! no rendering or navigation itself: a view subscribes to this channel
//! and maps events onto its own transitions (e.g. `LoggedOut` → navigate
//! to the login screen).

use async_channel::{Receiver, Sender};
use shared::UserProfile;

use crate::app::session::{LogoutReason, SessionPhase};

/// Store notifications sent to the subscribed view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The startup session check resolved; the phase has left `Unknown`.
    SessionResolved(SessionPhase),
    /// Login completed successfully.
    LoggedIn,
    /// The local session was cleared. Views navigate to login on this.
    LoggedOut { reason: LogoutReason },
    /// The identity snapshot was replaced with a fresh fetch.
    IdentityRefreshed(UserProfile),
    /// The wallet cache took a new authoritative balance.
    BalanceUpdated(f64),
}

/// Build the event channel shared by the stores and the view layer.
///
/// The sender side is cloned into each store at construction; the view
/// layer holds the receiver and drains it from its event loop.
pub fn event_channel() -> (Sender<AppEvent>, Receiver<AppEvent>) {
    async_channel::unbounded()
}
