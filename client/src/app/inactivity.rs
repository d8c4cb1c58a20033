//! # Inactivity Monitor
//!
//! Idle watchdog for the authenticated region. Input handlers report
//! pointer, key, and click activity; once the idle threshold passes with
//! no report, the monitor forces a session logout and the resulting
//! [`crate::app::events::AppEvent::LoggedOut`] event sends the view to the
//! login screen.
//!
//! The monitor holds exactly one pending deadline. Every activity report
//! pushes that deadline forward (last event wins); a burst of events in
//! the same tick collapses into a single reschedule because the deadline
//! is derived from one atomic timestamp, not from queued timers.
//!
//! Mount the monitor only while a session is authenticated. Mounting it
//! over the login screen would log unauthenticated visitors out in a
//! loop; as a second guard the expiry path re-checks the session phase
//! before firing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::app::session::{LogoutReason, SessionStore};

/// Default idle threshold before forced logout.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Last-activity timestamp, stored as milliseconds since the monitor's
/// epoch so it fits in an atomic and follows the runtime clock (which
/// tests can pause and advance).
struct ActivityClock {
    epoch: Instant,
    last_activity_ms: AtomicU64,
}

impl ActivityClock {
    fn new() -> Self {
        Self {
            epoch: Instant::now(),
            last_activity_ms: AtomicU64::new(0),
        }
    }

    fn touch(&self) {
        let elapsed = self.epoch.elapsed().as_millis() as u64;
        self.last_activity_ms.store(elapsed, Ordering::Relaxed);
    }

    fn deadline(&self, timeout: Duration) -> Instant {
        let last = Duration::from_millis(self.last_activity_ms.load(Ordering::Relaxed));
        self.epoch + last + timeout
    }
}

/// Handle to a running inactivity watchdog.
///
/// Dropping the handle aborts the watch task and cancels the pending
/// deadline, so no timer can outlive the region that mounted it.
pub struct InactivityMonitor {
    clock: Arc<ActivityClock>,
    task: JoinHandle<()>,
    timeout: Duration,
}

impl InactivityMonitor {
    /// Mount a monitor over the given session with the default threshold.
    /// Mounting counts as activity: the first deadline is one full
    /// threshold away.
    pub fn mount(session: Arc<SessionStore>) -> Self {
        Self::mount_with_timeout(session, DEFAULT_IDLE_TIMEOUT)
    }

    /// Mount with an explicit idle threshold.
    pub fn mount_with_timeout(session: Arc<SessionStore>, timeout: Duration) -> Self {
        let clock = Arc::new(ActivityClock::new());
        let task = tokio::spawn(watch(Arc::clone(&clock), session, timeout));
        tracing::info!(timeout_secs = timeout.as_secs(), "Inactivity monitor mounted");
        Self { clock, task, timeout }
    }

    /// Report user activity (pointer move, key press, click). Cancels and
    /// reschedules the single pending deadline.
    pub fn record_activity(&self) {
        self.clock.touch();
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Drop for InactivityMonitor {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("Inactivity monitor unmounted");
    }
}

/// Watch loop: sleep until the current deadline, then re-derive it. If
/// activity moved the deadline the loop sleeps again; otherwise the
/// threshold truly elapsed and the logout fires exactly once.
async fn watch(clock: Arc<ActivityClock>, session: Arc<SessionStore>, timeout: Duration) {
    loop {
        let deadline = clock.deadline(timeout);
        if Instant::now() < deadline {
            sleep_until(deadline).await;
            continue;
        }

        if session.is_authenticated() {
            tracing::info!(
                idle_secs = timeout.as_secs(),
                "Idle threshold reached; logging out"
            );
            session.clear_session(LogoutReason::Inactivity).await;
        }
        break;
    }
}
