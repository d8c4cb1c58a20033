//! # Session Store
//!
//! Process-wide authority on whether this client holds a valid backend
//! session. All protected-view gating reads the store's phase; nothing
//! else in the process writes session state.
//!
//! The phase starts as [`SessionPhase::Unknown`] and stays there until the
//! startup [`SessionStore::check_session`] round-trip resolves. Views must
//! defer gating until the phase leaves `Unknown`; gating on a plain
//! authenticated/not-authenticated boolean during that window would
//! flash-redirect an authenticated user to the login screen.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::{RegisterRequest, RegisteredUser, UserProfile};

use crate::app::events::AppEvent;
use crate::core::error::Result;
use crate::core::service::ApiService;

/// Authentication lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup window: the session check has not resolved yet.
    Unknown,
    /// The ambient credential resolved to an identity.
    Authenticated,
    /// No valid credential.
    Unauthenticated,
}

/// Why the local session was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutReason {
    /// The user asked to sign out.
    UserRequested,
    /// The inactivity monitor hit its idle deadline.
    Inactivity,
    /// The account itself was deleted.
    AccountDeleted,
}

struct SessionState {
    phase: SessionPhase,
    current_user: Option<UserProfile>,
}

/// Single-writer store for session phase and the cached identity snapshot.
///
/// Readers access [`phase`](SessionStore::phase) and
/// [`current_user`](SessionStore::current_user) synchronously; every
/// transition is also published on the [`AppEvent`] channel.
pub struct SessionStore {
    api: Arc<dyn ApiService>,
    state: RwLock<SessionState>,
    event_tx: Sender<AppEvent>,
}

impl SessionStore {
    pub fn new(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>) -> Self {
        Self {
            api,
            state: RwLock::new(SessionState {
                phase: SessionPhase::Unknown,
                current_user: None,
            }),
            event_tx,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.read().phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    /// Latest identity snapshot, if one has been fetched.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.state.read().current_user.clone()
    }

    /// Startup bootstrap: resolve whatever ambient credential exists into
    /// a phase. "Not signed in" is an expected steady state here, so any
    /// failure is logged and absorbed rather than surfaced.
    pub async fn check_session(&self) -> SessionPhase {
        let phase = match self.api.current_user().await {
            Ok(profile) => {
                tracing::info!(username = %profile.username, "Session check resolved an identity");
                let mut state = self.state.write();
                state.phase = SessionPhase::Authenticated;
                state.current_user = Some(profile);
                SessionPhase::Authenticated
            }
            Err(err) => {
                tracing::debug!(error = %err, "No active session");
                let mut state = self.state.write();
                state.phase = SessionPhase::Unauthenticated;
                state.current_user = None;
                SessionPhase::Unauthenticated
            }
        };
        self.emit(AppEvent::SessionResolved(phase)).await;
        phase
    }

    /// Authenticate with the backend. On failure the error propagates to
    /// the caller for inline display and session state is left untouched.
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<()> {
        self.api.login(username.into(), password.into()).await?;

        self.state.write().phase = SessionPhase::Authenticated;
        self.emit(AppEvent::LoggedIn).await;

        // Populate the identity snapshot; a failure here leaves it stale
        // and is logged inside fetch_current_user.
        self.fetch_current_user().await;
        Ok(())
    }

    /// Create an account. No session state changes; the caller follows up
    /// with [`login`](SessionStore::login) using the same credentials.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisteredUser> {
        self.api.register(request).await
    }

    /// Sign out. The server call is best-effort: whatever it returns, the
    /// local session always clears.
    pub async fn logout(&self) {
        self.clear_session(LogoutReason::UserRequested).await;
    }

    /// Delete the signed-in account, then clear the local session.
    pub async fn delete_account(&self) -> Result<()> {
        self.api.delete_account().await?;

        let mut state = self.state.write();
        state.phase = SessionPhase::Unauthenticated;
        state.current_user = None;
        drop(state);

        self.emit(AppEvent::LoggedOut { reason: LogoutReason::AccountDeleted }).await;
        Ok(())
    }

    /// Replace the identity snapshot with a fresh fetch. On failure the
    /// prior snapshot stays (stale) and the error is only logged.
    pub async fn fetch_current_user(&self) {
        match self.api.current_user().await {
            Ok(profile) => {
                self.state.write().current_user = Some(profile.clone());
                self.emit(AppEvent::IdentityRefreshed(profile)).await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to refresh current user");
            }
        }
    }

    /// Shared logout path for user-requested and watchdog-forced exits.
    pub(crate) async fn clear_session(&self, reason: LogoutReason) {
        if let Err(err) = self.api.logout().await {
            tracing::warn!(error = %err, "Logout request failed; clearing local session anyway");
        }

        {
            let mut state = self.state.write();
            state.phase = SessionPhase::Unauthenticated;
            state.current_user = None;
        }

        self.emit(AppEvent::LoggedOut { reason }).await;
    }

    async fn emit(&self, event: AppEvent) {
        // A closed channel means no subscriber; the store state is already
        // consistent, so the notification is droppable.
        let _ = self.event_tx.send(event).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::events::event_channel;
    use crate::core::error::ApiError;
    use crate::testing::StubApi;
    use async_channel::Receiver;
    use std::sync::atomic::Ordering;

    fn store_with(api: Arc<StubApi>) -> (Arc<SessionStore>, Receiver<AppEvent>) {
        let (tx, rx) = event_channel();
        (Arc::new(SessionStore::new(api, tx)), rx)
    }

    #[tokio::test]
    async fn check_session_with_valid_identity_authenticates() {
        let api = Arc::new(StubApi::new());
        api.current_user_responses
            .lock()
            .push_back(Ok(StubApi::profile("ada")));
        let (store, rx) = store_with(api);

        assert_eq!(store.phase(), SessionPhase::Unknown);
        let phase = store.check_session().await;

        assert_eq!(phase, SessionPhase::Authenticated);
        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().username, "ada");
        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::SessionResolved(SessionPhase::Authenticated)
        );
    }

    #[tokio::test]
    async fn check_session_failure_is_swallowed() {
        let api = Arc::new(StubApi::new());
        api.current_user_responses
            .lock()
            .push_back(Err(ApiError::Unauthenticated("Not authenticated".into())));
        let (store, rx) = store_with(api);

        let phase = store.check_session().await;

        assert_eq!(phase, SessionPhase::Unauthenticated);
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::SessionResolved(SessionPhase::Unauthenticated)
        );
    }

    #[tokio::test]
    async fn login_failure_surfaces_server_detail_and_leaves_state() {
        let api = Arc::new(StubApi::new());
        api.login_responses
            .lock()
            .push_back(Err(ApiError::Validation("Invalid username or password".into())));
        let (store, rx) = store_with(api);

        let err = store.login("u", "bad").await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.to_string(), "Invalid username or password");
        assert!(!store.is_authenticated());
        assert!(rx.try_recv().is_err(), "failed login must not emit events");
    }

    #[tokio::test]
    async fn login_success_authenticates_and_refreshes_identity() {
        let api = Arc::new(StubApi::new());
        api.login_responses.lock().push_back(Ok(StubApi::ack()));
        api.current_user_responses
            .lock()
            .push_back(Ok(StubApi::profile("ada")));
        let (store, rx) = store_with(api.clone());

        store.login("ada", "pw").await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().username, "ada");
        assert_eq!(api.login_calls.load(Ordering::SeqCst), 1);
        assert_eq!(rx.recv().await.unwrap(), AppEvent::LoggedIn);
        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::IdentityRefreshed(StubApi::profile("ada"))
        );
    }

    #[tokio::test]
    async fn register_does_not_change_session_state() {
        let api = Arc::new(StubApi::new());
        api.register_responses.lock().push_back(Ok(RegisteredUser {
            username: "ada".into(),
            email: "ada@example.com".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        }));
        let (store, rx) = store_with(api);

        let created = store
            .register(RegisterRequest {
                username: "ada".into(),
                password: "longenough".into(),
                first_name: "Ada".into(),
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
            })
            .await
            .unwrap();

        assert_eq!(created.username, "ada");
        assert_eq!(store.phase(), SessionPhase::Unknown);
        assert!(rx.try_recv().is_err(), "registration emits no session events");
    }

    #[tokio::test]
    async fn login_success_tolerates_identity_fetch_failure() {
        let api = Arc::new(StubApi::new());
        api.login_responses.lock().push_back(Ok(StubApi::ack()));
        api.current_user_responses
            .lock()
            .push_back(Err(ApiError::Network("connection reset".into())));
        let (store, _rx) = store_with(api);

        store.login("ada", "pw").await.unwrap();

        assert!(store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn logout_clears_local_state_even_when_server_fails() {
        let api = Arc::new(StubApi::new());
        api.current_user_responses
            .lock()
            .push_back(Ok(StubApi::profile("ada")));
        api.logout_responses
            .lock()
            .push_back(Err(ApiError::Network("connection refused".into())));
        let (store, rx) = store_with(api.clone());

        store.check_session().await;
        assert!(store.is_authenticated());

        store.logout().await;

        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
        assert_eq!(api.logout_calls.load(Ordering::SeqCst), 1);

        // Skip the SessionResolved event, then expect the logout.
        rx.recv().await.unwrap();
        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::LoggedOut { reason: LogoutReason::UserRequested }
        );
    }

    #[tokio::test]
    async fn stale_identity_survives_failed_refresh() {
        let api = Arc::new(StubApi::new());
        api.current_user_responses
            .lock()
            .push_back(Ok(StubApi::profile("ada")));
        api.current_user_responses
            .lock()
            .push_back(Err(ApiError::Server("boom".into())));
        let (store, _rx) = store_with(api);

        store.check_session().await;
        store.fetch_current_user().await;

        assert_eq!(store.current_user().unwrap().username, "ada");
    }

    #[tokio::test]
    async fn delete_account_clears_session() {
        let api = Arc::new(StubApi::new());
        api.current_user_responses
            .lock()
            .push_back(Ok(StubApi::profile("ada")));
        api.delete_responses.lock().push_back(Ok(()));
        let (store, rx) = store_with(api);

        store.check_session().await;
        store.delete_account().await.unwrap();

        assert!(!store.is_authenticated());
        rx.recv().await.unwrap(); // SessionResolved
        assert_eq!(
            rx.recv().await.unwrap(),
            AppEvent::LoggedOut { reason: LogoutReason::AccountDeleted }
        );
    }
}
