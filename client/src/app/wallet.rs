//! # Wallet Balance Cache
//!
//! Process-wide cache of the signed-in user's wallet balance. The cache
//! is the single writer; views only read.
//!
//! The displayed balance is always a server-returned value: deposits and
//! withdrawals apply the server-confirmed figure immediately and then
//! re-fetch, so a locally computed guess never persists unreconciled.
//! Every fetch carries a monotonically increasing generation; a response
//! older than the latest issued request is discarded, which closes the
//! race between a slow startup fetch and a fresher post-login refresh.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::events::AppEvent;
use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;
use crate::utils::validation::{apply_delta, validate_amount};

/// Which completed operation triggered a reconciling re-fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceRefresh {
    Login,
    Registration,
    Deposit,
    Withdrawal,
    Trade,
}

/// Single-writer balance cache with stale-response protection.
pub struct WalletBalanceCache {
    api: Arc<dyn ApiService>,
    balance: RwLock<Option<f64>>,
    /// Generation of the most recently issued fetch.
    issued: AtomicU64,
    event_tx: Sender<AppEvent>,
}

impl WalletBalanceCache {
    pub fn new(api: Arc<dyn ApiService>, event_tx: Sender<AppEvent>) -> Self {
        Self {
            api,
            balance: RwLock::new(None),
            issued: AtomicU64::new(0),
            event_tx,
        }
    }

    /// Last server-returned balance, if any fetch has landed yet.
    pub fn balance(&self) -> Option<f64> {
        *self.balance.read()
    }

    /// Fetch the balance from the backend. The cache only takes the value
    /// if no newer fetch was issued while this one was in flight.
    pub async fn fetch_balance(&self) -> Result<f64> {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let value = self.api.wallet_balance().await?;

        if self.store_if_current(generation, value) {
            self.emit(AppEvent::BalanceUpdated(value)).await;
        } else {
            tracing::debug!(generation, value, "Discarding stale balance response");
        }
        Ok(value)
    }

    /// Reconciling re-fetch after an operation that may have changed the
    /// balance server-side. Failures keep the last known value and are
    /// only logged; the next refresh will catch up.
    pub async fn refresh_after(&self, operation: BalanceRefresh) {
        match self.fetch_balance().await {
            Ok(value) => {
                tracing::debug!(?operation, value, "Balance refreshed");
            }
            Err(err) => {
                tracing::warn!(?operation, error = %err, "Balance refresh failed; keeping last known value");
            }
        }
    }

    /// Add funds to the wallet.
    pub async fn deposit(&self, amount: f64) -> Result<f64> {
        let amount = validated_amount(amount)?;
        self.adjust(amount, BalanceRefresh::Deposit).await
    }

    /// Remove funds from the wallet. Rejected client-side before any
    /// network call if the result would be negative; the backend still
    /// has the final word.
    pub async fn withdraw(&self, amount: f64) -> Result<f64> {
        let amount = validated_amount(amount)?;
        self.adjust(-amount, BalanceRefresh::Withdrawal).await
    }

    async fn adjust(&self, delta: f64, operation: BalanceRefresh) -> Result<f64> {
        let current = self
            .balance()
            .ok_or_else(|| ApiError::Validation("Balance has not loaded yet".to_string()))?;

        let target = apply_delta(current, delta).ok_or_else(|| {
            ApiError::Validation("Insufficient funds for this withdrawal".to_string())
        })?;

        let ack = self.api.set_wallet_balance(target).await?;

        // The server confirmed the write; show its figure right away...
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        if self.store_if_current(generation, ack.new_balance) {
            self.emit(AppEvent::BalanceUpdated(ack.new_balance)).await;
        }

        // ...then reconcile with a plain re-fetch, in case a concurrent
        // session moved the balance between the write and now.
        self.refresh_after(operation).await;

        Ok(ack.new_balance)
    }

    /// Take `value` only if `generation` is still the latest issued
    /// request; a newer in-flight fetch wins over this one.
    fn store_if_current(&self, generation: u64, value: f64) -> bool {
        if generation != self.issued.load(Ordering::SeqCst) {
            return false;
        }
        *self.balance.write() = Some(value);
        true
    }

    async fn emit(&self, event: AppEvent) {
        let _ = self.event_tx.send(event).await;
    }
}

/// Both mutations take a positive, finite dollar amount; the sign comes
/// from the operation, not the input.
fn validated_amount(amount: f64) -> Result<f64> {
    let check = validate_amount(amount);
    if check.is_valid {
        Ok(amount)
    } else {
        Err(ApiError::Validation(
            check.error.unwrap_or_else(|| "Invalid amount".to_string()),
        ))
    }
}
