//! Shared test doubles for store and monitor tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    ChartInterval, ChartPeriod, CompanyMatch, MessageResponse, Portfolio, RegisterRequest,
    RegisteredUser, StockChart, StockQuote, StockTransaction, UserProfile, WalletUpdateResponse,
};

use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;

/// Scripted [`ApiService`] double.
///
/// Each endpoint pops its next scripted response in FIFO order; a call
/// with nothing scripted fails loudly with a server error so the test
/// notices. Balance responses carry an artificial latency so tests can
/// interleave in-flight fetches under a paused clock.
#[derive(Default)]
pub(crate) struct StubApi {
    pub login_responses: Mutex<VecDeque<Result<MessageResponse>>>,
    pub register_responses: Mutex<VecDeque<Result<RegisteredUser>>>,
    pub logout_responses: Mutex<VecDeque<Result<MessageResponse>>>,
    pub current_user_responses: Mutex<VecDeque<Result<UserProfile>>>,
    pub delete_responses: Mutex<VecDeque<Result<()>>>,
    pub balance_responses: Mutex<VecDeque<(Duration, Result<f64>)>>,
    pub set_balance_responses: Mutex<VecDeque<Result<WalletUpdateResponse>>>,
    pub buy_responses: Mutex<VecDeque<Result<StockTransaction>>>,

    pub login_calls: AtomicUsize,
    pub logout_calls: AtomicUsize,
    pub balance_calls: AtomicUsize,
    pub set_balance_calls: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(username: &str) -> UserProfile {
        UserProfile {
            id: 1,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    pub fn ack() -> MessageResponse {
        MessageResponse {
            message: "ok".to_string(),
        }
    }

    fn unscripted(endpoint: &str) -> ApiError {
        ApiError::Server(format!("no scripted response for {endpoint}"))
    }
}

#[async_trait]
impl ApiService for StubApi {
    async fn login(&self, _username: String, _password: String) -> Result<MessageResponse> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("login")))
    }

    async fn register(&self, _request: RegisterRequest) -> Result<RegisteredUser> {
        self.register_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("register")))
    }

    async fn logout(&self) -> Result<MessageResponse> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        self.logout_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("logout")))
    }

    async fn current_user(&self) -> Result<UserProfile> {
        self.current_user_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("current_user")))
    }

    async fn delete_account(&self) -> Result<()> {
        self.delete_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("delete_account")))
    }

    async fn wallet_balance(&self) -> Result<f64> {
        self.balance_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, result) = self
            .balance_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| (Duration::ZERO, Err(Self::unscripted("wallet_balance"))));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }

    async fn set_wallet_balance(&self, _new_balance: f64) -> Result<WalletUpdateResponse> {
        self.set_balance_calls.fetch_add(1, Ordering::SeqCst);
        self.set_balance_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("set_wallet_balance")))
    }

    async fn view_portfolio(&self) -> Result<Portfolio> {
        Err(Self::unscripted("view_portfolio"))
    }

    async fn buy_stock(&self, _ticker: &str, _quantity: i64) -> Result<StockTransaction> {
        self.buy_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Self::unscripted("buy_stock")))
    }

    async fn sell_stock(&self, _ticker: &str, _quantity: i64) -> Result<StockTransaction> {
        Err(Self::unscripted("sell_stock"))
    }

    async fn query_stock(&self, _ticker: &str) -> Result<StockQuote> {
        Err(Self::unscripted("query_stock"))
    }

    async fn stock_chart(
        &self,
        _ticker: &str,
        _period: ChartPeriod,
        _interval: ChartInterval,
    ) -> Result<StockChart> {
        Err(Self::unscripted("stock_chart"))
    }

    async fn search_companies(&self, _name: &str) -> Result<Vec<CompanyMatch>> {
        Err(Self::unscripted("search_companies"))
    }
}
