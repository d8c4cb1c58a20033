//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    ChartInterval, ChartPeriod, CompanyMatch, ErrorDetail, MessageResponse, Portfolio,
    RegisterRequest, RegisteredUser, StockChart, StockQuote, StockTransaction, UserProfile,
    WalletUpdateResponse,
};

use crate::core::error::{ApiError, Result};
use crate::core::service::ApiService;

/// Environment variable naming the backend base URL.
const API_URL_ENV: &str = "TRADE_API_URL";

/// Fallback base URL for local development.
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// HTTP client for communicating with the backend API server.
///
/// Holds a connection pool and a cookie store: the session cookie the
/// backend sets on login is replayed on every subsequent request, so no
/// credential is threaded through application code.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client with the base URL from `TRADE_API_URL`, falling
    /// back to the local development default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL.
    ///
    /// The client is configured with a 10 second timeout to prevent
    /// freezing callers on a dead backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .cookie_store(true)
            .build()
            .unwrap_or_else(|_| Client::new());

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn a non-success response into a typed failure, preferring the
    /// server's `detail` string when the body carries one.
    pub(crate) async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let detail = response
            .json::<ErrorDetail>()
            .await
            .map(|body| body.detail)
            .unwrap_or_else(|_| format!("Request failed with status {}", status.as_u16()));
        ApiError::from_status(status, detail)
    }
}

// Implement ApiService trait for ApiClient
#[async_trait]
impl ApiService for ApiClient {
    async fn login(&self, username: String, password: String) -> Result<MessageResponse> {
        super::auth::login(self, username, password).await
    }

    async fn register(&self, request: RegisterRequest) -> Result<RegisteredUser> {
        super::auth::register(self, request).await
    }

    async fn logout(&self) -> Result<MessageResponse> {
        super::auth::logout(self).await
    }

    async fn current_user(&self) -> Result<UserProfile> {
        super::auth::current_user(self).await
    }

    async fn delete_account(&self) -> Result<()> {
        super::auth::delete_account(self).await
    }

    async fn wallet_balance(&self) -> Result<f64> {
        super::wallet::wallet_balance(self).await
    }

    async fn set_wallet_balance(&self, new_balance: f64) -> Result<WalletUpdateResponse> {
        super::wallet::set_wallet_balance(self, new_balance).await
    }

    async fn view_portfolio(&self) -> Result<Portfolio> {
        super::portfolio::view_portfolio(self).await
    }

    async fn buy_stock(&self, ticker: &str, quantity: i64) -> Result<StockTransaction> {
        super::portfolio::buy_stock(self, ticker, quantity).await
    }

    async fn sell_stock(&self, ticker: &str, quantity: i64) -> Result<StockTransaction> {
        super::portfolio::sell_stock(self, ticker, quantity).await
    }

    async fn query_stock(&self, ticker: &str) -> Result<StockQuote> {
        super::stock::query_stock(self, ticker).await
    }

    async fn stock_chart(
        &self,
        ticker: &str,
        period: ChartPeriod,
        interval: ChartInterval,
    ) -> Result<StockChart> {
        super::stock::stock_chart(self, ticker, period, interval).await
    }

    async fn search_companies(&self, name: &str) -> Result<Vec<CompanyMatch>> {
        super::stock::search_companies(self, name).await
    }
}
