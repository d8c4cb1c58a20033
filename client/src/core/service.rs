//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::{
    ChartInterval, ChartPeriod, CompanyMatch, MessageResponse, Portfolio, RegisterRequest,
    RegisteredUser, StockChart, StockQuote, StockTransaction, UserProfile, WalletUpdateResponse,
};

use crate::core::error::Result;

/// One operation per backend endpoint.
///
/// The session store and wallet cache talk to the backend exclusively
/// through this trait, so tests can substitute a scripted implementation
/// for the real [`crate::services::api::ApiClient`].
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Authenticate; the backend answers with a session cookie.
    async fn login(&self, username: String, password: String) -> Result<MessageResponse>;

    /// Create an account. Does not authenticate; callers log in afterwards.
    async fn register(&self, request: RegisterRequest) -> Result<RegisteredUser>;

    /// Invalidate the session cookie server-side.
    async fn logout(&self) -> Result<MessageResponse>;

    /// Fetch the identity the ambient credential resolves to.
    async fn current_user(&self) -> Result<UserProfile>;

    /// Delete the signed-in account.
    async fn delete_account(&self) -> Result<()>;

    /// Fetch the wallet balance (bare JSON number on the wire).
    async fn wallet_balance(&self) -> Result<f64>;

    /// Set the wallet balance to an absolute value.
    async fn set_wallet_balance(&self, new_balance: f64) -> Result<WalletUpdateResponse>;

    /// List the signed-in user's holdings.
    async fn view_portfolio(&self) -> Result<Portfolio>;

    /// Buy shares of a ticker.
    async fn buy_stock(&self, ticker: &str, quantity: i64) -> Result<StockTransaction>;

    /// Sell shares of a ticker.
    async fn sell_stock(&self, ticker: &str, quantity: i64) -> Result<StockTransaction>;

    /// Key-figure quote for one ticker.
    async fn query_stock(&self, ticker: &str) -> Result<StockQuote>;

    /// Closing-price series for charting.
    async fn stock_chart(
        &self,
        ticker: &str,
        period: ChartPeriod,
        interval: ChartInterval,
    ) -> Result<StockChart>;

    /// Company name/symbol matches for a free-text search.
    async fn search_companies(&self, name: &str) -> Result<Vec<CompanyMatch>>;
}
