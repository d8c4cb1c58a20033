//! # Portfolio Endpoints
//!
//! Holdings listing and buy/sell trades.

use shared::{Portfolio, StockTransaction};

use super::client::ApiClient;
use crate::core::error::Result;

/// List the signed-in user's holdings.
pub async fn view_portfolio(client: &ApiClient) -> Result<Portfolio> {
    let response = client
        .client
        .get(client.url("/portfolio/view"))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<Portfolio>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}

/// Buy shares. The backend echoes the transaction on success; a rejected
/// trade (insufficient funds, unknown ticker) comes back as a 400 with
/// the reason in the detail string.
pub async fn buy_stock(
    client: &ApiClient,
    ticker: &str,
    quantity: i64,
) -> Result<StockTransaction> {
    trade(client, "/portfolio/buy", ticker, quantity).await
}

/// Sell shares. Selling more than the held quantity is rejected
/// server-side the same way a failed buy is.
pub async fn sell_stock(
    client: &ApiClient,
    ticker: &str,
    quantity: i64,
) -> Result<StockTransaction> {
    trade(client, "/portfolio/sell", ticker, quantity).await
}

async fn trade(
    client: &ApiClient,
    path: &str,
    ticker: &str,
    quantity: i64,
) -> Result<StockTransaction> {
    let request = StockTransaction {
        ticker: ticker.to_string(),
        quantity,
    };

    let response = client
        .client
        .post(client.url(path))
        .json(&request)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<StockTransaction>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}
