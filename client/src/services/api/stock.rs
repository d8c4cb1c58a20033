//! # Stock Data Endpoints
//!
//! Quotes, chart series, and company search. These are read-only proxies
//! to the backend's market-data source; the client does no pricing
//! computation of its own.

use shared::{ChartInterval, ChartPeriod, CompanyMatch, StockChart, StockQuote};

use super::client::ApiClient;
use crate::core::error::Result;

/// Key-figure quote for one ticker. Unknown tickers come back as 404.
pub async fn query_stock(client: &ApiClient, ticker: &str) -> Result<StockQuote> {
    let response = client
        .client
        .get(client.url(&format!("/stock/query/{ticker}")))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<StockQuote>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}

/// Closing-price series for a ticker over the given window.
pub async fn stock_chart(
    client: &ApiClient,
    ticker: &str,
    period: ChartPeriod,
    interval: ChartInterval,
) -> Result<StockChart> {
    let response = client
        .client
        .get(client.url(&format!("/stock/chart/{ticker}")))
        .query(&[("period", period.as_str()), ("interval", interval.as_str())])
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<StockChart>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}

/// Company name/symbol matches for a free-text search. This endpoint is
/// quota-limited upstream: a 429 maps to
/// [`crate::core::error::ApiError::RateLimited`], which the search UI
/// uses to fall back to direct ticker entry.
pub async fn search_companies(client: &ApiClient, name: &str) -> Result<Vec<CompanyMatch>> {
    let response = client
        .client
        .get(client.url(&format!("/stock/search/{name}")))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<Vec<CompanyMatch>>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}
