//! # Wallet Endpoints
//!
//! Balance read and absolute-value write for the signed-in user.

use shared::WalletUpdateResponse;

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch the current wallet balance. The backend returns a bare JSON
/// number rather than an object.
pub async fn wallet_balance(client: &ApiClient) -> Result<f64> {
    let response = client.client.get(client.url("/user/wallet")).send().await?;

    if response.status().is_success() {
        Ok(response.json::<f64>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}

/// Set the wallet balance to an absolute value via the `new_balance`
/// query parameter. Callers compute the target with
/// [`crate::utils::validation::apply_delta`] first; the backend remains
/// the authority on whether the write lands.
pub async fn set_wallet_balance(
    client: &ApiClient,
    new_balance: f64,
) -> Result<WalletUpdateResponse> {
    let response = client
        .client
        .put(client.url("/user/wallet"))
        .query(&[("new_balance", new_balance)])
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<WalletUpdateResponse>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}
