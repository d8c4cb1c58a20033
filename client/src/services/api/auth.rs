//! # Authentication Endpoints
//!
//! Session credential lifecycle: login, registration, logout, identity,
//! and account deletion. The credential itself lives in the client's
//! cookie store; none of these functions handle a token explicitly.

use shared::{LoginRequest, MessageResponse, RegisterRequest, RegisteredUser, UserProfile};

use super::client::ApiClient;
use crate::core::error::Result;

/// Login with username and password. On success the backend sets the
/// session cookie the client replays on every later request.
#[tracing::instrument(skip(client, password), fields(username = %username))]
pub async fn login(
    client: &ApiClient,
    username: String,
    password: String,
) -> Result<MessageResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest { username, password };

    let response = client
        .client
        .post(client.url("/user/login"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            crate::core::error::ApiError::from(e)
        })?;

    let status = response.status();
    if status.is_success() {
        let ack = response.json::<MessageResponse>().await?;
        tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful");
        Ok(ack)
    } else {
        let error = ApiClient::error_from(response).await;
        tracing::warn!(status = status.as_u16(), error = %error, "Login failed");
        Err(error)
    }
}

/// Create a new account. Registration does not authenticate; the caller
/// logs in afterwards with the same credentials.
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<RegisteredUser> {
    let response = client
        .client
        .post(client.url("/user/register"))
        .json(&request)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<RegisteredUser>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}

/// Invalidate the session cookie server-side.
pub async fn logout(client: &ApiClient) -> Result<MessageResponse> {
    let response = client
        .client
        .post(client.url("/user/logout"))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(response.json::<MessageResponse>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}

/// Fetch the identity the ambient credential resolves to. A 401 here is
/// the normal "not signed in" answer, not an exceptional condition.
pub async fn current_user(client: &ApiClient) -> Result<UserProfile> {
    let response = client.client.get(client.url("/user/me")).send().await?;

    if response.status().is_success() {
        Ok(response.json::<UserProfile>().await?)
    } else {
        Err(ApiClient::error_from(response).await)
    }
}

/// Delete the signed-in account. The backend answers 204 with no body.
pub async fn delete_account(client: &ApiClient) -> Result<()> {
    let response = client
        .client
        .delete(client.url("/user/delete"))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(ApiClient::error_from(response).await)
    }
}
