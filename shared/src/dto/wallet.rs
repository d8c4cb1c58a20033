use serde::{Deserialize, Serialize};

/// Response of `PUT /user/wallet`.
///
/// `GET /user/wallet` has no DTO: it returns a bare JSON number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletUpdateResponse {
    pub message: String,
    pub new_balance: f64,
}
