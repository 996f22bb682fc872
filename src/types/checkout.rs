use serde::{Deserialize, Serialize};

use super::plan::PurchaseMode;

// body of the POST to the checkout function
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub price_id: String,
    pub success_url: String,
    pub cancel_url: String,
    pub mode: PurchaseMode,
}

/// Either `url` or `error` is set; both are optional so a malformed body still
/// deserializes and is judged afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub url: Option<String>,
    pub error: Option<String>,
}
