use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;

use crate::error::AppError;
use crate::types::checkout::{CheckoutRequest, CheckoutResponse};

use super::{CheckoutError, CHECKOUT_FALLBACK_MESSAGE, NETWORK_FAILURE_MESSAGE};

#[derive(Debug, Clone)]
pub struct CheckoutClient {
    client: Client,
    endpoint: String,
}

impl CheckoutClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(CheckoutClient {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the redirect URL of the new checkout session. Without a session
    /// token no request is made at all.
    pub async fn start_checkout(
        &self,
        request: &CheckoutRequest,
        session_token: Option<&str>,
    ) -> Result<String, CheckoutError> {
        let session_token = match session_token {
            Some(token) if !token.is_empty() => token,
            _ => return Err(CheckoutError::AuthRequired),
        };

        debug!("starting checkout for price {}", request.price_id);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(session_token)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        let body: CheckoutResponse = match serde_json::from_slice(&body) {
            Ok(body) => body,
            Err(err) => {
                warn!("checkout endpoint returned a malformed body ({}): {}", status, err);
                CheckoutResponse::default()
            }
        };

        let server_message = body.error.filter(|message| !message.is_empty());

        if !status.is_success() {
            let message = server_message.unwrap_or_else(|| String::from(CHECKOUT_FALLBACK_MESSAGE));
            warn!("checkout rejected with {}: {}", status, message);
            return Err(CheckoutError::Failed(message));
        }

        match body.url.filter(|url| !url.is_empty()) {
            Some(url) => Ok(url),
            None => Err(CheckoutError::Failed(
                server_message.unwrap_or_else(|| String::from(CHECKOUT_FALLBACK_MESSAGE)),
            )),
        }
    }
}

fn transport_error(err: reqwest::Error) -> CheckoutError {
    if err.is_timeout() {
        warn!("checkout request timed out: {}", err);
        return CheckoutError::TimedOut;
    }

    warn!("checkout request failed: {}", err);
    CheckoutError::Failed(String::from(NETWORK_FAILURE_MESSAGE))
}
