use crate::entitlement::SubscriptionSource;
use crate::error::AppError;
use crate::types::session::Session;
use crate::types::subscription::{SubscriptionRecord, SubscriptionRow};

use super::SupabaseClient;

pub const SUBSCRIPTIONS_PATH: &str = "/rest/v1/stripe_user_subscriptions\
?select=subscription_status,price_id,current_period_end,cancel_at_period_end";

impl SupabaseClient {
    /// Single-row-or-none read of the signed-in user's subscription. Row
    /// level security scopes the view to the token's owner. An empty result
    /// is a user who never subscribed, not an error.
    pub async fn query_subscription(&self, session: &Session) -> Result<Option<SubscriptionRecord>, AppError> {
        let response = self.get(SUBSCRIPTIONS_PATH, &session.access_token).send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_message = response.text().await?;
            return Err(AppError::FetchFailed(format!("{}: {}", status, error_message)));
        }

        let mut rows: Vec<SubscriptionRow> = response.json().await?;
        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.pop().map(SubscriptionRecord::from)),
            n => Err(AppError::FetchFailed(format!("expected at most one subscription row, got {}", n))),
        }
    }
}

impl SubscriptionSource for SupabaseClient {
    async fn fetch_subscription(&self, session: &Session) -> Result<Option<SubscriptionRecord>, AppError> {
        self.query_subscription(session).await
    }
}
