use crate::entitlement::store::SubscriptionState;
use crate::entitlement::Entitlement;
use crate::server::AppState;
use crate::types::generic::GenericResponse;
use crate::utilities::api_messages::{APIMessages, SubscriptionMessages};
use crate::utilities::helpers::success;
use crate::views::account::EntitlementView;

use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use log::warn;
use serde_json::json;
use std::sync::Arc;

use super::session::require_account;

pub async fn get_entitlement(headers: HeaderMap, state: Arc<AppState>) -> (StatusCode, Json<GenericResponse>) {
    let account = match require_account(&headers, &state).await {
        Ok(account) => account,
        Err((status_code, json)) => return (status_code, json),
    };

    let entitlement = account
        .entitlement(&state.config.entitlement_policy, Utc::now())
        .unwrap_or(Entitlement::NoSubscription);

    if let SubscriptionState::Settled(Some(record)) = &account.subscription {
        if let (Some(price_ref), None) = (&record.price_ref, entitlement.plan()) {
            warn!("subscription references price {} which is not in the catalog", price_ref);
        }
    }

    success(
        APIMessages::Subscription(SubscriptionMessages::Found),
        json!(EntitlementView::new(entitlement)),
    )
}
