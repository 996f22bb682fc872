use crate::server::AppState;
use crate::types::generic::GenericResponse;
use crate::utilities::api_messages::{APIMessages, CatalogMessages};
use crate::utilities::helpers::success;
use crate::views::pricing::plan_cards;

use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;

use super::session::optional_account;

// pricing page, signed in or not
pub async fn list_plans(headers: HeaderMap, state: Arc<AppState>) -> (StatusCode, Json<GenericResponse>) {
    let entitlement = optional_account(&headers, &state)
        .await
        .and_then(|account| account.entitlement(&state.config.entitlement_policy, Utc::now()));

    let cards = plan_cards(entitlement.as_ref());

    success(
        APIMessages::Catalog(CatalogMessages::Found),
        json!({ "plans": cards }),
    )
}
