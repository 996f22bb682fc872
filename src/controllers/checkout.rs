use crate::catalog::find_plan_by_price_ref;
use crate::entitlement::{is_current_plan, Entitlement};
use crate::error::AppError;
use crate::server::AppState;
use crate::types::checkout::CheckoutRequest;
use crate::types::generic::GenericResponse;
use crate::types::incoming_requests::StartCheckout;
use crate::utilities::api_messages::{APIMessages, CheckoutMessages};
use crate::utilities::helpers::{failure, payload_analyzer, success};
use crate::checkout::CheckoutError;

use axum::http::{HeaderMap, StatusCode};
use axum::{extract::rejection::JsonRejection, Json};
use chrono::Utc;
use log::{info, warn};
use serde_json::json;
use std::sync::Arc;

use super::error_response;
use super::session::require_account;

pub async fn start_checkout(
    headers: HeaderMap,
    payload_result: Result<Json<StartCheckout>, JsonRejection>,
    state: Arc<AppState>,
) -> (StatusCode, Json<GenericResponse>) {
    let payload = match payload_analyzer(payload_result) {
        Ok(payload) => payload,
        Err((status_code, json)) => return (status_code, json),
    };

    let account = match require_account(&headers, &state).await {
        Ok(account) => account,
        Err((status_code, json)) => return (status_code, json),
    };

    let session = match &account.session {
        Some(session) => session,
        None => return error_response(AppError::AuthRequired),
    };

    let plan = match find_plan_by_price_ref(&payload.price_id) {
        Some(plan) => plan,
        None => {
            warn!("checkout requested for unknown price {}", payload.price_id);
            return error_response(AppError::UnknownPlan(payload.price_id.clone()));
        }
    };

    // we must know the current plan before sending anyone to pay
    if !account.checkout_ready() {
        return failure(
            StatusCode::CONFLICT,
            APIMessages::Checkout(CheckoutMessages::NotReady),
            json!({}),
        );
    }

    let entitlement = account
        .entitlement(&state.config.entitlement_policy, Utc::now())
        .unwrap_or(Entitlement::NoSubscription);

    if is_current_plan(&entitlement, plan.price_ref) {
        return failure(
            StatusCode::CONFLICT,
            APIMessages::Checkout(CheckoutMessages::AlreadySubscribed),
            json!({ "price_id": plan.price_ref }),
        );
    }

    let _ticket = match state.checkout_guard.try_acquire(&session.user_id, plan.price_ref) {
        Some(ticket) => ticket,
        None => return error_response(AppError::Checkout(CheckoutError::InProgress)),
    };

    let request = CheckoutRequest {
        price_id: plan.price_ref.to_string(),
        success_url: state.config.success_url(),
        cancel_url: state.config.cancel_url(),
        mode: plan.mode,
    };

    match state
        .checkout
        .start_checkout(&request, Some(&session.access_token))
        .await
    {
        Ok(url) => {
            info!("checkout session created for user {} ({})", session.user_id, plan.id.as_str());
            success(
                APIMessages::Checkout(CheckoutMessages::Created),
                json!({ "url": url }),
            )
        }
        Err(err) => error_response(AppError::Checkout(err)),
    }
}
