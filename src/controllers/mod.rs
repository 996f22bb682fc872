pub mod catalog;
pub mod checkout;
pub mod content;
pub mod entitlement;
pub mod session;

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::checkout::CheckoutError;
use crate::error::AppError;
use crate::types::generic::GenericResponse;
use crate::utilities::api_messages::{APIMessages, AuthMessages, CatalogMessages, CheckoutMessages};
use crate::utilities::helpers::failure;

pub type Rejection = (StatusCode, Json<GenericResponse>);

/// Maps library errors onto the response envelope. Checkout failures carry the
/// user-facing text in `data.error`.
pub fn error_response(err: AppError) -> Rejection {
    match err {
        AppError::AuthRequired => failure(
            StatusCode::UNAUTHORIZED,
            APIMessages::Auth(AuthMessages::Required),
            json!({}),
        ),
        AppError::UnknownPlan(price_ref) => failure(
            StatusCode::NOT_FOUND,
            APIMessages::Catalog(CatalogMessages::PlanNotFound),
            json!({ "price_id": price_ref }),
        ),
        AppError::Checkout(err) => checkout_error_response(err),
        AppError::FetchFailed(_) | AppError::Http(_) => failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            APIMessages::Auth(AuthMessages::ErrorRetrievingSession),
            json!({}),
        ),
    }
}

fn checkout_error_response(err: CheckoutError) -> Rejection {
    let (status, message) = match err {
        CheckoutError::AuthRequired => {
            return error_response(AppError::AuthRequired);
        }
        CheckoutError::Failed(_) => (StatusCode::BAD_GATEWAY, CheckoutMessages::Failed),
        CheckoutError::TimedOut => (StatusCode::GATEWAY_TIMEOUT, CheckoutMessages::TimedOut),
        CheckoutError::InProgress => (StatusCode::CONFLICT, CheckoutMessages::AlreadyInProgress),
    };

    failure(
        status,
        APIMessages::Checkout(message),
        json!({ "error": err.to_string() }),
    )
}
