use axum::error_handling::HandleErrorLayer;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use axum::{BoxError, Json};
use axum::{routing::{get, post}, Router};

use crate::controllers::{checkout::start_checkout, entitlement::get_entitlement};
use crate::server::AppState;
use crate::types::incoming_requests::StartCheckout;
use std::{sync::Arc, time::Duration};

use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

// /api/me
// the rate limit is one bucket for every caller, sized for the whole user base
pub fn get_me_router(app_state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/entitlement",
            get({
                let app_state = Arc::clone(&app_state);
                move |headers: HeaderMap| get_entitlement(headers, app_state)
            }),
        )
        .route(
            "/checkout",
            post({
                let app_state = Arc::clone(&app_state);
                move |headers: HeaderMap, payload: Result<Json<StartCheckout>, JsonRejection>| {
                    start_checkout(headers, payload, app_state)
                }
            }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Unhandled error: {}", err),
                    )
                }))
                .layer(BufferLayer::new(64))
                .layer(RateLimitLayer::new(600, Duration::from_secs(60))),
        )
}
