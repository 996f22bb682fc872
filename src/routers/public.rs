use axum::error_handling::HandleErrorLayer;
use axum::http::{HeaderMap, StatusCode};
use axum::BoxError;
use axum::{routing::get, Router};

use crate::controllers::catalog::list_plans;
use crate::server::AppState;
use std::{sync::Arc, time::Duration};

use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

// /api/public
pub fn get_public_router(app_state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/plans",
            get({
                let app_state = Arc::clone(&app_state);
                move |headers: HeaderMap| list_plans(headers, app_state)
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
                .layer(BufferLayer::new(128))
                .layer(RateLimitLayer::new(1200, Duration::from_secs(60))),
        )
}
