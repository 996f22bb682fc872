use axum::error_handling::HandleErrorLayer;
use axum::extract::{rejection::QueryRejection, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::BoxError;
use axum::{routing::get, Router};

use crate::controllers::content::{get_progress, get_schedule, list_workouts};
use crate::server::AppState;
use crate::types::incoming_requests::{ProgressQueryParams, ScheduleQueryParams, WorkoutsQueryParams};
use std::{sync::Arc, time::Duration};

use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};

// /api/content
pub fn get_content_router(app_state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/workouts",
            get({
                let app_state = Arc::clone(&app_state);
                move |headers: HeaderMap, query: Result<Query<WorkoutsQueryParams>, QueryRejection>| {
                    list_workouts(headers, query, app_state)
                }
            }),
        )
        .route(
            "/schedule",
            get({
                let app_state = Arc::clone(&app_state);
                move |headers: HeaderMap, query: Result<Query<ScheduleQueryParams>, QueryRejection>| {
                    get_schedule(headers, query, app_state)
                }
            }),
        )
        .route(
            "/progress",
            get({
                let app_state = Arc::clone(&app_state);
                move |headers: HeaderMap, query: Result<Query<ProgressQueryParams>, QueryRejection>| {
                    get_progress(headers, query, app_state)
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
                .layer(BufferLayer::new(128))
                .layer(RateLimitLayer::new(1200, Duration::from_secs(60))),
        )
}
