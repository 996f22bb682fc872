use crate::checkout::{CheckoutClient, CheckoutGuard};
use crate::config::AppConfig;
use crate::routers::{content::get_content_router, me::get_me_router, public::get_public_router};
use crate::supabase::SupabaseClient;
use crate::utilities::helpers::fallback;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::{http::Method, Router};
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{compression::CompressionLayer, cors::{Any, CorsLayer}};

pub struct AppState {
    pub config: AppConfig,
    pub supabase: SupabaseClient,
    pub checkout: CheckoutClient,
    pub checkout_guard: CheckoutGuard,
}

impl AppState {
    pub fn new(config: AppConfig, supabase: SupabaseClient, checkout: CheckoutClient) -> Self {
        AppState {
            config,
            supabase,
            checkout,
            checkout_guard: CheckoutGuard::new(),
        }
    }
}

pub fn app(app_state: Arc<AppState>) -> Router {
    let api = Router::new()
        .nest("/public", get_public_router(Arc::clone(&app_state)))
        .nest("/me", get_me_router(Arc::clone(&app_state)))
        .nest("/content", get_content_router(Arc::clone(&app_state)));

    let cors = CorsLayer::new()
        .allow_credentials(false)
        .allow_methods([Method::GET, Method::POST])
        // browsers send both on every signed-in call
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .nest("/api", api)
        .layer(cors)
        .layer(CompressionLayer::new())
        .fallback(fallback)
        .with_state(app_state)
}

pub async fn init(app_state: Arc<AppState>) {
    let address = app_state.config.address();
    let app = app(app_state);

    let listener = match TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => panic!("Error binding {}: {}", address, e),
    };

    info!("Server running on {}", address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Error starting server: {}", e);
    }
}
