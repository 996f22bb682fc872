#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header::{AUTHORIZATION, CONTENT_TYPE}, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use gz_movement::checkout::CheckoutClient;
use gz_movement::config::AppConfig;
use gz_movement::server::{app, AppState};
use gz_movement::supabase::SupabaseClient;

pub const GZ_SUBSCRIPTION: &str = "price_1Rld87B3EpSJW5YnV8tOpDWp";
pub const ONLINE_TRAINING: &str = "price_1RldKgB3EpSJW5Yns3fZoQr6";
// the mock checkout endpoint declines this one
pub const DECLINED_PRICE: &str = "price_1RldPRB3EpSJW5YnfboA5W46";

/// Serves `router` on an ephemeral port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", address)
}

/// Requests seen by a mock checkout endpoint.
#[derive(Clone, Default)]
pub struct Recorder {
    pub hits: Arc<AtomicUsize>,
    pub last_body: Arc<Mutex<Option<Value>>>,
    pub last_authorization: Arc<Mutex<Option<String>>>,
}

impl Recorder {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }

    pub fn last_authorization(&self) -> Option<String> {
        self.last_authorization.lock().unwrap().clone()
    }

    fn record(&self, headers: &HeaderMap, body: Value) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        *self.last_body.lock().unwrap() = Some(body);
        *self.last_authorization.lock().unwrap() = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
    }
}

/// A checkout endpoint that always answers with `status` and the raw `body`.
pub async fn checkout_endpoint(status: StatusCode, body: &'static str) -> (String, Recorder) {
    let recorder = Recorder::default();

    let router = Router::new()
        .route(
            "/checkout",
            post(
                move |State(recorder): State<Recorder>, headers: HeaderMap, request: String| async move {
                    recorder.record(&headers, serde_json::from_str(&request).unwrap_or(Value::Null));
                    (status, [(CONTENT_TYPE, "application/json")], body)
                },
            ),
        )
        .with_state(recorder.clone());

    let base = spawn(router).await;
    (format!("{}/checkout", base), recorder)
}

/// A checkout endpoint that never answers in time.
pub async fn stalled_checkout_endpoint(delay: std::time::Duration) -> (String, Recorder) {
    let recorder = Recorder::default();

    let router = Router::new()
        .route(
            "/checkout",
            post(move |State(recorder): State<Recorder>, headers: HeaderMap| async move {
                recorder.record(&headers, Value::Null);
                tokio::time::sleep(delay).await;
                Json(json!({ "url": "https://checkout.example.com/too-late" }))
            }),
        )
        .with_state(recorder.clone());

    let base = spawn(router).await;
    (format!("{}/checkout", base), recorder)
}

fn bearer(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string()
}

async fn auth_user(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    match bearer(&headers).as_str() {
        "active-token" => (StatusCode::OK, Json(json!({ "id": "user-active", "email": "active@example.com" }))),
        "lapsed-token" => (StatusCode::OK, Json(json!({ "id": "user-lapsed" }))),
        "fresh-token" => (StatusCode::OK, Json(json!({ "id": "user-fresh" }))),
        "crowded-token" => (StatusCode::OK, Json(json!({ "id": "user-crowded" }))),
        "outage-token" => (StatusCode::OK, Json(json!({ "id": "user-outage" }))),
        "auth-outage-token" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "msg": "database unavailable" }))),
        _ => (StatusCode::UNAUTHORIZED, Json(json!({ "msg": "invalid JWT" }))),
    }
}

async fn subscription_rows(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let renews = (Utc::now() + Duration::days(30)).timestamp();

    let rows = match bearer(&headers).as_str() {
        "outage-token" => {
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "relation unavailable" })))
        }
        // the view should never hold two rows for one user
        "crowded-token" => json!([
            { "subscription_status": "active", "price_id": GZ_SUBSCRIPTION },
            { "subscription_status": "active", "price_id": ONLINE_TRAINING },
        ]),
        "active-token" => json!([{
            "subscription_status": "active",
            "price_id": GZ_SUBSCRIPTION,
            "current_period_end": renews,
            "cancel_at_period_end": false,
        }]),
        "lapsed-token" => json!([{
            "subscription_status": "canceled",
            "price_id": GZ_SUBSCRIPTION,
            "current_period_end": null,
            "cancel_at_period_end": null,
        }]),
        _ => json!([]),
    };

    (StatusCode::OK, Json(rows))
}

async fn create_checkout(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    recorder.record(&headers, body.clone());

    if body["price_id"] == DECLINED_PRICE {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "card declined" })));
    }

    (StatusCode::OK, Json(json!({ "url": "https://checkout.example.com/session/1" })))
}

/// The auth/data service plus the checkout function, on one mock host.
pub async fn backend() -> (String, Recorder) {
    let recorder = Recorder::default();

    let router = Router::new()
        .route("/auth/v1/user", get(auth_user))
        .route("/rest/v1/stripe_user_subscriptions", get(subscription_rows))
        .route("/functions/v1/stripe-checkout", post(create_checkout))
        .with_state(recorder.clone());

    (spawn(router).await, recorder)
}

/// The whole service wired against a mock backend. Returns the service base
/// URL and the checkout recorder.
pub async fn service() -> (String, Recorder) {
    let (backend_url, recorder) = backend().await;

    let config = AppConfig::from_lookup(|name: &str| match name {
        "SUPABASE_URL" => Some(backend_url.clone()),
        "SUPABASE_ANON_KEY" => Some(String::from("anon-key")),
        "APP_ORIGIN" => Some(String::from("https://app.example.com")),
        _ => None,
    })
    .unwrap();

    let supabase = SupabaseClient::new(&config.supabase_url, &config.supabase_anon_key).unwrap();
    let checkout = CheckoutClient::new(&config.checkout_url, config.checkout_timeout).unwrap();

    let base = spawn(app(Arc::new(AppState::new(config, supabase, checkout)))).await;
    (base, recorder)
}
