mod common;

use gz_movement::entitlement::store::SubscriptionState;
use gz_movement::entitlement::{load_subscription, Store, StoreAction};
use gz_movement::error::AppError;
use gz_movement::supabase::SupabaseClient;
use gz_movement::types::session::Session;

use common::{backend, GZ_SUBSCRIPTION};

async fn client() -> SupabaseClient {
    let (base, _) = backend().await;
    SupabaseClient::new(&base, "anon-key").unwrap()
}

fn session(user_id: &str, token: &str) -> Session {
    Session {
        user_id: user_id.to_string(),
        email: None,
        access_token: token.to_string(),
    }
}

#[tokio::test]
async fn resolves_sessions() {
    let client = client().await;

    let session = client.get_session("active-token").await.unwrap().unwrap();
    assert_eq!(session.user_id, "user-active");
    assert_eq!(session.email.as_deref(), Some("active@example.com"));
    assert_eq!(session.access_token, "active-token");

    assert!(client.get_session("stale-token").await.unwrap().is_none());
    assert!(client.get_session("").await.unwrap().is_none());
}

#[tokio::test]
async fn auth_service_errors_are_not_sign_outs() {
    let client = client().await;

    let result = client.get_session("auth-outage-token").await;
    assert!(matches!(result, Err(AppError::FetchFailed(_))));
}

#[tokio::test]
async fn reads_zero_or_one_row() {
    let client = client().await;

    let record = client
        .query_subscription(&session("user-active", "active-token"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(record.status, "active");
    assert_eq!(record.price_ref.as_deref(), Some(GZ_SUBSCRIPTION));

    let record = client
        .query_subscription(&session("user-fresh", "fresh-token"))
        .await
        .unwrap();
    assert!(record.is_none());
}

#[tokio::test]
async fn more_than_one_row_is_a_fetch_failure() {
    let client = client().await;

    let result = client
        .query_subscription(&session("user-crowded", "crowded-token"))
        .await;
    assert!(matches!(result, Err(AppError::FetchFailed(message)) if message.contains("got 2")));
}

#[tokio::test]
async fn failed_query_settles_as_no_subscription() {
    let client = client().await;

    let result = client
        .query_subscription(&session("user-outage", "outage-token"))
        .await;
    assert!(matches!(result, Err(AppError::FetchFailed(_))));

    let store = Store::new();
    store.dispatch(StoreAction::SessionChanged(Some(session("user-outage", "outage-token"))));
    load_subscription(&store, &client).await;

    assert_eq!(store.snapshot().subscription, SubscriptionState::Settled(None));
}
