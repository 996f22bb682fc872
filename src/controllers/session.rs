use axum::http::HeaderMap;
use log::{trace, warn};

use crate::entitlement::{load_subscription, AccountState, Store, StoreAction};
use crate::error::AppError;
use crate::server::AppState;
use crate::utilities::helpers::bearer_token;

use super::{error_response, Rejection};

// session first, subscription only once a session is confirmed
async fn account_for_token(token: &str, state: &AppState) -> Result<Option<AccountState>, AppError> {
    let session = match state.supabase.get_session(token).await? {
        Some(session) => session,
        None => return Ok(None),
    };

    let store = Store::new();
    let _trace = store.subscribe(|account| {
        trace!(
            "account state changed: signed_in={} settled={}",
            account.session.is_some(),
            account.is_settled()
        )
    });

    store.dispatch(StoreAction::SessionChanged(Some(session)));
    load_subscription(&store, &state.supabase).await;

    Ok(Some(store.snapshot()))
}

/// Account of the caller; 401 without a valid bearer token.
pub async fn require_account(headers: &HeaderMap, state: &AppState) -> Result<AccountState, Rejection> {
    let token = match bearer_token(headers) {
        Some(token) => token,
        None => return Err(error_response(AppError::AuthRequired)),
    };

    match account_for_token(&token, state).await {
        Ok(Some(account)) => Ok(account),
        Ok(None) => Err(error_response(AppError::AuthRequired)),
        Err(err) => {
            warn!("Error retrieving session: {}", err);
            Err(error_response(err))
        }
    }
}

/// Like [`require_account`], but anonymous callers (and an unreachable auth
/// service) just get `None`.
pub async fn optional_account(headers: &HeaderMap, state: &AppState) -> Option<AccountState> {
    let token = bearer_token(headers)?;

    match account_for_token(&token, state).await {
        Ok(account) => account,
        Err(err) => {
            warn!("Error retrieving session, continuing anonymously: {}", err);
            None
        }
    }
}
