//! Session and subscription state for one account view.
//!
//! State only changes through [`reduce`]. Listeners registered with
//! [`Store::subscribe`] are called after every change and are removed when the
//! returned [`StoreSubscription`] is dropped.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

use chrono::{DateTime, Utc};
use log::{trace, warn};

use crate::error::AppError;
use crate::types::session::Session;
use crate::types::subscription::SubscriptionRecord;

use super::resolver::{resolve_entitlement, Entitlement, EntitlementPolicy};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubscriptionState {
    #[default]
    Idle,
    Loading,
    Settled(Option<SubscriptionRecord>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    pub session: Option<Session>,
    pub subscription: SubscriptionState,
}

impl AccountState {
    pub fn is_settled(&self) -> bool {
        matches!(self.subscription, SubscriptionState::Settled(_))
    }

    /// Checkout may only start once we know what the user already has.
    pub fn checkout_ready(&self) -> bool {
        self.session.is_some() && self.is_settled()
    }

    /// `None` until the subscription fetch has settled.
    pub fn entitlement(&self, policy: &EntitlementPolicy, now: DateTime<Utc>) -> Option<Entitlement> {
        match &self.subscription {
            SubscriptionState::Settled(record) => Some(resolve_entitlement(record.as_ref(), policy, now)),
            _ => None,
        }
    }

    fn is_current_user(&self, user_id: &str) -> bool {
        self.session
            .as_ref()
            .map(|session| session.user_id == user_id)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone)]
pub enum StoreAction {
    SessionChanged(Option<Session>),
    SubscriptionRequested { user_id: String },
    SubscriptionLoaded { user_id: String, record: Option<SubscriptionRecord> },
    SubscriptionFailed { user_id: String },
}

pub fn reduce(state: &AccountState, action: StoreAction) -> AccountState {
    match action {
        StoreAction::SessionChanged(None) => AccountState::default(),
        StoreAction::SessionChanged(Some(session)) => {
            // token refresh for the same user keeps what we already know
            let subscription = if state.is_current_user(&session.user_id) {
                state.subscription.clone()
            } else {
                SubscriptionState::Idle
            };

            AccountState {
                session: Some(session),
                subscription,
            }
        }
        StoreAction::SubscriptionRequested { user_id } => {
            if !state.is_current_user(&user_id) {
                return state.clone();
            }

            AccountState {
                session: state.session.clone(),
                subscription: SubscriptionState::Loading,
            }
        }
        StoreAction::SubscriptionLoaded { user_id, record } => {
            if !state.is_current_user(&user_id) || state.subscription != SubscriptionState::Loading {
                return state.clone();
            }

            AccountState {
                session: state.session.clone(),
                subscription: SubscriptionState::Settled(record),
            }
        }
        StoreAction::SubscriptionFailed { user_id } => {
            if !state.is_current_user(&user_id) || state.subscription != SubscriptionState::Loading {
                return state.clone();
            }

            // a failed fetch reads as "not subscribed"
            AccountState {
                session: state.session.clone(),
                subscription: SubscriptionState::Settled(None),
            }
        }
    }
}

type Listener = Arc<dyn Fn(&AccountState) + Send + Sync>;

#[derive(Default)]
struct StoreInner {
    state: AccountState,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<StoreInner>>,
}

impl Store {
    pub fn new() -> Self {
        Store::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> AccountState {
        self.lock().state.clone()
    }

    pub fn dispatch(&self, action: StoreAction) {
        let (state, listeners) = {
            let mut inner = self.lock();
            let next = reduce(&inner.state, action);
            if next == inner.state {
                return;
            }

            inner.state = next.clone();
            let listeners: Vec<Listener> = inner
                .listeners
                .iter()
                .map(|(_, listener)| Arc::clone(listener))
                .collect();
            (next, listeners)
        };

        // called without the lock so listeners may read the store
        for listener in listeners {
            listener(&state);
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> StoreSubscription
    where
        F: Fn(&AccountState) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        let id = inner.next_listener_id;
        inner.next_listener_id += 1;
        inner.listeners.push((id, Arc::new(listener)));

        StoreSubscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// Handle returned by [`Store::subscribe`]; dropping it unsubscribes.
pub struct StoreSubscription {
    id: u64,
    inner: Weak<Mutex<StoreInner>>,
}

impl Drop for StoreSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Where the current user's subscription row comes from.
pub trait SubscriptionSource {
    fn fetch_subscription(
        &self,
        session: &Session,
    ) -> impl Future<Output = Result<Option<SubscriptionRecord>, AppError>> + Send;
}

/// Fetches the subscription for the store's current session and settles it.
/// Does nothing without a session. Errors are logged and settle as "no
/// subscription".
pub async fn load_subscription<S: SubscriptionSource>(store: &Store, source: &S) {
    let session = match store.snapshot().session {
        Some(session) => session,
        None => {
            trace!("no session, skipping subscription fetch");
            return;
        }
    };

    let user_id = session.user_id.clone();
    store.dispatch(StoreAction::SubscriptionRequested {
        user_id: user_id.clone(),
    });

    match source.fetch_subscription(&session).await {
        Ok(record) => store.dispatch(StoreAction::SubscriptionLoaded { user_id, record }),
        Err(err) => {
            warn!("Error fetching subscription: {}", err);
            store.dispatch(StoreAction::SubscriptionFailed { user_id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn session(user_id: &str, token: &str) -> Session {
        Session {
            user_id: user_id.to_string(),
            email: None,
            access_token: token.to_string(),
        }
    }

    fn active_record() -> SubscriptionRecord {
        SubscriptionRecord {
            status: String::from("active"),
            price_ref: Some(String::from("price_1Rld87B3EpSJW5YnV8tOpDWp")),
            current_period_end: None,
            cancel_at_period_end: false,
        }
    }

    struct FakeSource {
        result: Result<Option<SubscriptionRecord>, String>,
        calls: AtomicUsize,
    }

    impl SubscriptionSource for FakeSource {
        async fn fetch_subscription(&self, _session: &Session) -> Result<Option<SubscriptionRecord>, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().map_err(AppError::FetchFailed)
        }
    }

    #[test]
    fn sign_out_clears_everything() {
        let state = AccountState {
            session: Some(session("u1", "t1")),
            subscription: SubscriptionState::Settled(Some(active_record())),
        };

        assert_eq!(reduce(&state, StoreAction::SessionChanged(None)), AccountState::default());
    }

    #[test]
    fn token_refresh_keeps_subscription_but_user_switch_resets_it() {
        let state = AccountState {
            session: Some(session("u1", "t1")),
            subscription: SubscriptionState::Settled(Some(active_record())),
        };

        let refreshed = reduce(&state, StoreAction::SessionChanged(Some(session("u1", "t2"))));
        assert_eq!(refreshed.subscription, state.subscription);
        assert_eq!(refreshed.session.unwrap().access_token, "t2");

        let switched = reduce(&state, StoreAction::SessionChanged(Some(session("u2", "t3"))));
        assert_eq!(switched.subscription, SubscriptionState::Idle);
    }

    #[test]
    fn stale_results_are_ignored() {
        let state = AccountState {
            session: Some(session("u2", "t")),
            subscription: SubscriptionState::Loading,
        };

        let next = reduce(
            &state,
            StoreAction::SubscriptionLoaded {
                user_id: String::from("u1"),
                record: Some(active_record()),
            },
        );
        assert_eq!(next, state);

        let next = reduce(&state, StoreAction::SubscriptionFailed { user_id: String::from("u1") });
        assert_eq!(next, state);
    }

    #[test]
    fn results_without_pending_request_are_ignored() {
        let state = AccountState {
            session: Some(session("u1", "t")),
            subscription: SubscriptionState::Idle,
        };

        let next = reduce(
            &state,
            StoreAction::SubscriptionLoaded {
                user_id: String::from("u1"),
                record: None,
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn request_without_session_is_ignored() {
        let state = AccountState::default();
        let next = reduce(&state, StoreAction::SubscriptionRequested { user_id: String::from("u1") });
        assert_eq!(next, state);
    }

    #[test]
    fn entitlement_waits_for_settled_state() {
        let mut state = AccountState {
            session: Some(session("u1", "t")),
            subscription: SubscriptionState::Loading,
        };
        assert!(state.entitlement(&EntitlementPolicy::default(), Utc::now()).is_none());
        assert!(!state.checkout_ready());

        state.subscription = SubscriptionState::Settled(None);
        assert_eq!(
            state.entitlement(&EntitlementPolicy::default(), Utc::now()),
            Some(Entitlement::NoSubscription)
        );
        assert!(state.checkout_ready());
    }

    #[test]
    fn listeners_run_until_unsubscribed() {
        let store = Store::new();
        let seen = Arc::new(AtomicUsize::new(0));

        let subscription = {
            let seen = Arc::clone(&seen);
            store.subscribe(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
        };
        assert_eq!(store.listener_count(), 1);

        store.dispatch(StoreAction::SessionChanged(Some(session("u1", "t"))));
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        // no change, no notification
        store.dispatch(StoreAction::SessionChanged(Some(session("u1", "t"))));
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        drop(subscription);
        assert_eq!(store.listener_count(), 0);

        store.dispatch(StoreAction::SessionChanged(None));
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn listeners_may_read_the_store() {
        let store = Store::new();
        let observed = Arc::new(Mutex::new(None));

        let _subscription = {
            let store_handle = store.clone();
            let observed = Arc::clone(&observed);
            store.subscribe(move |_| {
                *observed.lock().unwrap() = store_handle.snapshot().session;
            })
        };

        store.dispatch(StoreAction::SessionChanged(Some(session("u1", "t"))));
        assert_eq!(observed.lock().unwrap().as_ref().unwrap().user_id, "u1");
    }

    #[tokio::test]
    async fn load_subscription_skips_fetch_without_session() {
        let store = Store::new();
        let source = FakeSource {
            result: Ok(Some(active_record())),
            calls: AtomicUsize::new(0),
        };

        load_subscription(&store, &source).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.snapshot(), AccountState::default());
    }

    #[tokio::test]
    async fn load_subscription_settles_the_record() {
        let store = Store::new();
        store.dispatch(StoreAction::SessionChanged(Some(session("u1", "t"))));
        let source = FakeSource {
            result: Ok(Some(active_record())),
            calls: AtomicUsize::new(0),
        };

        load_subscription(&store, &source).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            store.snapshot().subscription,
            SubscriptionState::Settled(Some(active_record()))
        );
    }

    #[tokio::test]
    async fn failed_fetch_settles_as_not_subscribed() {
        let store = Store::new();
        store.dispatch(StoreAction::SessionChanged(Some(session("u1", "t"))));
        let source = FakeSource {
            result: Err(String::from("connection reset")),
            calls: AtomicUsize::new(0),
        };

        load_subscription(&store, &source).await;

        let state = store.snapshot();
        assert_eq!(state.subscription, SubscriptionState::Settled(None));
        assert_eq!(
            state.entitlement(&EntitlementPolicy::default(), Utc::now()),
            Some(Entitlement::NoSubscription)
        );
    }
}
