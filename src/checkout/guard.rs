use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

type InFlightKey = (String, String);

/// Pending checkouts keyed by (user id, price reference). Two concurrent
/// requests for the same key would open two payment sessions, so the second
/// one is turned away while the first is running.
#[derive(Debug, Clone, Default)]
pub struct CheckoutGuard {
    in_flight: Arc<Mutex<HashSet<InFlightKey>>>,
}

impl CheckoutGuard {
    pub fn new() -> Self {
        CheckoutGuard::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<InFlightKey>> {
        self.in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// `None` when a checkout for the same user and price is still pending.
    pub fn try_acquire(&self, user_id: &str, price_ref: &str) -> Option<CheckoutTicket> {
        let key = (user_id.to_string(), price_ref.to_string());
        if !self.lock().insert(key.clone()) {
            return None;
        }

        Some(CheckoutTicket {
            guard: self.clone(),
            key,
        })
    }

    #[cfg(test)]
    pub(crate) fn is_pending(&self, user_id: &str, price_ref: &str) -> bool {
        self.lock()
            .contains(&(user_id.to_string(), price_ref.to_string()))
    }
}

/// Held for the duration of one checkout request; released on drop.
#[derive(Debug)]
pub struct CheckoutTicket {
    guard: CheckoutGuard,
    key: InFlightKey,
}

impl Drop for CheckoutTicket {
    fn drop(&mut self) {
        self.guard.lock().remove(&self.key);
    }
}
