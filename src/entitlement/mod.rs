pub mod resolver;
pub mod store;

pub use resolver::{is_current_plan, resolve_entitlement, Entitlement, EntitlementPolicy};
pub use store::{load_subscription, AccountState, Store, StoreAction, SubscriptionSource};
