use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::catalog::find_plan_by_price_ref;
use crate::types::plan::Plan;
use crate::types::subscription::SubscriptionRecord;

/// Statuses that grant access. Anything else the processor reports
/// ("canceled", "past_due", "incomplete", "unpaid", ...) does not.
pub const ENTITLED_STATUSES: [&str; 2] = ["active", "trialing"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntitlementPolicy {
    /// When set, an entitled status only counts while `current_period_end`
    /// is still ahead of `now`. Records without a period end are unaffected.
    pub require_unexpired_period: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Entitlement {
    NoSubscription,
    Active {
        // None when the price is not (or no longer) in the catalog
        plan: Option<&'static Plan>,
        period_end: Option<DateTime<Utc>>,
        will_cancel: bool,
    },
    Inactive {
        plan: Option<&'static Plan>,
    },
}

impl Entitlement {
    pub fn is_active(&self) -> bool {
        matches!(self, Entitlement::Active { .. })
    }

    pub fn plan(&self) -> Option<&'static Plan> {
        match self {
            Entitlement::NoSubscription => None,
            Entitlement::Active { plan, .. } => *plan,
            Entitlement::Inactive { plan } => *plan,
        }
    }

    pub fn state(&self) -> &'static str {
        match self {
            Entitlement::NoSubscription => "no_subscription",
            Entitlement::Active { .. } => "active",
            Entitlement::Inactive { .. } => "inactive",
        }
    }
}

pub fn resolve_entitlement(
    record: Option<&SubscriptionRecord>,
    policy: &EntitlementPolicy,
    now: DateTime<Utc>,
) -> Entitlement {
    let record = match record {
        Some(record) => record,
        None => return Entitlement::NoSubscription,
    };

    let plan = record
        .price_ref
        .as_deref()
        .and_then(find_plan_by_price_ref);

    let period_end = record
        .current_period_end
        .and_then(|seconds| Utc.timestamp_opt(seconds, 0).single());

    if !ENTITLED_STATUSES.contains(&record.status.as_str()) {
        return Entitlement::Inactive { plan };
    }

    if policy.require_unexpired_period {
        if let Some(period_end) = period_end {
            if period_end <= now {
                return Entitlement::Inactive { plan };
            }
        }
    }

    Entitlement::Active {
        plan,
        period_end,
        will_cancel: record.cancel_at_period_end,
    }
}

pub fn is_current_plan(entitlement: &Entitlement, price_ref: &str) -> bool {
    match entitlement {
        Entitlement::Active { plan: Some(plan), .. } => plan.price_ref == price_ref,
        _ => false,
    }
}
