use serde::Serialize;

use crate::entitlement::Entitlement;

pub const UNKNOWN_PLAN_TITLE: &str = "Active Subscription";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CurrentPlanBanner {
    pub title: String,
    // "Renews" or "Expires", absent when the period end is unknown
    pub date_label: Option<&'static str>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntitlementView {
    pub entitlement: Entitlement,
    pub active: bool,
    pub banner: Option<CurrentPlanBanner>,
}

impl EntitlementView {
    pub fn new(entitlement: Entitlement) -> Self {
        EntitlementView {
            active: entitlement.is_active(),
            banner: current_plan_banner(&entitlement),
            entitlement,
        }
    }
}

/// Only active subscriptions get a banner. A plan the catalog no longer
/// lists still shows, under a generic title.
pub fn current_plan_banner(entitlement: &Entitlement) -> Option<CurrentPlanBanner> {
    match entitlement {
        Entitlement::Active {
            plan,
            period_end,
            will_cancel,
        } => {
            let title = plan
                .map(|plan| plan.name.to_string())
                .unwrap_or_else(|| String::from(UNKNOWN_PLAN_TITLE));

            let date_label = period_end.map(|_| if *will_cancel { "Expires" } else { "Renews" });
            let date = period_end.map(|period_end| period_end.format("%Y-%m-%d").to_string());

            Some(CurrentPlanBanner {
                title,
                date_label,
                date,
            })
        }
        _ => None,
    }
}
