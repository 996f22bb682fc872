use serde::Serialize;

use crate::catalog::{features_for, plans, plans::POPULAR_PLAN};
use crate::entitlement::{is_current_plan, Entitlement};
use crate::types::plan::Plan;

#[derive(Debug, Clone, Serialize)]
pub struct PlanCard {
    pub plan: &'static Plan,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub current: bool,
    pub price_unit: &'static str,
    pub action_label: &'static str,
    // the purchase button is disabled on the current plan
    pub purchasable: bool,
}

/// One card per catalog entry, in catalog order. `entitlement` is `None` for
/// anonymous visitors.
pub fn plan_cards(entitlement: Option<&Entitlement>) -> Vec<PlanCard> {
    let subscribed = entitlement.map(Entitlement::is_active).unwrap_or(false);

    plans()
        .iter()
        .map(|plan| {
            let popular = plan.id == POPULAR_PLAN;
            let current = entitlement
                .map(|entitlement| is_current_plan(entitlement, plan.price_ref))
                .unwrap_or(false);

            let action_label = if current {
                "Current Plan"
            } else if popular && !subscribed {
                "Start Free Trial"
            } else {
                "Get Started"
            };

            PlanCard {
                plan,
                features: features_for(plan.id),
                popular,
                current,
                price_unit: plan.mode.price_unit(),
                action_label,
                purchasable: !current,
            }
        })
        .collect()
}
