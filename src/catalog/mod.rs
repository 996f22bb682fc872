//! The fixed list of purchasable plans and their feature bullets.
//!
//! Lookups never fail: a price reference the catalog does not know (a legacy
//! price, a foreign one, or garbage) is simply `None`.

pub mod features;
pub mod plans;

use std::collections::HashSet;

use regex::Regex;

use crate::error::CatalogError;
use crate::types::plan::{Plan, PlanId};

use self::features::PLAN_FEATURES;
use self::plans::PLANS;

pub fn plans() -> &'static [Plan] {
    &PLANS
}

pub fn find_plan_by_price_ref(price_ref: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.price_ref == price_ref)
}

pub fn find_plan_by_id(id: PlanId) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.id == id)
}

pub fn features_for(id: PlanId) -> &'static [&'static str] {
    let features = PLAN_FEATURES
        .iter()
        .find(|(plan_id, _)| *plan_id == id)
        .map(|(_, features)| *features)
        .unwrap_or(&[]);

    debug_assert!(!features.is_empty(), "plan {} has no feature list", id.as_str());
    features
}

/// Checked once at startup, the service refuses to boot on a bad catalog.
pub fn validate_catalog() -> Result<(), CatalogError> {
    validate_plans(&PLANS, &PLAN_FEATURES)
}

fn validate_plans(plans: &[Plan], features: &[(PlanId, &[&str])]) -> Result<(), CatalogError> {
    let price_ref_format = Regex::new(r"^price_[A-Za-z0-9]+$").unwrap();

    let mut ids = HashSet::new();
    let mut price_refs = HashSet::new();

    for plan in plans {
        if !ids.insert(plan.id) {
            return Err(CatalogError::DuplicateId(plan.id.to_string()));
        }

        if !price_refs.insert(plan.price_ref) {
            return Err(CatalogError::DuplicatePriceRef(plan.price_ref.to_string()));
        }

        if !price_ref_format.is_match(plan.price_ref) {
            return Err(CatalogError::MalformedPriceRef(plan.price_ref.to_string()));
        }

        let has_features = features
            .iter()
            .any(|(plan_id, list)| *plan_id == plan.id && !list.is_empty());
        if !has_features {
            return Err(CatalogError::MissingFeatures(plan.id.to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::plan::PurchaseMode;

    #[test]
    fn shipped_catalog_is_valid() {
        assert_eq!(validate_catalog(), Ok(()));
        for plan in plans() {
            assert!(!features_for(plan.id).is_empty());
        }
    }

    #[test]
    fn finds_known_price_refs() {
        let plan = find_plan_by_price_ref("price_1Rld87B3EpSJW5YnV8tOpDWp").unwrap();
        assert_eq!(plan.id, PlanId::GzSubscription);
        assert_eq!(plan.name, "GZ Movement Subscription");
        assert_eq!(plan.mode, PurchaseMode::Recurring);

        let plan = find_plan_by_price_ref("price_1RldPRB3EpSJW5YnfboA5W46").unwrap();
        assert_eq!(plan.display_price, "$1,000.00");
    }

    #[test]
    fn unknown_price_refs_are_not_found() {
        for price_ref in [
            "",
            "price_",
            "price_unknown",
            "PRICE_1RLD87B3EPSJW5YNV8TOPDWP",
            " price_1Rld87B3EpSJW5YnV8tOpDWp",
            "gz-subscription",
            "\u{0}",
        ] {
            assert!(find_plan_by_price_ref(price_ref).is_none(), "{price_ref:?}");
        }
    }

    #[test]
    fn finds_plans_by_id() {
        let plan = find_plan_by_id(PlanId::OnlineTraining).unwrap();
        assert_eq!(plan.price_ref, "price_1RldKgB3EpSJW5Yns3fZoQr6");
    }

    #[test]
    fn rejects_duplicate_price_refs() {
        let mut broken = PLANS.to_vec();
        broken[1].price_ref = broken[0].price_ref;

        assert_eq!(
            validate_plans(&broken, &PLAN_FEATURES),
            Err(CatalogError::DuplicatePriceRef(broken[0].price_ref.to_string()))
        );
    }

    #[test]
    fn rejects_malformed_price_refs() {
        let mut broken = PLANS.to_vec();
        broken[2].price_ref = "prod_123";

        assert_eq!(
            validate_plans(&broken, &PLAN_FEATURES),
            Err(CatalogError::MalformedPriceRef(String::from("prod_123")))
        );
    }

    #[test]
    fn rejects_plans_without_features() {
        let features: Vec<(PlanId, &[&str])> = PLAN_FEATURES
            .iter()
            .filter(|(plan_id, _)| *plan_id != PlanId::OnlineTraining)
            .cloned()
            .collect();

        assert_eq!(
            validate_plans(&PLANS, &features),
            Err(CatalogError::MissingFeatures(String::from("gz-online-training")))
        );
    }
}
