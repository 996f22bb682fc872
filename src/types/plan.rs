use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlanId {
    #[serde(rename = "gz-subscription")]
    GzSubscription,
    #[serde(rename = "gz-online-training")]
    OnlineTraining,
    #[serde(rename = "gz-in-person-3-months")]
    InPersonThreeMonths,
    #[serde(rename = "gz-in-person-6-months")]
    InPersonSixMonths,
}

impl PlanId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::GzSubscription => "gz-subscription",
            PlanId::OnlineTraining => "gz-online-training",
            PlanId::InPersonThreeMonths => "gz-in-person-3-months",
            PlanId::InPersonSixMonths => "gz-in-person-6-months",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the payment processor bills a plan. The wire names are the
/// processor's checkout modes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PurchaseMode {
    #[serde(rename = "payment")]
    OneTime,
    #[serde(rename = "subscription")]
    Recurring,
}

impl PurchaseMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseMode::OneTime => "payment",
            PurchaseMode::Recurring => "subscription",
        }
    }

    // label rendered next to the display price
    pub fn price_unit(&self) -> &'static str {
        match self {
            PurchaseMode::OneTime => "one-time",
            PurchaseMode::Recurring => "/month",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Plan {
    pub id: PlanId,
    pub price_ref: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub display_price: &'static str,
    pub mode: PurchaseMode,
}
