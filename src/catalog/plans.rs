use crate::types::plan::{Plan, PlanId, PurchaseMode};

pub static PLANS: [Plan; 4] = [
    Plan {
        id: PlanId::GzSubscription,
        price_ref: "price_1Rld87B3EpSJW5YnV8tOpDWp",
        name: "GZ Movement Subscription",
        description: "Monthly access to all workouts and programs + 7-day free trial",
        display_price: "$9.99",
        mode: PurchaseMode::Recurring,
    },
    Plan {
        id: PlanId::OnlineTraining,
        price_ref: "price_1RldKgB3EpSJW5Yns3fZoQr6",
        name: "GZ Movement Personal Online Training",
        description: "6-Month Commitment",
        display_price: "$350.00",
        mode: PurchaseMode::Recurring,
    },
    Plan {
        id: PlanId::InPersonThreeMonths,
        price_ref: "price_1RldOdB3EpSJW5YnXlFL4F8c",
        name: "GZ Movement In Person Training 3 Months",
        description: "3-month commitment - 3-4 sessions a week, daily check-ins, guidance, and support.",
        display_price: "$1,250.00",
        mode: PurchaseMode::Recurring,
    },
    Plan {
        id: PlanId::InPersonSixMonths,
        price_ref: "price_1RldPRB3EpSJW5YnfboA5W46",
        name: "GZ Movement In Person Training 6 Months",
        description: "6 Month Commitment, 3-4 sessions a week",
        display_price: "$1,000.00",
        mode: PurchaseMode::Recurring,
    },
];

// highlighted on the pricing screen
pub const POPULAR_PLAN: PlanId = PlanId::GzSubscription;
