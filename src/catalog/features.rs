use crate::types::plan::PlanId;

pub static PLAN_FEATURES: [(PlanId, &[&str]); 4] = [
    (
        PlanId::InPersonSixMonths,
        &[
            "In-person training sessions",
            "3-4 sessions per week",
            "Personalized workout plans",
            "Progress tracking",
            "Nutritional guidance",
            "6-month commitment",
        ],
    ),
    (
        PlanId::InPersonThreeMonths,
        &[
            "In-person training sessions",
            "3-4 sessions per week",
            "Daily check-ins",
            "Guidance and support",
            "Personalized plans",
            "3-month commitment",
        ],
    ),
    (
        PlanId::OnlineTraining,
        &[
            "Personal online training",
            "Custom workout plans",
            "Video consultations",
            "Progress monitoring",
            "Flexible scheduling",
            "6-month commitment",
        ],
    ),
    (
        PlanId::GzSubscription,
        &[
            "Access to all workouts",
            "GZ signature programs",
            "Mobile app access",
            "Progress tracking",
            "Community support",
            "7-day free trial",
        ],
    ),
];
