use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartCheckout {
    pub price_id: String,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutsQueryParams {
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQueryParams {
    pub day: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressQueryParams {
    pub period: Option<String>,
}
