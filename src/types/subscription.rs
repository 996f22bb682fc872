use serde::{Deserialize, Serialize};

/// Row of the `stripe_user_subscriptions` view as the data service returns it.
/// Every column is nullable on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionRow {
    pub subscription_status: Option<String>,
    pub price_id: Option<String>,
    pub current_period_end: Option<i64>,
    pub cancel_at_period_end: Option<bool>,
}

/// The current user's subscription, read-only on our side. The payment
/// processor's webhooks keep it up to date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionRecord {
    pub status: String,
    pub price_ref: Option<String>,
    pub current_period_end: Option<i64>, // epoch seconds
    pub cancel_at_period_end: bool,
}

impl From<SubscriptionRow> for SubscriptionRecord {
    fn from(row: SubscriptionRow) -> Self {
        SubscriptionRecord {
            status: row.subscription_status.unwrap_or_default(),
            price_ref: row.price_id.filter(|price_id| !price_id.is_empty()),
            current_period_end: row.current_period_end,
            cancel_at_period_end: row.cancel_at_period_end.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_columns_map_to_safe_defaults() {
        let row: SubscriptionRow = serde_json::from_str(
            r#"{"subscription_status":null,"price_id":"","current_period_end":null,"cancel_at_period_end":null}"#,
        )
        .unwrap();

        let record = SubscriptionRecord::from(row);
        assert_eq!(record.status, "");
        assert_eq!(record.price_ref, None);
        assert_eq!(record.current_period_end, None);
        assert!(!record.cancel_at_period_end);
    }

    #[test]
    fn populated_row_keeps_its_values() {
        let row: SubscriptionRow = serde_json::from_str(
            r#"{"subscription_status":"trialing","price_id":"price_1Rld87B3EpSJW5YnV8tOpDWp","current_period_end":1893456000,"cancel_at_period_end":true}"#,
        )
        .unwrap();

        let record = SubscriptionRecord::from(row);
        assert_eq!(record.status, "trialing");
        assert_eq!(record.price_ref.as_deref(), Some("price_1Rld87B3EpSJW5YnV8tOpDWp"));
        assert_eq!(record.current_period_end, Some(1893456000));
        assert!(record.cancel_at_period_end);
    }
}
