use serde::{Deserialize, Serialize};

/// Longview subscription plan as returned by `GET /api/longview/subscriptions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongviewSubscription {
    pub id: String,
    pub label: String,
    pub clients_included: u32,
    pub price: LongviewPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LongviewPrice {
    pub hourly: f64,
    pub monthly: f64,
}

impl LongviewSubscription {
    /// Human readable monthly price, e.g. `"$20.00 / mo"`
    pub fn monthly_price_label(&self) -> String {
        format!("${:.2} / mo", self.price.monthly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_subscription() {
        let json = r#"{
            "id": "longview-10",
            "label": "Longview Pro 10 pack",
            "clients_included": 10,
            "price": { "hourly": 0.06, "monthly": 40.0 }
        }"#;
        let sub: LongviewSubscription = serde_json::from_str(json).unwrap();
        assert_eq!(sub.id, "longview-10");
        assert_eq!(sub.clients_included, 10);
        assert_eq!(sub.price.monthly, 40.0);
        assert_eq!(sub.monthly_price_label(), "$40.00 / mo");
    }
}
