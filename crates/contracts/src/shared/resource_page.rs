use serde::{Deserialize, Serialize};

/// Paginated envelope used by list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePage<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "first_page")]
    pub pages: u32,
    #[serde(default)]
    pub results: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> ResourcePage<T> {
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a025_longview_subscription::LongviewSubscription;

    #[test]
    fn test_deserialize_page_envelope() {
        let json = r#"{
            "data": [
                {"id": "longview-3", "label": "Longview Pro 3 pack", "clients_included": 3,
                 "price": {"hourly": 0.03, "monthly": 20.0}},
                {"id": "longview-10", "label": "Longview Pro 10 pack", "clients_included": 10,
                 "price": {"hourly": 0.06, "monthly": 40.0}}
            ],
            "page": 1,
            "pages": 1,
            "results": 2
        }"#;
        let page: ResourcePage<LongviewSubscription> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results, 2);
        let data = page.into_data();
        assert_eq!(data.len(), 2);
        assert_eq!(data[1].label, "Longview Pro 10 pack");
    }

    #[test]
    fn test_missing_paging_fields_default() {
        let page: ResourcePage<LongviewSubscription> =
            serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.pages, 1);
        assert_eq!(page.results, 0);
    }
}
