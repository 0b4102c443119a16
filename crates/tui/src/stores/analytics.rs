//! Analytics store: six independent aggregate datasets.
//!
//! The datasets are backend-computed display data; the store holds
//! them as raw JSON and never interprets their shape.

use serde_json::Value;

use crate::stores::Remote;

/// State container for analytics data.
#[derive(Debug, Default)]
pub struct AnalyticsStore {
    pub fleet_insights: Remote<Value>,
    pub status_by_branch: Remote<Value>,
    pub category_by_branch: Remote<Value>,
    pub rental_utilisation_by_branch: Remote<Value>,
    pub rented_by_category: Remote<Value>,
    pub issues_percentage: Remote<Value>,
}

impl AnalyticsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fleet_insights_loaded(&mut self, result: Result<Value, String>) {
        self.fleet_insights.resolve(result);
    }

    pub fn status_by_branch_loaded(&mut self, result: Result<Value, String>) {
        self.status_by_branch.resolve(result);
    }

    pub fn category_by_branch_loaded(&mut self, result: Result<Value, String>) {
        self.category_by_branch.resolve(result);
    }

    pub fn utilisation_loaded(&mut self, result: Result<Value, String>) {
        self.rental_utilisation_by_branch.resolve(result);
    }

    pub fn rented_by_category_loaded(&mut self, result: Result<Value, String>) {
        self.rented_by_category.resolve(result);
    }

    pub fn issues_percentage_loaded(&mut self, result: Result<Value, String>) {
        self.issues_percentage.resolve(result);
    }

    /// True while any aggregate fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.fleet_insights.is_loading()
            || self.status_by_branch.is_loading()
            || self.category_by_branch.is_loading()
            || self.rental_utilisation_by_branch.is_loading()
            || self.rented_by_category.is_loading()
            || self.issues_percentage.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_datasets_are_independent() {
        let mut store = AnalyticsStore::new();
        store.fleet_insights_loaded(Ok(json!({"summary": {"total_vehicles": 42}})));
        store.status_by_branch_loaded(Err("branch required".to_string()));

        // One failure does not disturb the other five datasets.
        assert_eq!(
            store.fleet_insights.value().unwrap()["summary"]["total_vehicles"],
            42
        );
        assert_eq!(store.status_by_branch.error(), Some("branch required"));
        assert!(store.category_by_branch.is_not_asked());
        assert!(store.rental_utilisation_by_branch.is_not_asked());
        assert!(store.rented_by_category.is_not_asked());
        assert!(store.issues_percentage.is_not_asked());
    }

    #[test]
    fn test_dataset_replaces_on_refetch() {
        let mut store = AnalyticsStore::new();
        store.issues_percentage_loaded(Ok(json!({"percentage": 4.5})));
        store.issues_percentage_loaded(Ok(json!({"percentage": 9.0})));
        assert_eq!(store.issues_percentage.value().unwrap()["percentage"], 9.0);
    }
}
