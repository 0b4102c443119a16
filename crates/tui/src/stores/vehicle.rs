//! Vehicle store: the fleet list, the selected vehicle, and filter
//! metadata.
//!
//! Every fetched field follows the same contract: a response replaces
//! the field wholesale in backend order; a failure lands only in the
//! field that was being fetched. Delete operations prune the loaded
//! list locally by id instead of re-fetching, so the list can diverge
//! from server state if a delete partially failed on the backend.

use fleet_client::models::{SearchResponse, Vehicle};

use crate::stores::Remote;

/// State container for vehicle data.
#[derive(Debug, Default)]
pub struct VehicleStore {
    /// The fleet list most recently fetched (all / by-branch /
    /// by-category / filtered search all land here).
    pub vehicles: Remote<Vec<Vehicle>>,
    /// Vehicles available to rent.
    pub available: Remote<Vec<Vehicle>>,
    /// Hits of the last global search.
    pub global_search_results: Remote<Vec<Vehicle>>,
    /// The vehicle open in the details view.
    pub selected: Remote<Vehicle>,
    /// Distinct category names.
    pub categories: Remote<Vec<String>>,
    /// Distinct branch names.
    pub branches: Remote<Vec<String>>,
    /// Known status values.
    pub statuses: Remote<Vec<String>>,
    /// Result count reported by the last search.
    pub last_search_count: Option<u64>,
}

impl VehicleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicles_loaded(&mut self, result: Result<Vec<Vehicle>, String>) {
        self.vehicles.resolve(result);
    }

    pub fn available_loaded(&mut self, result: Result<Vec<Vehicle>, String>) {
        self.available.resolve(result);
    }

    pub fn selected_loaded(&mut self, result: Result<Vehicle, String>) {
        self.selected.resolve(result);
    }

    pub fn categories_loaded(&mut self, result: Result<Vec<String>, String>) {
        self.categories.resolve(result);
    }

    pub fn branches_loaded(&mut self, result: Result<Vec<String>, String>) {
        self.branches.resolve(result);
    }

    pub fn statuses_loaded(&mut self, result: Result<Vec<String>, String>) {
        self.statuses.resolve(result);
    }

    /// Apply a filtered search: hits replace the fleet list.
    pub fn search_completed(&mut self, result: Result<SearchResponse, String>) {
        match result {
            Ok(response) => {
                self.last_search_count = Some(response.count);
                self.vehicles.resolve(Ok(response.results));
            }
            Err(message) => self.vehicles.resolve(Err(message)),
        }
    }

    /// Apply a global search: hits replace the results view data.
    pub fn global_search_completed(&mut self, result: Result<SearchResponse, String>) {
        match result {
            Ok(response) => {
                self.last_search_count = Some(response.count);
                self.global_search_results.resolve(Ok(response.results));
            }
            Err(message) => self.global_search_results.resolve(Err(message)),
        }
    }

    /// Append the backend's created record to the loaded list.
    pub fn vehicle_added(&mut self, vehicle: Vehicle) {
        if let Some(vehicles) = self.vehicles.value_mut() {
            vehicles.push(vehicle);
        }
    }

    /// Prune one vehicle from the loaded list after an acknowledged
    /// removal. Local patch, not a re-fetch.
    pub fn vehicle_removed(&mut self, id: u64) {
        if let Some(vehicles) = self.vehicles.value_mut() {
            vehicles.retain(|v| v.id != id);
        }
    }

    /// Prune several vehicles after an acknowledged batch removal.
    pub fn vehicles_batch_removed(&mut self, ids: &[u64]) {
        if let Some(vehicles) = self.vehicles.value_mut() {
            vehicles.retain(|v| !ids.contains(&v.id));
        }
    }

    /// True while any vehicle fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.vehicles.is_loading()
            || self.available.is_loading()
            || self.global_search_results.is_loading()
            || self.selected.is_loading()
            || self.categories.is_loading()
            || self.branches.is_loading()
            || self.statuses.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_client::models::VehicleStatus;

    fn vehicle(id: u64, vrm: &str) -> Vehicle {
        Vehicle {
            id,
            make: "Ford".to_string(),
            model: "Fiesta".to_string(),
            colour: "Grey".to_string(),
            vin: format!("VIN{}", id),
            year: Some(2018),
            vrm: vrm.to_string(),
            category: "Compact".to_string(),
            number_seats: Some(5),
            day_rate: Some(50.0),
            status: VehicleStatus::Available,
            fuel_economy: Some(29.5),
            branch: "Luton".to_string(),
        }
    }

    fn store_with_ids(ids: &[u64]) -> VehicleStore {
        let mut store = VehicleStore::new();
        store.vehicles_loaded(Ok(ids
            .iter()
            .map(|id| vehicle(*id, &format!("VRM{}", id)))
            .collect()));
        store
    }

    fn loaded_ids(store: &VehicleStore) -> Vec<u64> {
        store
            .vehicles
            .value()
            .unwrap()
            .iter()
            .map(|v| v.id)
            .collect()
    }

    #[test]
    fn test_fetch_populates_exactly_in_backend_order() {
        let store = store_with_ids(&[3, 1, 2]);
        assert_eq!(loaded_ids(&store), vec![3, 1, 2]);
    }

    #[test]
    fn test_fetch_replaces_rather_than_merges() {
        let mut store = store_with_ids(&[1, 2, 3]);
        store.vehicles_loaded(Ok(vec![vehicle(9, "VRM9")]));
        assert_eq!(loaded_ids(&store), vec![9]);
    }

    #[test]
    fn test_remove_prunes_exactly_the_matching_entry() {
        let mut store = store_with_ids(&[1, 2, 3]);
        store.vehicle_removed(2);
        assert_eq!(loaded_ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let mut store = store_with_ids(&[1, 2, 3]);
        store.vehicle_removed(42);
        assert_eq!(loaded_ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn test_batch_remove_prunes_exactly_the_matching_entries() {
        let mut store = store_with_ids(&[1, 2, 3, 4]);
        store.vehicles_batch_removed(&[2, 3]);
        assert_eq!(loaded_ids(&store), vec![1, 4]);
    }

    #[test]
    fn test_add_appends_created_record() {
        let mut store = store_with_ids(&[1, 2]);
        store.vehicle_added(vehicle(3, "VRM3"));
        assert_eq!(loaded_ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn test_add_without_loaded_list_is_a_no_op() {
        let mut store = VehicleStore::new();
        store.vehicle_added(vehicle(3, "VRM3"));
        assert!(store.vehicles.is_not_asked());
    }

    #[test]
    fn test_failed_fetch_touches_only_its_own_field() {
        let mut store = store_with_ids(&[1, 2, 3]);
        store.categories_loaded(Err("500 from backend".to_string()));

        // The failing dataset carries the error...
        assert_eq!(store.categories.error(), Some("500 from backend"));
        // ...and every other field keeps its prior value.
        assert_eq!(loaded_ids(&store), vec![1, 2, 3]);
        assert!(store.branches.is_not_asked());
        assert!(store.selected.is_not_asked());
    }

    #[test]
    fn test_search_replaces_vehicles_and_records_count() {
        let mut store = store_with_ids(&[1, 2, 3]);
        store.search_completed(Ok(SearchResponse {
            results: vec![vehicle(7, "VRM7")],
            count: 1,
            filters_used: None,
        }));
        assert_eq!(loaded_ids(&store), vec![7]);
        assert_eq!(store.last_search_count, Some(1));
    }

    #[test]
    fn test_global_search_lands_in_its_own_field() {
        let mut store = store_with_ids(&[1, 2]);
        store.global_search_completed(Ok(SearchResponse {
            results: vec![vehicle(7, "VRM7")],
            count: 1,
            filters_used: None,
        }));
        // Fleet list untouched; results view populated.
        assert_eq!(loaded_ids(&store), vec![1, 2]);
        assert_eq!(
            store
                .global_search_results
                .value()
                .unwrap()
                .iter()
                .map(|v| v.id)
                .collect::<Vec<_>>(),
            vec![7]
        );
    }

    #[test]
    fn test_is_busy_tracks_in_flight_fetches() {
        let mut store = VehicleStore::new();
        assert!(!store.is_busy());
        store.vehicles.begin();
        assert!(store.is_busy());
        store.vehicles_loaded(Ok(vec![]));
        assert!(!store.is_busy());
    }
}
