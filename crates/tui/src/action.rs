//! Action protocol for async TUI event handling.
//!
//! Actions represent both user inputs and async API operation
//! results. They flow through a channel from input handlers and
//! spawned API tasks to the main app state, where they trigger state
//! mutations. Completion variants carry `Result<T, String>`; the
//! error string is the display form of the client error.

use crossterm::event::KeyEvent;
use fleet_client::models::{NewVehicle, SearchFilters, SearchResponse, Vehicle, VehicleUpdate};
use serde_json::Value;

use crate::router::Route;

/// Unified action type for async TUI event handling.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic UI tick (animations, toast expiry)
    Tick,
    /// Raw keyboard input event
    Input(KeyEvent),

    // Navigation
    /// Jump to a specific route
    Navigate(Route),
    /// Cycle to the next screen
    NextScreen,
    /// Cycle to the previous screen
    PreviousScreen,

    // API Triggers - vehicles
    /// Load the full vehicle list
    LoadVehicles,
    /// Load vehicles available to rent
    LoadAvailable,
    /// Load vehicles owned by a branch
    LoadVehiclesByBranch(String),
    /// Load one vehicle by registration
    LoadVehicleByReg(String),
    /// Load vehicles in a category
    LoadVehiclesByCategory(String),
    /// Load the category list
    LoadCategories,
    /// Load the branch list
    LoadBranches,
    /// Load the status list
    LoadStatuses,
    /// Run a filtered search into the vehicle list
    RunSearch(SearchFilters),
    /// Run a global search into the results view
    RunGlobalSearch(SearchFilters),
    /// Rent a vehicle by registration
    RentVehicle(String),
    /// Return a rented vehicle by registration
    ReturnVehicle(String),
    /// Add a vehicle
    AddVehicle(Box<NewVehicle>),
    /// Remove a vehicle by id
    RemoveVehicle(u64),
    /// Remove several vehicles by id
    BatchRemoveVehicles(Vec<u64>),
    /// Update a single vehicle
    EditVehicle(Box<VehicleUpdate>),
    /// Add several vehicles in one call
    BulkAddVehicles(Vec<NewVehicle>),
    /// Apply several vehicle updates in one call
    BatchEditVehicles(Vec<VehicleUpdate>),

    // API Triggers - analytics
    /// Load fleet-wide insights
    LoadFleetInsights,
    /// Load the status breakdown for a branch
    LoadStatusByBranch(String),
    /// Load the category breakdown for a branch
    LoadCategoryByBranch(String),
    /// Load rental utilisation for a branch
    LoadUtilisationByBranch(String),
    /// Load rented-by-category for a branch
    LoadRentedByCategory(String),
    /// Load the issues percentage for a branch
    LoadIssuesPercentage(String),

    // API Results - vehicles
    VehiclesLoaded(Result<Vec<Vehicle>, String>),
    AvailableLoaded(Result<Vec<Vehicle>, String>),
    VehicleLoaded(Result<Box<Vehicle>, String>),
    CategoriesLoaded(Result<Vec<String>, String>),
    BranchesLoaded(Result<Vec<String>, String>),
    StatusesLoaded(Result<Vec<String>, String>),
    SearchCompleted(Result<SearchResponse, String>),
    GlobalSearchCompleted(Result<SearchResponse, String>),
    /// Rent acknowledged for the carried registration
    VehicleRented(Result<String, String>),
    /// Return acknowledged for the carried registration
    VehicleReturned(Result<String, String>),
    /// The backend's created record
    VehicleAdded(Result<Box<Vehicle>, String>),
    /// Removal acknowledged for the carried id
    VehicleRemoved(Result<u64, String>),
    /// Batch removal acknowledged for the carried ids
    VehiclesBatchRemoved(Result<Vec<u64>, String>),
    /// Edit acknowledged for the carried registration
    VehicleEdited(Result<String, String>),
    /// Bulk add acknowledged with the submitted count
    VehiclesBulkAdded(Result<usize, String>),
    /// Batch edit acknowledged with the submitted count
    VehiclesBatchEdited(Result<usize, String>),

    // API Results - analytics
    FleetInsightsLoaded(Result<Value, String>),
    StatusByBranchLoaded(Result<Value, String>),
    CategoryByBranchLoaded(Result<Value, String>),
    UtilisationLoaded(Result<Value, String>),
    RentedByCategoryLoaded(Result<Value, String>),
    IssuesPercentageLoaded(Result<Value, String>),
}

impl Action {
    /// True for navigation actions, which trigger loads for the new
    /// screen after the route changes.
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Action::Navigate(_) | Action::NextScreen | Action::PreviousScreen
        )
    }
}
