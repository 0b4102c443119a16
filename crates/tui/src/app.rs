//! Application state and input handling.
//!
//! The `App` owns the route, the three state stores, and the UI
//! chrome state (toasts, theme, selections). It is created at startup
//! and dropped on teardown; all state mutation happens in `update`,
//! driven by the action channel.

use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fleet_client::models::{SearchFilters, Vehicle};
use fleet_config::{ColorTheme, PersistedState, Theme};
use ratatui::widgets::TableState;

use crate::action::Action;
use crate::router::Route;
use crate::stores::{AnalyticsStore, BranchStore, VehicleStore};
use crate::ui::Toast;

/// Layout constants for UI components.
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;

/// Connection context for the header display.
#[derive(Debug, Clone, Default)]
pub struct ConnectionContext {
    /// Base URL of the fleet backend
    pub base_url: String,
    /// Auth mode display string ("token" or "open")
    pub auth_mode: String,
}

/// Main application state.
pub struct App {
    pub route: Route,

    // Stores (created here, torn down with the App)
    pub vehicle_store: VehicleStore,
    pub branch_store: BranchStore,
    pub analytics_store: AnalyticsStore,

    // UI state
    pub toasts: Vec<Toast>,
    pub spinner_frame: u8,
    /// Currently selected color theme (persisted across runs).
    pub color_theme: ColorTheme,
    /// Expanded runtime theme derived from `color_theme`.
    pub theme: Theme,

    // Home search input
    pub search_input: String,

    // Table selections
    pub fleet_table: TableState,
    pub results_table: TableState,
    /// Ids marked for batch removal on the fleet screen.
    pub marked: HashSet<u64>,
    /// Show only available vehicles on the fleet screen.
    pub show_available_only: bool,
    /// Branch filter applied to the fleet screen (None = all).
    pub fleet_branch_filter: Option<String>,
    /// Category filter applied to the fleet screen (None = all).
    pub fleet_category_filter: Option<String>,

    // Analytics branch selection
    pub analytics_branch: Option<String>,

    // Connection context
    pub base_url: String,
    pub auth_mode: String,
}

impl App {
    /// Create a new App instance.
    ///
    /// # Arguments
    ///
    /// * `persisted` - Optional persisted state from previous runs
    /// * `connection_ctx` - Connection context shown in the header
    pub fn new(persisted: Option<PersistedState>, connection_ctx: ConnectionContext) -> Self {
        let mut fleet_table = TableState::default();
        fleet_table.select(Some(0));
        let mut results_table = TableState::default();
        results_table.select(Some(0));

        let (color_theme, route) = match persisted {
            Some(state) => (
                state.selected_theme,
                state
                    .last_route
                    .as_deref()
                    .map(Route::parse)
                    .unwrap_or(Route::Home),
            ),
            None => (ColorTheme::default(), Route::Home),
        };

        Self {
            route,
            vehicle_store: VehicleStore::new(),
            branch_store: BranchStore::new(),
            analytics_store: AnalyticsStore::new(),
            toasts: Vec::new(),
            spinner_frame: 0,
            color_theme,
            theme: Theme::from(color_theme),
            search_input: String::new(),
            fleet_table,
            results_table,
            marked: HashSet::new(),
            show_available_only: false,
            fleet_branch_filter: None,
            fleet_category_filter: None,
            analytics_branch: None,
            base_url: connection_ctx.base_url,
            auth_mode: connection_ctx.auth_mode,
        }
    }

    /// Exports the current state for persistence.
    pub fn get_persisted_state(&self) -> PersistedState {
        PersistedState {
            selected_theme: self.color_theme,
            last_route: Some(self.route.path().to_string()),
        }
    }

    /// True while any fetch is in flight (drives the spinner).
    pub fn is_busy(&self) -> bool {
        self.vehicle_store.is_busy()
            || self.branch_store.branches.is_loading()
            || self.analytics_store.is_busy()
    }

    /// The vehicle rows currently shown on the fleet screen.
    pub fn fleet_rows(&self) -> Option<&[Vehicle]> {
        let remote = if self.show_available_only {
            &self.vehicle_store.available
        } else {
            &self.vehicle_store.vehicles
        };
        remote.value().map(|v| v.as_slice())
    }

    /// Apply a state mutation. Side effects (API calls) are dispatched
    /// separately by the runtime; this function never blocks.
    pub fn update(&mut self, action: Action) {
        match action {
            // Handled by the main loop
            Action::Quit | Action::Input(_) => {}

            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                self.toasts.retain(|t| !t.is_expired());
            }

            Action::Navigate(route) => self.route = route,
            Action::NextScreen => self.route = self.route.next(),
            Action::PreviousScreen => self.route = self.route.previous(),

            // Triggers: mark the target field as in flight
            Action::LoadVehicles
            | Action::LoadVehiclesByBranch(_)
            | Action::LoadVehiclesByCategory(_)
            | Action::RunSearch(_) => self.vehicle_store.vehicles.begin(),
            Action::LoadAvailable => self.vehicle_store.available.begin(),
            Action::LoadVehicleByReg(_) => self.vehicle_store.selected.begin(),
            Action::LoadCategories => self.vehicle_store.categories.begin(),
            Action::LoadBranches => {
                self.vehicle_store.branches.begin();
                self.branch_store.branches.begin();
            }
            Action::LoadStatuses => self.vehicle_store.statuses.begin(),
            Action::RunGlobalSearch(_) => self.vehicle_store.global_search_results.begin(),
            Action::LoadFleetInsights => self.analytics_store.fleet_insights.begin(),
            Action::LoadStatusByBranch(_) => self.analytics_store.status_by_branch.begin(),
            Action::LoadCategoryByBranch(_) => self.analytics_store.category_by_branch.begin(),
            Action::LoadUtilisationByBranch(_) => {
                self.analytics_store.rental_utilisation_by_branch.begin()
            }
            Action::LoadRentedByCategory(_) => self.analytics_store.rented_by_category.begin(),
            Action::LoadIssuesPercentage(_) => self.analytics_store.issues_percentage.begin(),

            // Mutations have no optimistic state change
            Action::RentVehicle(_)
            | Action::ReturnVehicle(_)
            | Action::AddVehicle(_)
            | Action::RemoveVehicle(_)
            | Action::BatchRemoveVehicles(_)
            | Action::EditVehicle(_)
            | Action::BulkAddVehicles(_)
            | Action::BatchEditVehicles(_) => {}

            // Completions: the response replaces the field wholesale;
            // failures land only in the field that was being fetched.
            Action::VehiclesLoaded(result) => {
                self.toast_on_error(&result);
                self.vehicle_store.vehicles_loaded(result);
            }
            Action::AvailableLoaded(result) => {
                self.toast_on_error(&result);
                self.vehicle_store.available_loaded(result);
            }
            Action::VehicleLoaded(result) => {
                self.toast_on_error(&result);
                self.vehicle_store.selected_loaded(result.map(|v| *v));
            }
            Action::CategoriesLoaded(result) => {
                self.toast_on_error(&result);
                self.vehicle_store.categories_loaded(result);
            }
            Action::BranchesLoaded(result) => {
                self.toast_on_error(&result);
                if let Ok(branches) = &result {
                    if self.analytics_branch.is_none() {
                        self.analytics_branch = branches.first().cloned();
                    }
                }
                self.vehicle_store.branches_loaded(result.clone());
                self.branch_store.branches_loaded(result);
            }
            Action::StatusesLoaded(result) => {
                self.toast_on_error(&result);
                self.vehicle_store.statuses_loaded(result);
            }
            Action::SearchCompleted(result) => {
                self.toast_on_error(&result);
                self.vehicle_store.search_completed(result);
            }
            Action::GlobalSearchCompleted(result) => {
                self.toast_on_error(&result);
                self.vehicle_store.global_search_completed(result);
            }

            Action::VehicleRented(result) => match result {
                Ok(reg) => self.toasts.push(Toast::success(format!("Rented {}", reg))),
                Err(e) => self.toasts.push(Toast::error(e)),
            },
            Action::VehicleReturned(result) => match result {
                Ok(reg) => self
                    .toasts
                    .push(Toast::success(format!("Returned {}", reg))),
                Err(e) => self.toasts.push(Toast::error(e)),
            },
            Action::VehicleAdded(result) => match result {
                Ok(vehicle) => {
                    self.toasts
                        .push(Toast::success(format!("Added {}", vehicle.vrm)));
                    self.vehicle_store.vehicle_added(*vehicle);
                }
                Err(e) => self.toasts.push(Toast::error(e)),
            },
            Action::VehicleRemoved(result) => match result {
                Ok(id) => {
                    self.vehicle_store.vehicle_removed(id);
                    self.marked.remove(&id);
                    self.toasts.push(Toast::success("Vehicle removed".into()));
                }
                Err(e) => self.toasts.push(Toast::error(e)),
            },
            Action::VehiclesBatchRemoved(result) => match result {
                Ok(ids) => {
                    self.vehicle_store.vehicles_batch_removed(&ids);
                    for id in &ids {
                        self.marked.remove(id);
                    }
                    self.toasts
                        .push(Toast::success(format!("Removed {} vehicles", ids.len())));
                }
                Err(e) => self.toasts.push(Toast::error(e)),
            },
            Action::VehicleEdited(result) => match result {
                Ok(reg) => self.toasts.push(Toast::success(format!("Updated {}", reg))),
                Err(e) => self.toasts.push(Toast::error(e)),
            },
            Action::VehiclesBulkAdded(result) => match result {
                Ok(count) => self
                    .toasts
                    .push(Toast::success(format!("Added {} vehicles", count))),
                Err(e) => self.toasts.push(Toast::error(e)),
            },
            Action::VehiclesBatchEdited(result) => match result {
                Ok(count) => self
                    .toasts
                    .push(Toast::success(format!("Updated {} vehicles", count))),
                Err(e) => self.toasts.push(Toast::error(e)),
            },

            Action::FleetInsightsLoaded(result) => {
                self.toast_on_error(&result);
                self.analytics_store.fleet_insights_loaded(result);
            }
            Action::StatusByBranchLoaded(result) => {
                self.analytics_store.status_by_branch_loaded(result);
            }
            Action::CategoryByBranchLoaded(result) => {
                self.analytics_store.category_by_branch_loaded(result);
            }
            Action::UtilisationLoaded(result) => {
                self.analytics_store.utilisation_loaded(result);
            }
            Action::RentedByCategoryLoaded(result) => {
                self.analytics_store.rented_by_category_loaded(result);
            }
            Action::IssuesPercentageLoaded(result) => {
                self.analytics_store.issues_percentage_loaded(result);
            }
        }
    }

    fn toast_on_error<T>(&mut self, result: &Result<T, String>) {
        if let Err(message) = result {
            self.toasts.push(Toast::error(message.clone()));
        }
    }

    /// Loads to dispatch after navigating to the current route.
    pub fn load_actions_for_route(&self) -> Vec<Action> {
        match self.route {
            Route::Home => vec![
                Action::LoadBranches,
                Action::LoadCategories,
                Action::LoadStatuses,
            ],
            // Populated by the search that navigated here
            Route::Results => Vec::new(),
            // Loaded when a vehicle is opened
            Route::VehicleDetails => Vec::new(),
            Route::MyFleet => {
                if self.show_available_only {
                    vec![Action::LoadAvailable]
                } else if let Some(branch) = &self.fleet_branch_filter {
                    vec![Action::LoadVehiclesByBranch(branch.clone())]
                } else if let Some(category) = &self.fleet_category_filter {
                    vec![Action::LoadVehiclesByCategory(category.clone())]
                } else {
                    vec![Action::LoadVehicles]
                }
            }
            Route::Analytics => {
                let mut actions = vec![Action::LoadBranches, Action::LoadFleetInsights];
                if let Some(branch) = &self.analytics_branch {
                    actions.extend(Self::branch_aggregate_loads(branch));
                }
                actions
            }
            Route::NotFound => Vec::new(),
        }
    }

    fn branch_aggregate_loads(branch: &str) -> Vec<Action> {
        vec![
            Action::LoadStatusByBranch(branch.to_string()),
            Action::LoadCategoryByBranch(branch.to_string()),
            Action::LoadUtilisationByBranch(branch.to_string()),
            Action::LoadRentedByCategory(branch.to_string()),
            Action::LoadIssuesPercentage(branch.to_string()),
        ]
    }

    /// Handle keyboard input - returns the actions to dispatch.
    pub fn handle_input(&mut self, key: KeyEvent) -> Vec<Action> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return vec![Action::Quit];
        }

        // Tab cycling works on every screen
        match key.code {
            KeyCode::Tab => return vec![Action::NextScreen],
            KeyCode::BackTab => return vec![Action::PreviousScreen],
            _ => {}
        }

        match self.route {
            Route::Home => self.handle_home_input(key),
            Route::Results => self.handle_results_input(key),
            Route::VehicleDetails => self.handle_details_input(key),
            Route::MyFleet => self.handle_fleet_input(key),
            Route::Analytics => self.handle_analytics_input(key),
            Route::NotFound => match key.code {
                KeyCode::Enter | KeyCode::Esc => vec![Action::Navigate(Route::Home)],
                _ => Vec::new(),
            },
        }
    }

    /// Home owns a text input, so printable characters are captured
    /// instead of being treated as bindings.
    fn handle_home_input(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Enter => {
                let query = self.search_input.trim().to_string();
                if query.is_empty() {
                    return Vec::new();
                }
                vec![
                    Action::RunGlobalSearch(SearchFilters::text(query)),
                    Action::Navigate(Route::Results),
                ]
            }
            KeyCode::Esc => {
                self.search_input.clear();
                Vec::new()
            }
            KeyCode::Backspace => {
                self.search_input.pop();
                Vec::new()
            }
            KeyCode::Char(c) if !c.is_control() && key.modifiers.is_empty() => {
                self.search_input.push(c);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn handle_results_input(&mut self, key: KeyEvent) -> Vec<Action> {
        let len = self
            .vehicle_store
            .global_search_results
            .value()
            .map(|v| v.len())
            .unwrap_or(0);
        match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Down | KeyCode::Char('j') => {
                Self::select_next(&mut self.results_table, len);
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                Self::select_previous(&mut self.results_table, len);
                Vec::new()
            }
            KeyCode::Enter => {
                let selected = self
                    .results_table
                    .selected()
                    .and_then(|i| self.vehicle_store.global_search_results.value()?.get(i));
                match selected {
                    Some(vehicle) => {
                        let reg = vehicle.vrm.clone();
                        vec![
                            Action::Navigate(Route::VehicleDetails),
                            Action::LoadVehicleByReg(reg),
                        ]
                    }
                    None => Vec::new(),
                }
            }
            KeyCode::Esc => vec![Action::Navigate(Route::Home)],
            _ => self.handle_common_input(key),
        }
    }

    fn handle_details_input(&mut self, key: KeyEvent) -> Vec<Action> {
        let reg = self.vehicle_store.selected.value().map(|v| v.vrm.clone());
        match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Char('R') => match reg {
                Some(reg) => vec![Action::RentVehicle(reg)],
                None => Vec::new(),
            },
            KeyCode::Char('U') => match reg {
                Some(reg) => vec![Action::ReturnVehicle(reg)],
                None => Vec::new(),
            },
            KeyCode::Esc => vec![Action::Navigate(Route::MyFleet)],
            _ => self.handle_common_input(key),
        }
    }

    fn handle_fleet_input(&mut self, key: KeyEvent) -> Vec<Action> {
        let len = self.fleet_rows().map(|v| v.len()).unwrap_or(0);
        match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Down | KeyCode::Char('j') => {
                Self::select_next(&mut self.fleet_table, len);
                Vec::new()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                Self::select_previous(&mut self.fleet_table, len);
                Vec::new()
            }
            KeyCode::Char(' ') => {
                if let Some(vehicle) = self.selected_fleet_vehicle() {
                    let id = vehicle.id;
                    if !self.marked.remove(&id) {
                        self.marked.insert(id);
                    }
                }
                Vec::new()
            }
            KeyCode::Char('d') => match self.selected_fleet_vehicle() {
                Some(vehicle) => vec![Action::RemoveVehicle(vehicle.id)],
                None => Vec::new(),
            },
            KeyCode::Char('D') => {
                if self.marked.is_empty() {
                    Vec::new()
                } else {
                    let mut ids: Vec<u64> = self.marked.iter().copied().collect();
                    ids.sort_unstable();
                    vec![Action::BatchRemoveVehicles(ids)]
                }
            }
            KeyCode::Char('v') => {
                self.show_available_only = !self.show_available_only;
                self.fleet_table.select(Some(0));
                if self.show_available_only {
                    vec![Action::LoadAvailable]
                } else {
                    vec![Action::LoadVehicles]
                }
            }
            KeyCode::Char('b') => self.cycle_fleet_branch(),
            KeyCode::Char('c') => self.cycle_fleet_category(),
            KeyCode::Char('s') => self.run_fleet_search(),
            KeyCode::Enter => match self.selected_fleet_vehicle() {
                Some(vehicle) => {
                    let reg = vehicle.vrm.clone();
                    vec![
                        Action::Navigate(Route::VehicleDetails),
                        Action::LoadVehicleByReg(reg),
                    ]
                }
                None => Vec::new(),
            },
            _ => self.handle_common_input(key),
        }
    }

    fn handle_analytics_input(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Left | KeyCode::Char('h') => self.cycle_analytics_branch(-1),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_analytics_branch(1),
            _ => self.handle_common_input(key),
        }
    }

    /// Bindings shared by every screen that does not own a text input.
    fn handle_common_input(&mut self, key: KeyEvent) -> Vec<Action> {
        match key.code {
            KeyCode::Char('1') => vec![Action::Navigate(Route::Home)],
            KeyCode::Char('2') => vec![Action::Navigate(Route::Results)],
            KeyCode::Char('3') => vec![Action::Navigate(Route::VehicleDetails)],
            KeyCode::Char('4') => vec![Action::Navigate(Route::MyFleet)],
            KeyCode::Char('5') => vec![Action::Navigate(Route::Analytics)],
            KeyCode::Char('r') => self.load_actions_for_route(),
            KeyCode::Char('t') => {
                self.color_theme = self.color_theme.next();
                self.theme = Theme::from(self.color_theme);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Cycle the fleet branch filter: all -> first -> ... -> last -> all.
    fn cycle_fleet_branch(&mut self) -> Vec<Action> {
        let branches = match self.vehicle_store.branches.value() {
            Some(b) if !b.is_empty() => b,
            _ => return vec![Action::LoadBranches],
        };
        let next = match &self.fleet_branch_filter {
            None => branches.first().cloned(),
            Some(current) => branches
                .iter()
                .position(|b| b == current)
                .and_then(|i| branches.get(i + 1))
                .cloned(),
        };
        self.fleet_category_filter = None;
        self.fleet_branch_filter = next;
        self.fleet_table.select(Some(0));
        match &self.fleet_branch_filter {
            Some(branch) => vec![Action::LoadVehiclesByBranch(branch.clone())],
            None => vec![Action::LoadVehicles],
        }
    }

    /// Cycle the fleet category filter: all -> first -> ... -> last -> all.
    fn cycle_fleet_category(&mut self) -> Vec<Action> {
        let categories = match self.vehicle_store.categories.value() {
            Some(c) if !c.is_empty() => c,
            _ => return vec![Action::LoadCategories],
        };
        let next = match &self.fleet_category_filter {
            None => categories.first().cloned(),
            Some(current) => categories
                .iter()
                .position(|c| c == current)
                .and_then(|i| categories.get(i + 1))
                .cloned(),
        };
        self.fleet_branch_filter = None;
        self.fleet_category_filter = next;
        self.fleet_table.select(Some(0));
        match &self.fleet_category_filter {
            Some(category) => vec![Action::LoadVehiclesByCategory(category.clone())],
            None => vec![Action::LoadVehicles],
        }
    }

    /// Run a server-side search combining the active fleet filters.
    fn run_fleet_search(&mut self) -> Vec<Action> {
        let filters = SearchFilters {
            branch: self.fleet_branch_filter.clone(),
            category: self.fleet_category_filter.clone(),
            status: self
                .show_available_only
                .then(|| "AVAILABLE".to_string()),
            ..SearchFilters::default()
        };
        // The backend returns nothing for an empty filter set
        if filters.is_empty() {
            return Vec::new();
        }
        vec![Action::RunSearch(filters)]
    }

    fn cycle_analytics_branch(&mut self, step: isize) -> Vec<Action> {
        let branches = match self.branch_store.branches.value() {
            Some(b) if !b.is_empty() => b,
            _ => return vec![Action::LoadBranches],
        };
        let current = self
            .analytics_branch
            .as_ref()
            .and_then(|b| branches.iter().position(|x| x == b))
            .unwrap_or(0);
        let len = branches.len() as isize;
        let next = ((current as isize + step).rem_euclid(len)) as usize;
        let branch = branches[next].clone();
        self.analytics_branch = Some(branch.clone());
        Self::branch_aggregate_loads(&branch)
    }

    fn selected_fleet_vehicle(&self) -> Option<&Vehicle> {
        let rows = self.fleet_rows()?;
        rows.get(self.fleet_table.selected()?)
    }

    fn select_next(state: &mut TableState, len: usize) {
        if len == 0 {
            return;
        }
        let next = match state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        state.select(Some(next));
    }

    fn select_previous(state: &mut TableState, len: usize) {
        if len == 0 {
            return;
        }
        let previous = match state.selected() {
            Some(0) | None => len.saturating_sub(1),
            Some(i) => i - 1,
        };
        state.select(Some(previous));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(None, ConnectionContext::default())
    }
}

#[cfg(test)]
mod tests;
