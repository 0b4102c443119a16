//! Contract tests for App state transitions and input handling.

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

fn app_with_fleet(ids: &[u64]) -> App {
    let mut app = App::default();
    app.update(Action::VehiclesLoaded(Ok(ids
        .iter()
        .map(|id| vehicle(*id, &format!("VRM{}", id)))
        .collect())));
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

#[test]
fn test_vehicles_loaded_populates_in_backend_order() {
    let app = app_with_fleet(&[3, 1, 2]);
    let ids: Vec<u64> = app
        .vehicle_store
        .vehicles
        .value()
        .unwrap()
        .iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn test_remove_completion_prunes_and_toasts() {
    let mut app = app_with_fleet(&[1, 2, 3]);
    app.update(Action::VehicleRemoved(Ok(2)));

    let ids: Vec<u64> = app
        .vehicle_store
        .vehicles
        .value()
        .unwrap()
        .iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(app.toasts.len(), 1);
}

#[test]
fn test_batch_remove_completion_prunes_and_unmarks() {
    let mut app = app_with_fleet(&[1, 2, 3, 4]);
    app.marked.insert(2);
    app.marked.insert(3);
    app.update(Action::VehiclesBatchRemoved(Ok(vec![2, 3])));

    let ids: Vec<u64> = app
        .vehicle_store
        .vehicles
        .value()
        .unwrap()
        .iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![1, 4]);
    assert!(app.marked.is_empty());
}

#[test]
fn test_add_completion_appends_created_record() {
    let mut app = app_with_fleet(&[1, 2]);
    app.update(Action::VehicleAdded(Ok(Box::new(vehicle(3, "EF22TUV")))));

    let ids: Vec<u64> = app
        .vehicle_store
        .vehicles
        .value()
        .unwrap()
        .iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_failed_fetch_leaves_other_state_untouched() {
    let mut app = app_with_fleet(&[1, 2, 3]);
    app.update(Action::CategoriesLoaded(Err("500 from backend".to_string())));

    assert_eq!(app.vehicle_store.vehicles.value().unwrap().len(), 3);
    assert_eq!(
        app.vehicle_store.categories.error(),
        Some("500 from backend")
    );
    // The failure also surfaces as a toast
    assert_eq!(app.toasts.len(), 1);
}

#[test]
fn test_branches_loaded_updates_both_stores() {
    let mut app = App::default();
    app.update(Action::BranchesLoaded(Ok(vec![
        "Luton".to_string(),
        "London".to_string(),
    ])));

    assert_eq!(app.vehicle_store.branches.value().unwrap().len(), 2);
    assert_eq!(app.branch_store.branches.value().unwrap().len(), 2);
    // First branch becomes the analytics selection
    assert_eq!(app.analytics_branch.as_deref(), Some("Luton"));
}

#[test]
fn test_navigation_actions_move_the_route() {
    let mut app = App::default();
    assert_eq!(app.route, Route::Home);

    app.update(Action::NextScreen);
    assert_eq!(app.route, Route::Results);

    app.update(Action::Navigate(Route::Analytics));
    assert_eq!(app.route, Route::Analytics);

    app.update(Action::PreviousScreen);
    assert_eq!(app.route, Route::MyFleet);
}

#[test]
fn test_unknown_route_path_starts_on_not_found() {
    let persisted = PersistedState {
        last_route: Some("/does-not-exist".to_string()),
        ..PersistedState::default()
    };
    let app = App::new(Some(persisted), ConnectionContext::default());
    assert_eq!(app.route, Route::NotFound);
}

#[test]
fn test_root_path_starts_on_home() {
    let persisted = PersistedState {
        last_route: Some("/".to_string()),
        ..PersistedState::default()
    };
    let app = App::new(Some(persisted), ConnectionContext::default());
    assert_eq!(app.route, Route::Home);
}

#[test]
fn test_home_input_collects_text_and_submits_global_search() {
    let mut app = App::default();
    for c in "toyota".chars() {
        assert!(app.handle_input(key(KeyCode::Char(c))).is_empty());
    }
    assert_eq!(app.search_input, "toyota");

    let actions = app.handle_input(key(KeyCode::Enter));
    assert_eq!(actions.len(), 2);
    assert!(matches!(
        &actions[0],
        Action::RunGlobalSearch(filters) if filters.query.as_deref() == Some("toyota")
    ));
    assert!(matches!(actions[1], Action::Navigate(Route::Results)));
}

#[test]
fn test_home_enter_with_empty_input_does_nothing() {
    let mut app = App::default();
    assert!(app.handle_input(key(KeyCode::Enter)).is_empty());
}

#[test]
fn test_q_does_not_quit_while_typing_on_home() {
    let mut app = App::default();
    let actions = app.handle_input(key(KeyCode::Char('q')));
    assert!(actions.is_empty());
    assert_eq!(app.search_input, "q");
}

#[test]
fn test_q_quits_on_fleet_screen() {
    let mut app = App::default();
    app.update(Action::Navigate(Route::MyFleet));
    let actions = app.handle_input(key(KeyCode::Char('q')));
    assert!(matches!(actions[0], Action::Quit));
}

#[test]
fn test_fleet_remove_key_targets_selected_row() {
    let mut app = app_with_fleet(&[1, 2, 3]);
    app.update(Action::Navigate(Route::MyFleet));
    app.handle_input(key(KeyCode::Down));

    let actions = app.handle_input(key(KeyCode::Char('d')));
    assert!(matches!(actions[0], Action::RemoveVehicle(2)));
}

#[test]
fn test_fleet_mark_and_batch_remove() {
    let mut app = app_with_fleet(&[1, 2, 3]);
    app.update(Action::Navigate(Route::MyFleet));

    app.handle_input(key(KeyCode::Char(' ')));
    app.handle_input(key(KeyCode::Down));
    app.handle_input(key(KeyCode::Char(' ')));

    let actions = app.handle_input(key(KeyCode::Char('D')));
    assert!(matches!(&actions[0], Action::BatchRemoveVehicles(ids) if *ids == vec![1, 2]));
}

#[test]
fn test_fleet_enter_opens_details_for_selected_vehicle() {
    let mut app = app_with_fleet(&[1, 2]);
    app.update(Action::Navigate(Route::MyFleet));

    let actions = app.handle_input(key(KeyCode::Enter));
    assert!(matches!(actions[0], Action::Navigate(Route::VehicleDetails)));
    assert!(matches!(&actions[1], Action::LoadVehicleByReg(reg) if reg == "VRM1"));
}

#[test]
fn test_details_rent_and_return_use_selected_registration() {
    let mut app = App::default();
    app.update(Action::Navigate(Route::VehicleDetails));
    app.update(Action::VehicleLoaded(Ok(Box::new(vehicle(1, "AW69DVJ")))));

    let rent = app.handle_input(key(KeyCode::Char('R')));
    assert!(matches!(&rent[0], Action::RentVehicle(reg) if reg == "AW69DVJ"));

    let ret = app.handle_input(key(KeyCode::Char('U')));
    assert!(matches!(&ret[0], Action::ReturnVehicle(reg) if reg == "AW69DVJ"));
}

#[test]
fn test_analytics_branch_cycle_dispatches_aggregate_loads() {
    let mut app = App::default();
    app.update(Action::Navigate(Route::Analytics));
    app.update(Action::BranchesLoaded(Ok(vec![
        "Luton".to_string(),
        "London".to_string(),
    ])));

    let actions = app.handle_input(key(KeyCode::Right));
    assert_eq!(app.analytics_branch.as_deref(), Some("London"));
    assert_eq!(actions.len(), 5);
    assert!(matches!(&actions[0], Action::LoadStatusByBranch(b) if b == "London"));
}

#[test]
fn test_load_actions_for_route() {
    let mut app = App::default();
    assert_eq!(app.load_actions_for_route().len(), 3);

    app.update(Action::Navigate(Route::MyFleet));
    assert!(matches!(
        app.load_actions_for_route()[0],
        Action::LoadVehicles
    ));

    app.update(Action::Navigate(Route::Analytics));
    // No branch selected yet: branches + fleet insights only
    assert_eq!(app.load_actions_for_route().len(), 2);
    app.analytics_branch = Some("Luton".to_string());
    assert_eq!(app.load_actions_for_route().len(), 7);

    app.update(Action::Navigate(Route::NotFound));
    assert!(app.load_actions_for_route().is_empty());
}

#[test]
fn test_persisted_state_round_trip() {
    let mut app = App::default();
    app.update(Action::Navigate(Route::Analytics));
    app.color_theme = app.color_theme.next();

    let state = app.get_persisted_state();
    assert_eq!(state.last_route.as_deref(), Some("/analytics"));

    let restored = App::new(Some(state), ConnectionContext::default());
    assert_eq!(restored.route, Route::Analytics);
    assert_eq!(restored.color_theme, app.color_theme);
}

#[test]
fn test_tick_prunes_only_expired_toasts() {
    let mut app = App::default();
    app.toasts.push(Toast::info("fresh".to_string()));
    app.update(Action::Tick);
    assert_eq!(app.toasts.len(), 1);
}

#[test]
fn test_fleet_branch_filter_cycles_back_to_all() {
    let mut app = app_with_fleet(&[1]);
    app.update(Action::Navigate(Route::MyFleet));

    // Without branch metadata the key loads it first
    let actions = app.handle_input(key(KeyCode::Char('b')));
    assert!(matches!(actions[0], Action::LoadBranches));

    app.update(Action::BranchesLoaded(Ok(vec![
        "Luton".to_string(),
        "London".to_string(),
    ])));

    let actions = app.handle_input(key(KeyCode::Char('b')));
    assert!(matches!(&actions[0], Action::LoadVehiclesByBranch(b) if b == "Luton"));
    let actions = app.handle_input(key(KeyCode::Char('b')));
    assert!(matches!(&actions[0], Action::LoadVehiclesByBranch(b) if b == "London"));
    // Past the last branch the filter resets to the full fleet
    let actions = app.handle_input(key(KeyCode::Char('b')));
    assert!(matches!(actions[0], Action::LoadVehicles));
    assert!(app.fleet_branch_filter.is_none());
}

#[test]
fn test_fleet_filters_are_mutually_exclusive() {
    let mut app = app_with_fleet(&[1]);
    app.update(Action::Navigate(Route::MyFleet));
    app.update(Action::BranchesLoaded(Ok(vec!["Luton".to_string()])));
    app.update(Action::CategoriesLoaded(Ok(vec!["SUV".to_string()])));

    app.handle_input(key(KeyCode::Char('b')));
    assert_eq!(app.fleet_branch_filter.as_deref(), Some("Luton"));

    app.handle_input(key(KeyCode::Char('c')));
    assert_eq!(app.fleet_category_filter.as_deref(), Some("SUV"));
    assert!(app.fleet_branch_filter.is_none());
}

#[test]
fn test_fleet_search_combines_active_filters() {
    let mut app = app_with_fleet(&[1]);
    app.update(Action::Navigate(Route::MyFleet));

    // No filters active: nothing to search for
    assert!(app.handle_input(key(KeyCode::Char('s'))).is_empty());

    app.fleet_branch_filter = Some("Luton".to_string());
    let actions = app.handle_input(key(KeyCode::Char('s')));
    assert!(matches!(
        &actions[0],
        Action::RunSearch(filters) if filters.branch.as_deref() == Some("Luton")
    ));
}

#[test]
fn test_refresh_honours_active_fleet_filter() {
    let mut app = app_with_fleet(&[1]);
    app.update(Action::Navigate(Route::MyFleet));
    app.fleet_category_filter = Some("SUV".to_string());

    let actions = app.load_actions_for_route();
    assert!(matches!(&actions[0], Action::LoadVehiclesByCategory(c) if c == "SUV"));
}

#[test]
fn test_bulk_completions_toast() {
    let mut app = App::default();
    app.update(Action::VehiclesBulkAdded(Ok(3)));
    app.update(Action::VehiclesBatchEdited(Ok(2)));
    app.update(Action::VehicleEdited(Ok("AW69DVJ".to_string())));
    assert_eq!(app.toasts.len(), 3);

    app.update(Action::VehiclesBulkAdded(Err("boom".to_string())));
    assert_eq!(app.toasts.len(), 4);
}

#[test]
fn test_available_toggle_switches_rows_and_reloads() {
    let mut app = app_with_fleet(&[1, 2]);
    app.update(Action::Navigate(Route::MyFleet));

    let actions = app.handle_input(key(KeyCode::Char('v')));
    assert!(app.show_available_only);
    assert!(matches!(actions[0], Action::LoadAvailable));

    // Until the available list arrives there are no rows to show
    assert!(app.fleet_rows().is_none());
    app.update(Action::AvailableLoaded(Ok(vec![vehicle(1, "VRM1")])));
    assert_eq!(app.fleet_rows().unwrap().len(), 1);
}
