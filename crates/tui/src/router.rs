//! Static route table for the dashboard views.
//!
//! Five fixed paths plus a terminal catch-all. `parse` is total:
//! every unknown path resolves to `NotFound`, never an error. There
//! are no guards, no nested routes, and no dynamic segments.

/// A dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Results,
    VehicleDetails,
    MyFleet,
    Analytics,
    NotFound,
}

impl Route {
    /// Resolve a path to a route. Unmatched paths fall through to the
    /// terminal `NotFound` route.
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => Route::Home,
            "/results" => Route::Results,
            "/vehicle" => Route::VehicleDetails,
            "/my-fleet" => Route::MyFleet,
            "/analytics" => Route::Analytics,
            _ => Route::NotFound,
        }
    }

    /// The canonical path of this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Results => "/results",
            Route::VehicleDetails => "/vehicle",
            Route::MyFleet => "/my-fleet",
            Route::Analytics => "/analytics",
            Route::NotFound => "/404",
        }
    }

    /// Title shown in the header.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Results => "Search Results",
            Route::VehicleDetails => "Vehicle Details",
            Route::MyFleet => "My Fleet",
            Route::Analytics => "Analytics",
            Route::NotFound => "Not Found",
        }
    }

    /// Next route in cyclic navigation order.
    ///
    /// NotFound is terminal: reachable only by parsing an unknown
    /// path, and excluded from the cycle.
    pub fn next(self) -> Self {
        match self {
            Route::Home => Route::Results,
            Route::Results => Route::VehicleDetails,
            Route::VehicleDetails => Route::MyFleet,
            Route::MyFleet => Route::Analytics,
            Route::Analytics => Route::Home,
            Route::NotFound => Route::Home,
        }
    }

    /// Previous route in cyclic navigation order.
    pub fn previous(self) -> Self {
        match self {
            Route::Home => Route::Analytics,
            Route::Results => Route::Home,
            Route::VehicleDetails => Route::Results,
            Route::MyFleet => Route::VehicleDetails,
            Route::Analytics => Route::MyFleet,
            Route::NotFound => Route::Home,
        }
    }
}
