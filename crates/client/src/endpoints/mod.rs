//! HTTP endpoint functions for the fleet backend API.
//!
//! Each function issues exactly one request. There is no retry, no
//! deduplication, and no in-flight coalescing; callers that fire the
//! same fetch twice get two independent requests.

mod request;

pub mod analytics;
pub mod vehicles;

pub(crate) use request::{send_request, with_auth};

pub use analytics::{
    category_by_branch, fleet_insights, issues_percentage, rental_utilisation_by_branch,
    rented_by_category, status_by_branch,
};
pub use vehicles::{
    add_vehicle, batch_edit, batch_remove, branch_list, bulk_add, category_list, edit_vehicle,
    fetch_by_branch, list_all, list_available, list_by_category, remove_vehicle, rent_vehicle,
    return_vehicle, search, show_by_registration, status_list,
};
