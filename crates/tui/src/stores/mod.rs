//! Dependency-injected state stores.
//!
//! Each store owns a disjoint slice of application state and the
//! mutations that apply fetched data to it. Stores are created with
//! the `App` at startup and dropped with it on teardown; nothing here
//! is a global.

mod analytics;
mod branch;
mod remote;
mod vehicle;

pub use analytics::AnalyticsStore;
pub use branch::BranchStore;
pub use remote::Remote;
pub use vehicle::VehicleStore;
