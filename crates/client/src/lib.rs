//! Fleet REST API client.
//!
//! This crate provides a type-safe client for the fleet-management
//! backend API: vehicle CRUD and rental operations under `/cars`, and
//! branch/category aggregates under `/analytics`. Requests optionally
//! carry a static bearer token.

pub mod client;
pub mod error;
pub mod models;
mod serde_helpers;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::{FleetClient, FleetClientBuilder};
pub use error::{ClientError, Result};
pub use models::{
    Ack, ColourClass, NewVehicle, SearchFilters, SearchResponse, Vehicle, VehicleListing,
    VehicleStatus, VehicleUpdate,
};
