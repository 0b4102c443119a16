//! Data models mirrored from the fleet backend API.

mod common;
mod vehicle;

pub use common::{Ack, ApiErrorBody};
pub use vehicle::{
    ColourClass, NewVehicle, SearchFilters, SearchResponse, Vehicle, VehicleListing, VehicleStatus,
    VehicleUpdate,
};
