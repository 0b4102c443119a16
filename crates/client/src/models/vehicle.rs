//! Vehicle models for the `/cars` endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::serde_helpers::{
    opt_f64_from_string_or_number, opt_u32_from_string_or_number, u64_from_string_or_number,
};

/// Rental status of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VehicleStatus {
    #[serde(rename = "AVAILABLE")]
    Available,
    #[serde(rename = "RENTED")]
    Rented,
    #[serde(rename = "SERVICEREQ")]
    ServiceRequired,
    #[serde(rename = "DAMAGED")]
    Damaged,
    /// Unrecognized status value.
    #[serde(other)]
    #[default]
    Unknown,
}

/// Presentation colour classification for a status.
///
/// Only AVAILABLE renders green; every other status renders red.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourClass {
    Green,
    Red,
}

impl VehicleStatus {
    /// Display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Rented => "Rented",
            Self::ServiceRequired => "Service required",
            Self::Damaged => "Damaged",
            Self::Unknown => "Unknown",
        }
    }

    /// Colour classification used for presentation.
    pub fn colour_class(&self) -> ColourClass {
        match self {
            Self::Available => ColourClass::Green,
            _ => ColourClass::Red,
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A vehicle record as returned by the backend.
///
/// Wire names are camelCase for the multi-word fields; numeric fields
/// deserialize from either JSON numbers or the CSV-store's strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(deserialize_with = "u64_from_string_or_number")]
    pub id: u64,
    #[serde(default)]
    pub make: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub colour: String,
    #[serde(default)]
    pub vin: String,
    #[serde(default, deserialize_with = "opt_u32_from_string_or_number")]
    pub year: Option<u32>,
    /// Vehicle registration mark.
    pub vrm: String,
    #[serde(default)]
    pub category: String,
    #[serde(
        rename = "numberSeats",
        default,
        deserialize_with = "opt_u32_from_string_or_number"
    )]
    pub number_seats: Option<u32>,
    #[serde(
        rename = "dayRate",
        default,
        deserialize_with = "opt_f64_from_string_or_number"
    )]
    pub day_rate: Option<f64>,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(
        rename = "fuelEconomy",
        default,
        deserialize_with = "opt_f64_from_string_or_number"
    )]
    pub fuel_economy: Option<f64>,
    #[serde(default)]
    pub branch: String,
}

impl Vehicle {
    /// "Make Model" display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

/// Payload for creating a vehicle via `POST /cars/add`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub colour: String,
    pub vin: String,
    pub year: u32,
    pub vrm: String,
    pub category: String,
    #[serde(rename = "numberSeats")]
    pub number_seats: u32,
    #[serde(rename = "dayRate")]
    pub day_rate: f64,
    pub status: VehicleStatus,
    #[serde(rename = "fuelEconomy")]
    pub fuel_economy: f64,
    pub branch: String,
}

/// Partial update for `PUT /cars/edit` and `PUT /cars/batch-edit`.
///
/// The registration identifies the vehicle; every other field is
/// optional and omitted from the body when unset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VehicleUpdate {
    pub vrm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "dayRate", skip_serializing_if = "Option::is_none")]
    pub day_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Filters for `GET /cars/search`, passed verbatim as query parameters.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "max_price", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl SearchFilters {
    /// A filter set with only a free-text query.
    pub fn text(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// True when no criterion is set (the backend returns nothing for
    /// an empty filter set).
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.branch.is_none()
            && self.status.is_none()
            && self.category.is_none()
            && self.max_price.is_none()
    }
}

/// Response body of `GET /cars/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Vehicle>,
    #[serde(default)]
    pub count: u64,
    /// Echo of the filters the backend applied; opaque display data.
    #[serde(rename = "filters_used", default)]
    pub filters_used: Option<serde_json::Value>,
}

/// Shape of vehicle list endpoints.
///
/// Some endpoints return a bare array, others wrap it in an object
/// with a `results` field. Both shapes are accepted and normalized to
/// a plain vector.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VehicleListing {
    Bare(Vec<Vehicle>),
    Wrapped { results: Vec<Vehicle> },
}

impl VehicleListing {
    /// Normalize into the vehicle vector, preserving backend order.
    pub fn into_vehicles(self) -> Vec<Vehicle> {
        match self {
            Self::Bare(v) => v,
            Self::Wrapped { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_deserialization() {
        assert_eq!(
            serde_json::from_str::<VehicleStatus>("\"AVAILABLE\"").unwrap(),
            VehicleStatus::Available
        );
        assert_eq!(
            serde_json::from_str::<VehicleStatus>("\"SERVICEREQ\"").unwrap(),
            VehicleStatus::ServiceRequired
        );
        assert_eq!(
            serde_json::from_str::<VehicleStatus>("\"RETIRED\"").unwrap(),
            VehicleStatus::Unknown
        );
    }

    #[test]
    fn test_status_colour_class() {
        assert_eq!(VehicleStatus::Available.colour_class(), ColourClass::Green);
        assert_eq!(VehicleStatus::Rented.colour_class(), ColourClass::Red);
        assert_eq!(VehicleStatus::Damaged.colour_class(), ColourClass::Red);
        assert_eq!(
            VehicleStatus::ServiceRequired.colour_class(),
            ColourClass::Red
        );
    }

    #[test]
    fn test_vehicle_accepts_csv_stringified_numbers() {
        let v: Vehicle = serde_json::from_str(
            r#"{
                "id": "501", "make": "Ford", "model": "Fiesta", "colour": "Grey",
                "vin": "B2IJ49B2B3UYIANSI", "year": "2018", "vrm": "AW69DVJ",
                "category": "Compact", "numberSeats": "5", "dayRate": "50",
                "status": "AVAILABLE", "fuelEconomy": "29.5", "branch": "Luton"
            }"#,
        )
        .unwrap();
        assert_eq!(v.id, 501);
        assert_eq!(v.year, Some(2018));
        assert_eq!(v.number_seats, Some(5));
        assert_eq!(v.day_rate, Some(50.0));
        assert_eq!(v.status, VehicleStatus::Available);
        assert_eq!(v.display_name(), "Ford Fiesta");
    }

    #[test]
    fn test_listing_accepts_bare_array() {
        let listing: VehicleListing = serde_json::from_str(
            r#"[{"id": 1, "vrm": "AA11AAA", "status": "RENTED"}]"#,
        )
        .unwrap();
        let vehicles = listing.into_vehicles();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].vrm, "AA11AAA");
    }

    #[test]
    fn test_listing_accepts_results_wrapper() {
        let listing: VehicleListing = serde_json::from_str(
            r#"{"results": [{"id": 1, "vrm": "AA11AAA"}, {"id": 2, "vrm": "BB22BBB"}]}"#,
        )
        .unwrap();
        let vehicles = listing.into_vehicles();
        assert_eq!(vehicles.len(), 2);
        assert_eq!(vehicles[1].id, 2);
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = VehicleUpdate {
            vrm: "AW69DVJ".to_string(),
            branch: Some("Luton".to_string()),
            ..VehicleUpdate::default()
        };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["vrm"], "AW69DVJ");
        assert_eq!(body["branch"], "Luton");
        assert!(body.get("colour").is_none());
        assert!(body.get("dayRate").is_none());
    }

    #[test]
    fn test_search_filters_is_empty() {
        assert!(SearchFilters::default().is_empty());
        assert!(!SearchFilters::text("Toyota").is_empty());
    }
}
