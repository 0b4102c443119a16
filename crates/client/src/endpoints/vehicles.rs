//! Vehicle endpoints under `/cars`.

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::{send_request, with_auth};
use crate::error::{ClientError, Result};
use crate::models::{
    Ack, NewVehicle, SearchFilters, SearchResponse, Vehicle, VehicleListing, VehicleUpdate,
};

/// Body of `POST /cars/remove-batch`.
#[derive(Debug, Serialize)]
struct BatchRemoveRequest<'a> {
    ids: &'a [u64],
}

async fn fetch_listing(
    client: &Client,
    url: String,
    token: Option<&str>,
    query: &[(&str, &str)],
) -> Result<Vec<Vehicle>> {
    let builder = with_auth(client.get(&url), token).query(query);
    let response = send_request(builder).await?;
    let listing: VehicleListing = response.json().await?;
    Ok(listing.into_vehicles())
}

/// List every vehicle in the fleet.
pub async fn list_all(client: &Client, base_url: &str, token: Option<&str>) -> Result<Vec<Vehicle>> {
    fetch_listing(client, format!("{}/cars/all", base_url), token, &[]).await
}

/// List vehicles currently available to rent.
pub async fn list_available(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
) -> Result<Vec<Vehicle>> {
    fetch_listing(client, format!("{}/cars/available", base_url), token, &[]).await
}

/// List vehicles owned by a branch.
pub async fn fetch_by_branch(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    branch: &str,
) -> Result<Vec<Vehicle>> {
    fetch_listing(
        client,
        format!("{}/cars/fetch_by_branch", base_url),
        token,
        &[("branch", branch)],
    )
    .await
}

/// List vehicles in a category.
pub async fn list_by_category(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    category: &str,
) -> Result<Vec<Vehicle>> {
    fetch_listing(
        client,
        format!("{}/cars/category", base_url),
        token,
        &[("category", category)],
    )
    .await
}

/// Fetch a single vehicle by registration.
pub async fn show_by_registration(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    reg: &str,
) -> Result<Vehicle> {
    let url = format!("{}/cars/show", base_url);
    let builder = with_auth(client.get(&url), token).query(&[("reg", reg)]);
    let response = send_request(builder).await?;

    // The backend answers an unknown registration with a null body
    // rather than a 404.
    let vehicle: Option<Vehicle> = response.json().await?;
    vehicle.ok_or_else(|| ClientError::NotFound(format!("Vehicle '{}' not found", reg)))
}

/// List the distinct vehicle categories.
pub async fn category_list(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
) -> Result<Vec<String>> {
    let url = format!("{}/cars/category-list", base_url);
    let response = send_request(with_auth(client.get(&url), token)).await?;
    Ok(response.json().await?)
}

/// List the distinct branch names.
pub async fn branch_list(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
) -> Result<Vec<String>> {
    let url = format!("{}/cars/branch-list", base_url);
    let response = send_request(with_auth(client.get(&url), token)).await?;
    Ok(response.json().await?)
}

/// List the known status values.
pub async fn status_list(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
) -> Result<Vec<String>> {
    let url = format!("{}/cars/status-list", base_url);
    let response = send_request(with_auth(client.get(&url), token)).await?;
    Ok(response.json().await?)
}

/// Search vehicles by the given criteria.
pub async fn search(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    filters: &SearchFilters,
) -> Result<SearchResponse> {
    let url = format!("{}/cars/search", base_url);
    let builder = with_auth(client.get(&url), token).query(filters);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Mark a vehicle as rented.
pub async fn rent_vehicle(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    reg: &str,
) -> Result<Ack> {
    let url = format!("{}/cars/rent", base_url);
    let builder = with_auth(client.put(&url), token).query(&[("reg", reg)]);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Mark a rented vehicle as returned.
pub async fn return_vehicle(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    reg: &str,
) -> Result<Ack> {
    let url = format!("{}/cars/return", base_url);
    let builder = with_auth(client.put(&url), token).query(&[("reg", reg)]);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Add a vehicle to the fleet, returning the created record.
pub async fn add_vehicle(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    vehicle: &NewVehicle,
) -> Result<Vehicle> {
    let url = format!("{}/cars/add", base_url);
    let builder = with_auth(client.post(&url), token).json(vehicle);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Remove a vehicle by id.
pub async fn remove_vehicle(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    id: u64,
) -> Result<Ack> {
    let url = format!("{}/cars/remove", base_url);
    let builder = with_auth(client.post(&url), token).query(&[("id", id.to_string())]);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Remove several vehicles by id in one call.
pub async fn batch_remove(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    ids: &[u64],
) -> Result<Ack> {
    let url = format!("{}/cars/remove-batch", base_url);
    let builder = with_auth(client.post(&url), token).json(&BatchRemoveRequest { ids });
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Add several vehicles in one call.
pub async fn bulk_add(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    vehicles: &[NewVehicle],
) -> Result<Ack> {
    let url = format!("{}/cars/bulk-add", base_url);
    let builder = with_auth(client.post(&url), token).json(&vehicles);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Update a single vehicle identified by registration.
pub async fn edit_vehicle(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    update: &VehicleUpdate,
) -> Result<Ack> {
    let url = format!("{}/cars/edit", base_url);
    let builder = with_auth(client.put(&url), token).json(update);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Apply several vehicle updates in one call.
pub async fn batch_edit(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    updates: &[VehicleUpdate],
) -> Result<Ack> {
    let url = format!("{}/cars/batch-edit", base_url);
    let builder = with_auth(client.put(&url), token).json(&updates);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}
