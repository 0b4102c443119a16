//! Main fleet REST API client.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::time::Duration;

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Ack, NewVehicle, SearchFilters, SearchResponse, Vehicle, VehicleUpdate};

/// Builder for creating a new FleetClient.
pub struct FleetClientBuilder {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    timeout: Duration,
}

impl Default for FleetClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl FleetClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the fleet backend.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the optional static bearer token.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Set the connection-level request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// Prevents double slashes when concatenating with endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the client.
    pub fn build(self) -> Result<FleetClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "base_url must be http(s): {}",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(FleetClient {
            http,
            base_url,
            api_token: self.api_token,
        })
    }
}

/// Fleet REST API client.
///
/// One method per backend operation; each issues exactly one HTTP
/// request. Methods take `&self`, so the client can be shared behind
/// an `Arc` by concurrent tasks.
#[derive(Debug)]
pub struct FleetClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<SecretString>,
}

impl FleetClient {
    /// Create a new client builder.
    pub fn builder() -> FleetClientBuilder {
        FleetClientBuilder::new()
    }

    fn token(&self) -> Option<&str> {
        self.api_token.as_ref().map(|t| t.expose_secret())
    }

    /// List every vehicle in the fleet.
    pub async fn list_all(&self) -> Result<Vec<Vehicle>> {
        endpoints::list_all(&self.http, &self.base_url, self.token()).await
    }

    /// List vehicles currently available to rent.
    pub async fn list_available(&self) -> Result<Vec<Vehicle>> {
        endpoints::list_available(&self.http, &self.base_url, self.token()).await
    }

    /// List vehicles owned by a branch.
    pub async fn fetch_by_branch(&self, branch: &str) -> Result<Vec<Vehicle>> {
        endpoints::fetch_by_branch(&self.http, &self.base_url, self.token(), branch).await
    }

    /// List vehicles in a category.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<Vehicle>> {
        endpoints::list_by_category(&self.http, &self.base_url, self.token(), category).await
    }

    /// Fetch a single vehicle by registration.
    pub async fn show_by_registration(&self, reg: &str) -> Result<Vehicle> {
        endpoints::show_by_registration(&self.http, &self.base_url, self.token(), reg).await
    }

    /// List the distinct vehicle categories.
    pub async fn category_list(&self) -> Result<Vec<String>> {
        endpoints::category_list(&self.http, &self.base_url, self.token()).await
    }

    /// List the distinct branch names.
    pub async fn branch_list(&self) -> Result<Vec<String>> {
        endpoints::branch_list(&self.http, &self.base_url, self.token()).await
    }

    /// List the known status values.
    pub async fn status_list(&self) -> Result<Vec<String>> {
        endpoints::status_list(&self.http, &self.base_url, self.token()).await
    }

    /// Search vehicles by the given criteria.
    pub async fn search(&self, filters: &SearchFilters) -> Result<SearchResponse> {
        endpoints::search(&self.http, &self.base_url, self.token(), filters).await
    }

    /// Mark a vehicle as rented.
    pub async fn rent_vehicle(&self, reg: &str) -> Result<Ack> {
        endpoints::rent_vehicle(&self.http, &self.base_url, self.token(), reg).await
    }

    /// Mark a rented vehicle as returned.
    pub async fn return_vehicle(&self, reg: &str) -> Result<Ack> {
        endpoints::return_vehicle(&self.http, &self.base_url, self.token(), reg).await
    }

    /// Add a vehicle to the fleet, returning the created record.
    pub async fn add_vehicle(&self, vehicle: &NewVehicle) -> Result<Vehicle> {
        endpoints::add_vehicle(&self.http, &self.base_url, self.token(), vehicle).await
    }

    /// Remove a vehicle by id.
    pub async fn remove_vehicle(&self, id: u64) -> Result<Ack> {
        endpoints::remove_vehicle(&self.http, &self.base_url, self.token(), id).await
    }

    /// Remove several vehicles by id in one call.
    pub async fn batch_remove(&self, ids: &[u64]) -> Result<Ack> {
        endpoints::batch_remove(&self.http, &self.base_url, self.token(), ids).await
    }

    /// Add several vehicles in one call.
    pub async fn bulk_add(&self, vehicles: &[NewVehicle]) -> Result<Ack> {
        endpoints::bulk_add(&self.http, &self.base_url, self.token(), vehicles).await
    }

    /// Update a single vehicle identified by registration.
    pub async fn edit_vehicle(&self, update: &VehicleUpdate) -> Result<Ack> {
        endpoints::edit_vehicle(&self.http, &self.base_url, self.token(), update).await
    }

    /// Apply several vehicle updates in one call.
    pub async fn batch_edit(&self, updates: &[VehicleUpdate]) -> Result<Ack> {
        endpoints::batch_edit(&self.http, &self.base_url, self.token(), updates).await
    }

    /// Fleet-wide insights aggregate.
    pub async fn fleet_insights(&self) -> Result<Value> {
        endpoints::fleet_insights(&self.http, &self.base_url, self.token()).await
    }

    /// Status breakdown for one branch.
    pub async fn status_by_branch(&self, branch: &str) -> Result<Value> {
        endpoints::status_by_branch(&self.http, &self.base_url, self.token(), branch).await
    }

    /// Category breakdown for one branch.
    pub async fn category_by_branch(&self, branch: &str) -> Result<Value> {
        endpoints::category_by_branch(&self.http, &self.base_url, self.token(), branch).await
    }

    /// Rental utilisation for one branch.
    pub async fn rental_utilisation_by_branch(&self, branch: &str) -> Result<Value> {
        endpoints::rental_utilisation_by_branch(&self.http, &self.base_url, self.token(), branch)
            .await
    }

    /// Rented vehicles grouped by category for one branch.
    pub async fn rented_by_category(&self, branch: &str) -> Result<Value> {
        endpoints::rented_by_category(&self.http, &self.base_url, self.token(), branch).await
    }

    /// Percentage of vehicles with issues for one branch.
    pub async fn issues_percentage(&self, branch: &str) -> Result<Value> {
        endpoints::issues_percentage(&self.http, &self.base_url, self.token(), branch).await
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder_minimal() {
        let client = FleetClient::builder()
            .base_url("http://localhost:5000".to_string())
            .build();

        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_client_builder_missing_base_url() {
        let client = FleetClient::builder().build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_client_builder_rejects_non_http_scheme() {
        let client = FleetClient::builder()
            .base_url("ftp://localhost:5000".to_string())
            .build();
        assert!(matches!(client.unwrap_err(), ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_normalize_base_url_trailing_slash() {
        let input = "http://localhost:5000/".to_string();
        assert_eq!(
            FleetClientBuilder::normalize_base_url(input),
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        let input = "http://example.com:5000//".to_string();
        assert_eq!(
            FleetClientBuilder::normalize_base_url(input),
            "http://example.com:5000"
        );
    }

    #[test]
    fn test_client_builder_normalizes_base_url() {
        let client = FleetClient::builder()
            .base_url("http://localhost:5000/".to_string())
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = FleetClient::builder()
            .base_url("http://localhost:5000".to_string())
            .api_token(SecretString::new("super-secret".to_string().into()))
            .build()
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
    }
}
