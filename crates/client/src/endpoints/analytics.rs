//! Analytics endpoints under `/analytics`.
//!
//! Aggregates are backend-computed display data; their shapes are not
//! part of the client contract, so responses are surfaced as raw JSON.

use reqwest::Client;
use serde_json::Value;

use crate::endpoints::{send_request, with_auth};
use crate::error::Result;

async fn fetch_aggregate(
    client: &Client,
    url: String,
    token: Option<&str>,
    query: &[(&str, &str)],
) -> Result<Value> {
    let builder = with_auth(client.get(&url), token).query(query);
    let response = send_request(builder).await?;
    Ok(response.json().await?)
}

/// Fleet-wide insights: totals, utilization, composition.
pub async fn fleet_insights(client: &Client, base_url: &str, token: Option<&str>) -> Result<Value> {
    fetch_aggregate(client, format!("{}/analytics/fleet", base_url), token, &[]).await
}

/// Status breakdown for one branch.
pub async fn status_by_branch(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    branch: &str,
) -> Result<Value> {
    fetch_aggregate(
        client,
        format!("{}/analytics/status-by-branch", base_url),
        token,
        &[("branch", branch)],
    )
    .await
}

/// Category breakdown for one branch.
pub async fn category_by_branch(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    branch: &str,
) -> Result<Value> {
    fetch_aggregate(
        client,
        format!("{}/analytics/category-by-branch", base_url),
        token,
        &[("branch", branch)],
    )
    .await
}

/// Rental utilisation for one branch.
pub async fn rental_utilisation_by_branch(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    branch: &str,
) -> Result<Value> {
    fetch_aggregate(
        client,
        format!("{}/analytics/rental-utilisation-by-branch", base_url),
        token,
        &[("branch", branch)],
    )
    .await
}

/// Rented vehicles grouped by category for one branch.
pub async fn rented_by_category(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    branch: &str,
) -> Result<Value> {
    fetch_aggregate(
        client,
        format!("{}/analytics/rented-by-category", base_url),
        token,
        &[("branch", branch)],
    )
    .await
}

/// Percentage of vehicles with issues (service required or damaged)
/// for one branch.
pub async fn issues_percentage(
    client: &Client,
    base_url: &str,
    token: Option<&str>,
    branch: &str,
) -> Result<Value> {
    fetch_aggregate(
        client,
        format!("{}/analytics/issues-percentage", base_url),
        token,
        &[("branch", branch)],
    )
    .await
}
