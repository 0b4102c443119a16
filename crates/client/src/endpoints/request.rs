//! Shared request plumbing: auth header and response-to-error mapping.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ApiErrorBody;

/// Attach the bearer token when one is configured.
pub(crate) fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(t) => builder.header("Authorization", format!("Bearer {}", t)),
        None => builder,
    }
}

/// Send a request and map non-success statuses to `ApiError`.
///
/// The error message is taken from the backend's JSON error body when
/// one can be parsed, otherwise the raw body text is used.
pub(crate) async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(parsed) => parsed
            .display_message()
            .map(|m| m.to_string())
            .unwrap_or(body),
        Err(_) => body,
    };

    debug!(status, %url, "Request failed");

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
