//! Common test utilities for integration tests.
//!
//! Re-exports the fixture loader and the types every test file uses,
//! so test modules can `use common::*;`.

// Re-export test utilities from fleet-client
#[allow(unused_imports)]
pub use fleet_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use fleet_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};
