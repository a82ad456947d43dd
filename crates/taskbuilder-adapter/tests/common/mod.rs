/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for taskbuilder-adapter tests

use taskbuilder_adapter::ApiCredentials;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials used across the integration tests
pub fn mock_credentials() -> ApiCredentials {
    ApiCredentials {
        login_id: "ops@example.com".to_string(),
        password: "secret".to_string(),
        org_id: "org-1".to_string(),
    }
}
