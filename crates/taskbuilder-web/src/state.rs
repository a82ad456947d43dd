/*
[INPUT]:  Application configuration
[OUTPUT]: Shared per-request application state
[POS]:    Web layer - handler state
[UPDATE]: When handlers need new shared resources
*/

use std::sync::Arc;

use taskbuilder_adapter::{ApiCredentials, QueryClient};

use crate::config::ApiConfig;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<QueryClient>,
}

impl AppState {
    /// Build the state from the API section of the configuration
    pub fn from_config(config: &ApiConfig) -> taskbuilder_adapter::Result<Self> {
        let credentials = ApiCredentials {
            login_id: config.login_id.clone(),
            password: config.password.clone(),
            org_id: config.org_id.clone(),
        };
        let client = QueryClient::new(&config.endpoint, credentials)?;
        Ok(Self {
            client: Arc::new(client),
        })
    }
}
