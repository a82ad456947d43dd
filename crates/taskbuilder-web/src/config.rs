/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed application configuration
[POS]:    Configuration layer - API credentials and server setup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};

/// Top-level configuration for the inspector web app
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Remote query API connection
    pub api: ApiConfig,
    /// Listen address for the web UI
    #[serde(default = "default_listen")]
    pub listen: String,
}

/// Query API connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Query endpoint URL
    pub endpoint: String,
    /// Login identifier sent as the `loginId` header
    pub login_id: String,
    /// Password sent as the `password` header
    pub password: String,
    /// Organization identifier sent as the `orgId` header
    pub org_id: String,
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
