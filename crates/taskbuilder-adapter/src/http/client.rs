/*
[INPUT]:  HTTP configuration (endpoint URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for query API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::{AdapterError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials attached as headers to every query request
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    pub login_id: String,
    pub password: String,
    pub org_id: String,
}

/// Client for the workflow query API
#[derive(Debug, Clone)]
pub struct QueryClient {
    http_client: Client,
    endpoint: Url,
    credentials: ApiCredentials,
}

impl QueryClient {
    /// Create a new client with default configuration
    pub fn new(endpoint: &str, credentials: ApiCredentials) -> Result<Self> {
        Self::with_config(ClientConfig::default(), endpoint, credentials)
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        config: ClientConfig,
        endpoint: &str,
        credentials: ApiCredentials,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            endpoint: Url::parse(endpoint)?,
            credentials,
        })
    }

    /// Credentials in use
    pub fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }

    /// Configured query endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the query POST with credential headers and a JSON body
    pub(crate) fn query_request<B: Serialize>(&self, body: &B) -> RequestBuilder {
        self.http_client
            .post(self.endpoint.clone())
            .header("loginId", &self.credentials.login_id)
            .header("password", &self.credentials.password)
            .header("orgId", &self.credentials.org_id)
            .json(body)
    }

    /// Send a query request and decode the JSON response body.
    ///
    /// A reply without a JSON content type keeps its raw body in the error
    /// so callers can surface it verbatim.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("application/json"))
            .unwrap_or(false);
        let body = response.text().await?;

        if !is_json {
            return Err(AdapterError::NonJsonResponse {
                status: status.as_u16(),
                body,
            });
        }
        if !status.is_success() {
            return Err(AdapterError::api_error(status, body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
