/*
[INPUT]:  HTTP client configuration and query API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - query API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod query;

pub use error::{AdapterError, Result};

pub use client::{ApiCredentials, ClientConfig, QueryClient};
