use std::sync::Arc;

use contracts::api::{request_url, unwrap_envelope, ApiConfig, ApiError, QueryParams};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::transport::{GlooTransport, Transport};

/// HTTP client for the metrics backend
///
/// Holds the configuration resolved at startup. Every call is a fresh round
/// trip: no caching, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient<T = GlooTransport> {
    config: Arc<ApiConfig>,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(config: ApiConfig, transport: T) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    pub fn request_url(&self, endpoint: &str, params: &QueryParams) -> Result<String, ApiError> {
        request_url(&self.config, endpoint, params)
    }

    /// Получить данные ресурса `endpoint`
    ///
    /// Issues one GET to `{base_url}/{endpoint}` with `params` and the API key,
    /// unwraps a `{ "data": .. }` envelope when present and decodes the payload
    /// into `R`. Any failure on the way surfaces as [`ApiError`].
    pub async fn fetch_data<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<R, ApiError> {
        let url = self.request_url(endpoint, params)?;
        if params.is_empty() {
            log::debug!("GET {}/{}", self.config.base_url, endpoint);
        } else {
            log::debug!("GET {}/{} {:?}", self.config.base_url, endpoint, params);
        }

        let body = self.transport.get_json(&url).await.map_err(|e| {
            log::error!("Request to '{}' failed: {}", endpoint, e);
            ApiError::new(e.to_string())
        })?;

        serde_json::from_value(unwrap_envelope(body)).map_err(|e| {
            log::error!("Unexpected payload from '{}': {}", endpoint, e);
            ApiError::new(format!("Failed to parse response: {}", e))
        })
    }
}

/// Make the client available to every page through context.
pub fn provide_api_client(config: ApiConfig) {
    provide_context(ApiClient::new(config, GlooTransport));
}

pub fn use_api_client() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient context not found")
}
