use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

/// Ошибки транспортного уровня
///
/// The client collapses all of them into [`contracts::api::ApiError`]; the
/// variants only shape the diagnostic text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16, status_text: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// One outbound GET returning a JSON body.
///
/// Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn get_json(&self, url: &str) -> Result<Value, TransportError>;
}

/// Transport over the browser `fetch` API
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(TransportError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
