use thiserror::Error;

/// Единственный вид ошибки доступа к API
///
/// Network failures, non-success statuses and undecodable bodies all end up
/// here; the original diagnostic text is kept as the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("API Error: {0}")]
pub struct ApiError(pub String);

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}
