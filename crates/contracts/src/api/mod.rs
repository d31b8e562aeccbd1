//! Building blocks of the data access helper
//!
//! Everything here is transport-agnostic: the frontend `ApiClient` glues these
//! pieces to an HTTP transport.

pub mod config;
pub mod envelope;
pub mod error;
pub mod query;

pub use config::{ApiConfig, DeploymentMode};
pub use envelope::unwrap_envelope;
pub use error::ApiError;
pub use query::{request_url, QueryParams, QueryValue, API_KEY_PARAM};
