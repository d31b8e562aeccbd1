//! Data access helper
//!
//! Page views call [`ApiClient::fetch_data`]; base URL selection and the API
//! key stay inside the client.

pub mod client;
pub mod transport;

pub use client::{provide_api_client, use_api_client, ApiClient};
pub use contracts::api::{ApiError, QueryParams, QueryValue};
pub use contracts::shared::date_utils::format_date;
pub use transport::{GlooTransport, Transport, TransportError};
