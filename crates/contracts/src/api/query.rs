//! Параметры запроса и сборка URL
//!
//! Caller parameters keep their insertion order on the wire; the static API key
//! is always appended last and overrides any caller-supplied `key`.

use std::fmt;

use chrono::NaiveDate;

use super::config::ApiConfig;
use super::error::ApiError;
use crate::shared::date_utils::format_date;

/// Query parameter carrying the static API key.
pub const API_KEY_PARAM: &str = "key";

#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{}", n),
            QueryValue::Float(n) => write!(f, "{}", n),
            QueryValue::Bool(b) => write!(f, "{}", b),
            QueryValue::Date(d) => f.write_str(&format_date(d)),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<NaiveDate> for QueryValue {
    fn from(value: NaiveDate) -> Self {
        QueryValue::Date(value)
    }
}

/// Ordered set of caller-supplied query parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Replaces an existing value in place, keeping its position.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        let name = name.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.pairs.push((name, value));
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<QueryValue> {
        let index = self.pairs.iter().position(|(n, _)| n == name)?;
        Some(self.pairs.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Wire pairs: caller parameters first, then `key`.
    pub fn with_api_key(&self, api_key: &str) -> Vec<(String, String)> {
        self.pairs
            .iter()
            .filter(|(name, _)| name != API_KEY_PARAM)
            .map(|(name, value)| (name.clone(), value.to_string()))
            .chain(std::iter::once((
                API_KEY_PARAM.to_string(),
                api_key.to_string(),
            )))
            .collect()
    }

    pub fn to_query_string(&self, api_key: &str) -> String {
        self.with_api_key(api_key)
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Full request URL: `{base_url}/{endpoint}?{params}&key={api_key}`
pub fn request_url(
    config: &ApiConfig,
    endpoint: &str,
    params: &QueryParams,
) -> Result<String, ApiError> {
    let endpoint = endpoint.trim_matches('/');
    if endpoint.is_empty() {
        return Err(ApiError::new("endpoint must not be empty"));
    }

    // Each segment is a path component; `?`, `#` and spaces must not leak into the URL.
    let mut path = Vec::new();
    for segment in endpoint.split('/') {
        if segment.is_empty() {
            return Err(ApiError::new(format!("malformed endpoint '{}'", endpoint)));
        }
        path.push(urlencoding::encode(segment));
    }

    Ok(format!(
        "{}/{}?{}",
        config.base_url.trim_end_matches('/'),
        path.join("/"),
        params.to_query_string(&config.api_key)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev_config() -> ApiConfig {
        ApiConfig::new("/api", "test-key")
    }

    #[test]
    fn test_key_is_appended_last() {
        let params = QueryParams::new()
            .with("from", "2024-01-01")
            .with("to", "2024-01-31");
        assert_eq!(
            params.to_query_string("test-key"),
            "from=2024-01-01&to=2024-01-31&key=test-key"
        );
    }

    #[test]
    fn test_static_key_overrides_caller_key() {
        let params = QueryParams::new().with("key", "forged").with("limit", 10);
        assert_eq!(
            params.with_api_key("real"),
            vec![
                ("limit".to_string(), "10".to_string()),
                ("key".to_string(), "real".to_string()),
            ]
        );
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = QueryParams::new().with("a", 1).with("b", 2);
        assert_eq!(params.insert("a", 3), Some(QueryValue::Int(1)));
        assert_eq!(params.to_query_string("k"), "a=3&b=2&key=k");
        assert_eq!(params.remove("a"), Some(QueryValue::Int(3)));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_scalar_values_render() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let params: QueryParams = [
            ("dateFrom", QueryValue::from(date)),
            ("price", QueryValue::from(12.5)),
            ("isSupply", QueryValue::from(true)),
            ("q", QueryValue::from("a b&c")),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            params.to_query_string("k"),
            "dateFrom=2024-03-07&price=12.5&isSupply=true&q=a%20b%26c&key=k"
        );
    }

    #[test]
    fn test_request_url() {
        let params = QueryParams::new()
            .with("from", "2024-01-01")
            .with("to", "2024-01-31");
        assert_eq!(
            request_url(&dev_config(), "orders", &params).unwrap(),
            "/api/orders?from=2024-01-01&to=2024-01-31&key=test-key"
        );
        assert_eq!(
            request_url(&dev_config(), "/sales/", &QueryParams::new()).unwrap(),
            "/api/sales?key=test-key"
        );
    }

    #[test]
    fn test_request_url_rejects_empty_endpoint() {
        let err = request_url(&dev_config(), "/", &QueryParams::new()).unwrap_err();
        assert!(err.to_string().starts_with("API Error"));
    }

    #[test]
    fn test_request_url_encodes_endpoint_segments() {
        assert_eq!(
            request_url(&dev_config(), "sales report?x", &QueryParams::new()).unwrap(),
            "/api/sales%20report%3Fx?key=test-key"
        );
        assert_eq!(
            request_url(&dev_config(), "reports/daily#top", &QueryParams::new()).unwrap(),
            "/api/reports/daily%23top?key=test-key"
        );
        assert!(request_url(&dev_config(), "reports//daily", &QueryParams::new()).is_err());
    }

    #[test]
    fn test_is_empty_tracks_pairs() {
        let mut params = QueryParams::new();
        assert!(params.is_empty());
        params.insert("limit", 10);
        assert!(!params.is_empty());
        params.remove("limit");
        assert!(params.is_empty());
    }
}
