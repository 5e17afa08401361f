//! TfNSW Trip Planner HTTP client.
//!
//! Provides async methods for the departure monitor and stop finder
//! endpoints. Handles authentication and conversion to domain types.

use chrono::{FixedOffset, Utc};
use reqwest::header::{HeaderMap, HeaderValue};

use crate::board::DepartureSource;
use crate::domain::{Departure, StopSuggestion};
use crate::stops::StopSource;

use super::convert::{normalize_departures, stop_suggestions};
use super::error::TfnswError;
use super::types::{DepartureMonitorResponse, StopFinderResponse};

/// Default base URL for the Trip Planner API.
const DEFAULT_BASE_URL: &str = "https://api.transport.nsw.gov.au/v1/tp";

/// Offset used for the request-time parameters (Sydney standard time).
const DEFAULT_REQUEST_OFFSET_SECS: i32 = 10 * 3600;

/// Configuration for the TfNSW client.
#[derive(Debug, Clone)]
pub struct TfnswConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Timezone offset for the itdDate/itdTime request parameters
    pub request_offset: FixedOffset,
}

impl TfnswConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            request_offset: FixedOffset::east_opt(DEFAULT_REQUEST_OFFSET_SECS)
                .expect("valid offset"),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// TfNSW Trip Planner API client.
#[derive(Debug, Clone)]
pub struct TfnswClient {
    http: reqwest::Client,
    base_url: String,
    request_offset: FixedOffset,
}

impl TfnswClient {
    /// Create a new TfNSW client with the given configuration.
    pub fn new(config: TfnswConfig) -> Result<Self, TfnswError> {
        let mut headers = HeaderMap::new();

        // TfNSW uses "Authorization: apikey <KEY>"
        let auth = HeaderValue::from_str(&format!("apikey {}", config.api_key)).map_err(|_| {
            TfnswError::Api {
                status: 0,
                message: "Invalid API key format".to_string(),
            }
        })?;
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            request_offset: config.request_offset,
        })
    }

    /// Get normalized departures for a stop.
    ///
    /// Queries the `departure_mon` endpoint anchored at the current time
    /// in the configured request offset, and normalizes the payload into
    /// ordered `Departure` records.
    pub async fn get_departures(&self, stop_id: &str) -> Result<Vec<Departure>, TfnswError> {
        let now = Utc::now().with_timezone(&self.request_offset);
        let itd_date = now.format("%Y%m%d").to_string();
        let itd_time = now.format("%H%M").to_string();

        let url = format!("{}/departure_mon", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("outputFormat", "rapidJSON"),
                ("coordOutputFormat", "EPSG:4326"),
                ("mode", "direct"),
                ("type_dm", "stop"),
                ("name_dm", stop_id),
                ("depArrMacro", "dep"),
                ("itdDate", &itd_date),
                ("itdTime", &itd_time),
                ("TfNSWTR", "true"),
            ])
            .send()
            .await?;

        let body = check_status(response).await?;

        let monitor: DepartureMonitorResponse =
            serde_json::from_str(&body).map_err(|e| TfnswError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(normalize_departures(&monitor))
    }

    /// Search for stops by free-text name.
    pub async fn search_stops(&self, query: &str) -> Result<Vec<StopSuggestion>, TfnswError> {
        let url = format!("{}/stop_finder", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("outputFormat", "rapidJSON"),
                ("coordOutputFormat", "EPSG:4326"),
                ("type_sf", "stop"),
                ("name_sf", query),
                ("TfNSWTR", "true"),
            ])
            .send()
            .await?;

        let body = check_status(response).await?;

        let finder: StopFinderResponse =
            serde_json::from_str(&body).map_err(|e| TfnswError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        Ok(stop_suggestions(&finder))
    }
}

/// Map error statuses to the error taxonomy, returning the body on success.
async fn check_status(response: reqwest::Response) -> Result<String, TfnswError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(TfnswError::Unauthorized);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(TfnswError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(TfnswError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

impl DepartureSource for TfnswClient {
    async fn departures(&self, stop_id: &str) -> Result<Vec<Departure>, TfnswError> {
        self.get_departures(stop_id).await
    }
}

impl StopSource for TfnswClient {
    async fn find_stops(&self, query: &str) -> Result<Vec<StopSuggestion>, TfnswError> {
        self.search_stops(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = TfnswConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = TfnswConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.request_offset.local_minus_utc(), 10 * 3600);
    }

    #[test]
    fn client_creation() {
        let config = TfnswConfig::new("test-key");
        assert!(TfnswClient::new(config).is_ok());
    }

    // Integration tests against the live API would require a real key;
    // board controller tests exercise the client seam with mocks instead.
}
