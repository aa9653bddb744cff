// # Meraki Dashboard Client
//
// This crate provides the remote client for the Local DNS console: an
// implementation of `DirectoryApi` and `LocalDnsApi` over the Meraki
// Dashboard API v1.
//
// ## Behavior
//
// - ✅ One HTTP request per trait call
// - ✅ Every failure normalized into `ApiError` (HTTP, connection, timeout,
//   other request failures)
// - ✅ Empty 2xx bodies reported as `ApiResponse::NoContent` (or
//   `Created::NoContent` for creates)
// - ✅ One log line per call; the API key never appears in logs
// - ❌ NO retry or backoff
// - ❌ NO caching (directory data is memoized by `DirectoryCache`)
//
// ## API Reference
//
// - Local DNS: `{base}/organizations/{orgId}/appliance/dns/local/{endpoint}`
//   where endpoint is `profiles`, `records`, `profiles/assignments`,
//   `profiles/assignments/bulkCreate` or `profiles/assignments/bulkDelete`
// - Organizations: GET `{base}/organizations`
// - Networks: GET `{base}/organizations/{orgId}/networks`

use async_trait::async_trait;
use localdns_core::config::{ConsoleConfig, DEFAULT_BASE_URL};
use localdns_core::model::{
    Assignment, AssignmentRef, DnsRecord, Items, NewAssignment, NewDnsRecord, NewProfile, Network,
    Organization, Profile,
};
use localdns_core::traits::{ApiResponse, Created, DirectoryApi, LocalDnsApi};
use localdns_core::{ApiError, ApiResult, Error, Result};
use reqwest::Method;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Response bodies longer than this are cut in log lines
const LOG_BODY_LIMIT: usize = 512;

/// Dashboard API client
///
/// # Security
///
/// The Debug implementation intentionally does NOT expose the API key.
pub struct MerakiClient {
    /// Dashboard API key
    /// ⚠️ NEVER log this value
    api_key: String,

    /// API base URL, without trailing slash
    base_url: String,

    /// HTTP client for API requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the API key
impl std::fmt::Debug for MerakiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MerakiClient")
            .field("api_key", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl MerakiClient {
    /// Create a new client
    ///
    /// # Parameters
    ///
    /// - `api_key`: Dashboard API key
    /// - `base_url`: API base URL (e.g. `https://api.meraki.com/api/v1`)
    /// - `timeout`: Per-request timeout
    ///
    /// # Errors
    ///
    /// Fails fast with a configuration error if the key is empty or the HTTP
    /// client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::config("Dashboard API key cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client against the public Dashboard API with default timeout
    pub fn with_defaults(api_key: impl Into<String>) -> Result<Self> {
        Self::new(api_key, DEFAULT_BASE_URL, DEFAULT_HTTP_TIMEOUT)
    }

    /// Create a client from validated console configuration
    pub fn from_config(config: &ConsoleConfig) -> Result<Self> {
        config.validate()?;
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.http_timeout(),
        )
    }

    /// URL of a Local DNS endpoint of `org_id`
    pub fn local_dns_url(&self, org_id: &str, endpoint: &str) -> String {
        format!(
            "{}/organizations/{}/appliance/dns/local/{}",
            self.base_url, org_id, endpoint
        )
    }

    /// Issue one Local DNS call
    ///
    /// # Returns
    ///
    /// - `Ok(ApiResponse::Json)`: 2xx with a body
    /// - `Ok(ApiResponse::NoContent)`: 2xx with an empty body
    /// - `Err(ApiError)`: any failure, normalized
    pub async fn call(
        &self,
        org_id: &str,
        method: Method,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> ApiResult<ApiResponse> {
        let url = self.local_dns_url(org_id, endpoint);
        self.send(method, &url, payload).await
    }

    async fn send(&self, method: Method, url: &str, payload: Option<&Value>) -> ApiResult<ApiResponse> {
        tracing::info!("Making {} request to {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), url)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json");
        if let Some(payload) = payload {
            tracing::debug!("Payload: {}", payload);
            request = request.json(payload);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = normalize_transport_error(&e);
                tracing::error!("Method: {}, URL: {}, {}", method, url, err);
                return Err(err);
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let err = normalize_transport_error(&e);
                tracing::error!(
                    "Method: {}, URL: {}, Status Code: {}, {}",
                    method,
                    url,
                    status.as_u16(),
                    err
                );
                return Err(err);
            }
        };

        if !status.is_success() {
            tracing::error!(
                "Method: {}, URL: {}, Status Code: {}, Response: {}",
                method,
                url,
                status.as_u16(),
                truncate_for_log(&body)
            );
            return Err(ApiError::http(status.as_u16(), body));
        }

        if body.trim().is_empty() {
            tracing::info!("Response: {} - No content", status.as_u16());
            return Ok(ApiResponse::NoContent);
        }

        tracing::info!("Response: {} - {}", status.as_u16(), truncate_for_log(&body));
        serde_json::from_str(&body)
            .map(ApiResponse::Json)
            .map_err(|e| ApiError::request(format!("Failed to parse response: {}", e)))
    }

    async fn get_directory<T: DeserializeOwned>(&self, url: &str) -> ApiResult<Vec<T>> {
        match self.send(Method::GET, url, None).await? {
            ApiResponse::Json(value) => decode(value),
            ApiResponse::NoContent => Ok(Vec::new()),
        }
    }

    async fn get_items<T: DeserializeOwned>(&self, org_id: &str, endpoint: &str) -> ApiResult<Vec<T>> {
        let response = self.call(org_id, Method::GET, endpoint, None).await?;
        decode_items(response)
    }

    async fn post<T: DeserializeOwned>(
        &self,
        org_id: &str,
        endpoint: &str,
        payload: Value,
    ) -> ApiResult<Created<T>> {
        match self.call(org_id, Method::POST, endpoint, Some(&payload)).await? {
            ApiResponse::Json(value) => decode(value).map(Created::Entity),
            ApiResponse::NoContent => Ok(Created::NoContent),
        }
    }
}

/// Map a transport failure onto the normalized taxonomy
fn normalize_transport_error(err: &reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::timeout(err.to_string())
    } else if err.is_connect() {
        ApiError::connection(err.to_string())
    } else {
        ApiError::request(err.to_string())
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::request(format!("Unexpected response shape: {}", e)))
}

/// Unwrap a `{"items": [...]}` list; an empty body is an empty list
fn decode_items<T: DeserializeOwned>(response: ApiResponse) -> ApiResult<Vec<T>> {
    match response {
        ApiResponse::Json(value) => decode::<Items<T>>(value).map(|items| items.items),
        ApiResponse::NoContent => Ok(Vec::new()),
    }
}

fn truncate_for_log(body: &str) -> String {
    match body.char_indices().nth(LOG_BODY_LIMIT) {
        Some((idx, _)) => format!("{}... ({} bytes)", &body[..idx], body.len()),
        None => body.to_string(),
    }
}

#[async_trait]
impl DirectoryApi for MerakiClient {
    async fn list_organizations(&self) -> ApiResult<Vec<Organization>> {
        let url = format!("{}/organizations", self.base_url);
        self.get_directory(&url).await
    }

    async fn list_networks(&self, org_id: &str) -> ApiResult<Vec<Network>> {
        let url = format!("{}/organizations/{}/networks", self.base_url, org_id);
        self.get_directory(&url).await
    }
}

#[async_trait]
impl LocalDnsApi for MerakiClient {
    async fn list_profiles(&self, org_id: &str) -> ApiResult<Vec<Profile>> {
        self.get_items(org_id, "profiles").await
    }

    async fn create_profile(
        &self,
        org_id: &str,
        profile: &NewProfile,
    ) -> ApiResult<Created<Profile>> {
        self.post(org_id, "profiles", to_payload(profile)?).await
    }

    async fn delete_profile(&self, org_id: &str, profile_id: &str) -> ApiResult<ApiResponse> {
        let endpoint = format!("profiles/{}", profile_id);
        self.call(org_id, Method::DELETE, &endpoint, None).await
    }

    async fn list_records(&self, org_id: &str) -> ApiResult<Vec<DnsRecord>> {
        self.get_items(org_id, "records").await
    }

    async fn create_record(
        &self,
        org_id: &str,
        record: &NewDnsRecord,
    ) -> ApiResult<Created<DnsRecord>> {
        self.post(org_id, "records", to_payload(record)?).await
    }

    async fn delete_record(&self, org_id: &str, record_id: &str) -> ApiResult<ApiResponse> {
        let endpoint = format!("records/{}", record_id);
        self.call(org_id, Method::DELETE, &endpoint, None).await
    }

    async fn list_assignments(&self, org_id: &str) -> ApiResult<Vec<Assignment>> {
        self.get_items(org_id, "profiles/assignments").await
    }

    async fn create_assignments(
        &self,
        org_id: &str,
        items: &[NewAssignment],
    ) -> ApiResult<Created<Vec<Assignment>>> {
        let payload = to_payload(&Items::new(items.to_vec()))?;
        let created: Created<Items<Assignment>> = self
            .post(org_id, "profiles/assignments/bulkCreate", payload)
            .await?;
        Ok(match created {
            Created::Entity(items) => Created::Entity(items.items),
            Created::NoContent => Created::NoContent,
        })
    }

    async fn delete_assignments(
        &self,
        org_id: &str,
        items: &[AssignmentRef],
    ) -> ApiResult<ApiResponse> {
        let payload = to_payload(&Items::new(items.to_vec()))?;
        self.call(
            org_id,
            Method::POST,
            "profiles/assignments/bulkDelete",
            Some(&payload),
        )
        .await
    }
}

fn to_payload<T: serde::Serialize>(body: &T) -> ApiResult<Value> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::request(format!("Failed to encode payload: {}", e)))
}
