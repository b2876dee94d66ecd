//! Backend API client
//!
//! `ApiClient` exposes one async method per backend operation. The methods
//! live in the sibling resource modules; this module holds construction, the
//! shared request helpers, the settings delegation, and the ID routing rules
//! used by the create-or-update and scoped-listing calls.

use crate::core::client::HttpClient;
use crate::core::config::Config;
use crate::core::error::ApiError;
use crate::core::middleware::ApiRequest;
use crate::core::settings::{InMemorySettings, SettingsFixture};
use crate::models::Payload;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Number, Value};
use std::sync::Arc;

/// Client for the data-sharing backend
pub struct ApiClient {
    http: HttpClient,
    fixture: Arc<dyn SettingsFixture>,
}

impl ApiClient {
    /// Create a client from an HTTP pipeline and a settings fixture
    pub fn new(http: HttpClient, fixture: Arc<dyn SettingsFixture>) -> Self {
        Self { http, fixture }
    }

    /// Build a client from loaded configuration
    ///
    /// Settings are served from an in-memory document seeded from `config`,
    /// which also backs URL resolution.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let store = Arc::new(InMemorySettings::new(&config.settings()));
        let http = HttpClient::new(config.timeout(), store.clone(), Arc::new(config.session()))?;
        Ok(Self::new(http, store))
    }

    /// Current project base URL
    pub fn base_url(&self) -> Result<String, ApiError> {
        self.http.base_url()
    }

    /// Settings document, served by the fixture
    pub async fn get_settings(&self) -> Result<Value, ApiError> {
        self.fixture.get_settings().await
    }

    /// Merge `payload` into the settings document
    pub async fn update_settings(&self, payload: Payload) -> Result<Value, ApiError> {
        self.fixture.update_settings(payload).await
    }

    /// Restore the default settings document
    pub async fn reset_settings(&self) -> Result<Value, ApiError> {
        self.fixture.reset_settings().await
    }

    pub(crate) async fn get(&self, path: String) -> Result<Value, ApiError> {
        self.http.execute(ApiRequest::new(Method::GET, path)).await
    }

    pub(crate) async fn get_with_query<Q: Serialize>(
        &self,
        path: String,
        query: &Q,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::new(Method::GET, path).with_query(query)?;
        self.http.execute(request).await
    }

    pub(crate) async fn send<B: Serialize>(
        &self,
        method: Method,
        path: String,
        body: &B,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::new(method, path).with_body(serde_json::to_value(body)?);
        self.http.execute(request).await
    }

    pub(crate) async fn send_empty(&self, method: Method, path: String) -> Result<Value, ApiError> {
        self.http.execute(ApiRequest::new(method, path)).await
    }
}

/// Value of an ID field if it counts as present
///
/// Present means a non-empty string or a non-zero number. Missing, `null`,
/// `""`, `0` and non-scalar values are treated as absent.
pub(crate) fn id_field(payload: &Payload, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(render_number(n)),
        _ => None,
    }
}

/// Integral floats render without a fractional part, so `1.0` becomes `1`
fn render_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Remove a present ID field from the payload and return it
///
/// An absent (or falsy) field is left in place.
pub(crate) fn take_id_field(payload: &mut Payload, key: &str) -> Option<String> {
    let id = id_field(payload, key)?;
    payload.remove(key);
    Some(id)
}
