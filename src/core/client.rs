//! HTTP client with a middleware pipeline
//!
//! This module owns the `reqwest` transport. Each call resolves the project
//! base URL from the settings provider, runs the request middleware chain,
//! sends the request, and passes the buffered outcome through the response
//! middleware chain before decoding the body.

use crate::core::constants::content;
use crate::core::error::ApiError;
use crate::core::middleware::{
    ApiRequest, AuthHeaders, ContentTypeGate, RawResponse, RequestMiddleware, ResponseMiddleware,
};
use crate::core::session::SessionProvider;
use crate::core::settings::SettingsProvider;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Async HTTP client bound to a settings provider
pub struct HttpClient {
    client: Client,
    settings: Arc<dyn SettingsProvider>,
    request_middleware: Vec<Arc<dyn RequestMiddleware>>,
    response_middleware: Vec<Arc<dyn ResponseMiddleware>>,
}

impl HttpClient {
    /// Create a client with the default middleware chains
    ///
    /// # Arguments
    ///
    /// * `timeout` - Per-request timeout applied by the transport
    /// * `settings` - Source of `api_base_url` and `project_id`
    /// * `session` - Session consulted by the auth middleware
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the transport cannot be built
    pub fn new(
        timeout: Duration,
        settings: Arc<dyn SettingsProvider>,
        session: Arc<dyn SessionProvider>,
    ) -> Result<Self, ApiError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static(content::JSON));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            client,
            settings,
            request_middleware: vec![Arc::new(AuthHeaders::new(session))],
            response_middleware: vec![Arc::new(ContentTypeGate)],
        })
    }

    /// Append a request middleware, run after the existing ones
    pub fn with_request_middleware(mut self, middleware: Arc<dyn RequestMiddleware>) -> Self {
        self.request_middleware.push(middleware);
        self
    }

    /// Append a response middleware, run after the existing ones
    pub fn with_response_middleware(mut self, middleware: Arc<dyn ResponseMiddleware>) -> Self {
        self.response_middleware.push(middleware);
        self
    }

    /// Project base URL, recomputed from current settings
    pub fn base_url(&self) -> Result<String, ApiError> {
        Ok(self.settings.settings()?.base_url())
    }

    /// Run a request through the full pipeline and return the decoded body
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let url = format!("{}{}", self.base_url()?, request.path);

        let mut request = request;
        for middleware in &self.request_middleware {
            request = middleware.on_request(request).await?;
        }

        debug!(request_id = %request_id, "{} {}", request.method, url);

        let mut outcome = self.send(&url, request).await;
        if let Err(ApiError::Network(ref e)) = outcome {
            warn!(request_id = %request_id, "Request to {} failed: {}", url, e);
        }

        for middleware in &self.response_middleware {
            outcome = middleware.on_response(outcome).await;
        }

        let response = outcome?;
        debug!(request_id = %request_id, "Response status {}", response.status);
        Ok(response.into_json())
    }

    async fn send(&self, url: &str, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut req_builder = self
            .client
            .request(request.method, url)
            .headers(request.headers);

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        let response = req_builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
