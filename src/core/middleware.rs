//! Request and response middleware
//!
//! Every call runs through two ordered chains: request middleware may rewrite
//! the outgoing [`ApiRequest`] or abort it, and response middleware sees the
//! buffered outcome (a [`RawResponse`] or a transport error) before the body
//! is decoded for the caller.

use crate::core::constants::{content, header};
use crate::core::error::ApiError;
use crate::core::session::SessionProvider;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Outgoing call before it is handed to the transport
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the project base URL, e.g. `/datasets/d1`
    pub path: String,
    /// Query parameters as a flat JSON object
    pub query: Option<Value>,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_query<Q: Serialize>(mut self, query: &Q) -> Result<Self, ApiError> {
        self.query = Some(serde_json::to_value(query)?);
        Ok(self)
    }
}

/// Fully buffered HTTP response
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Raw `Content-Type` header value, if it is valid text
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Decode the body
    ///
    /// An empty body decodes to `null`. A body that does not parse as JSON is
    /// returned as a string, lossily converted if it is not UTF-8.
    pub fn into_json(self) -> Value {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Value::Null;
        }
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&self.body).into_owned()))
    }
}

/// Transforms a request before it is sent
#[async_trait]
pub trait RequestMiddleware: Send + Sync {
    async fn on_request(&self, request: ApiRequest) -> Result<ApiRequest, ApiError>;
}

/// Filters a response outcome before it reaches the caller
#[async_trait]
pub trait ResponseMiddleware: Send + Sync {
    async fn on_response(
        &self,
        outcome: Result<RawResponse, ApiError>,
    ) -> Result<RawResponse, ApiError>;
}

/// Attaches account and bearer token headers for logged-in sessions
pub struct AuthHeaders {
    session: Arc<dyn SessionProvider>,
}

impl AuthHeaders {
    pub fn new(session: Arc<dyn SessionProvider>) -> Self {
        Self { session }
    }
}

#[async_trait]
impl RequestMiddleware for AuthHeaders {
    async fn on_request(&self, mut request: ApiRequest) -> Result<ApiRequest, ApiError> {
        if !self.session.is_logged_in() {
            return Ok(request);
        }

        if let Some(account) = self
            .session
            .current_account_email()
            .filter(|account| !account.is_empty())
        {
            let value = HeaderValue::from_str(&account)
                .map_err(|_| ApiError::InvalidHeader(header::GCP_ACCOUNT.to_string()))?;
            request
                .headers
                .insert(HeaderName::from_static(header::GCP_ACCOUNT), value);
        }

        // Token is fetched for every request; providers handle their own caching.
        let token = self.session.id_token().await?;
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::InvalidHeader(AUTHORIZATION.to_string()))?;
        request.headers.insert(AUTHORIZATION, value);

        Ok(request)
    }
}

/// Rejects any response that is not `application/json`
///
/// Applies to success and HTTP-error responses alike. An HTTP error whose
/// body is JSON passes through and resolves as ordinary data. Transport
/// errors are forwarded untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentTypeGate;

impl ContentTypeGate {
    pub fn is_allowed(content_type: Option<&str>) -> bool {
        content_type.is_some_and(|ct| content::VALID_CONTENT_TYPES.contains(&ct))
    }
}

#[async_trait]
impl ResponseMiddleware for ContentTypeGate {
    async fn on_response(
        &self,
        outcome: Result<RawResponse, ApiError>,
    ) -> Result<RawResponse, ApiError> {
        let response = outcome?;

        if !Self::is_allowed(response.content_type()) {
            warn!(
                "Rejecting response with status {} and content type {:?}",
                response.status,
                response.content_type()
            );
            return Err(ApiError::ContentType);
        }

        if !response.status.is_success() {
            debug!(
                "HTTP error {} carried a JSON body, resolving with it",
                response.status
            );
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SessionError;
    use crate::core::session::{AnonymousSession, StaticSession};
    use serde_json::json;

    struct FailingSession;

    #[async_trait]
    impl SessionProvider for FailingSession {
        fn is_logged_in(&self) -> bool {
            true
        }

        fn current_account_email(&self) -> Option<String> {
            None
        }

        async fn id_token(&self) -> Result<String, SessionError> {
            Err(SessionError::TokenUnavailable("provider offline".to_string()))
        }
    }

    fn response(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(ct).unwrap());
        }
        RawResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers,
            body: body.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn test_auth_headers_when_logged_in() {
        let auth = AuthHeaders::new(Arc::new(StaticSession::logged_in(
            Some("user@example.com".to_string()),
            "tok-1",
        )));
        let request = auth
            .on_request(ApiRequest::new(Method::GET, "/datasets"))
            .await
            .unwrap();

        assert_eq!(request.headers[AUTHORIZATION], "Bearer tok-1");
        assert_eq!(request.headers[header::GCP_ACCOUNT], "user@example.com");
    }

    #[tokio::test]
    async fn test_empty_account_is_not_sent() {
        let auth = AuthHeaders::new(Arc::new(StaticSession::logged_in(Some(String::new()), "t")));
        let request = auth
            .on_request(ApiRequest::new(Method::GET, "/datasets"))
            .await
            .unwrap();

        assert!(request.headers.get(header::GCP_ACCOUNT).is_none());
        assert_eq!(request.headers[AUTHORIZATION], "Bearer t");
    }

    #[tokio::test]
    async fn test_anonymous_request_untouched() {
        let auth = AuthHeaders::new(Arc::new(AnonymousSession));
        let request = auth
            .on_request(ApiRequest::new(Method::GET, "/datasets"))
            .await
            .unwrap();

        assert!(request.headers.is_empty());
    }

    #[tokio::test]
    async fn test_token_failure_aborts() {
        let auth = AuthHeaders::new(Arc::new(FailingSession));
        let result = auth
            .on_request(ApiRequest::new(Method::GET, "/datasets"))
            .await;

        match result {
            Err(ApiError::Auth(SessionError::TokenUnavailable(msg))) => {
                assert_eq!(msg, "provider offline")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_gate_accepts_json_variants() {
        let gate = ContentTypeGate;
        for ct in content::VALID_CONTENT_TYPES {
            let resp = gate
                .on_response(Ok(response(200, Some(ct), r#"{"ok":true}"#)))
                .await
                .unwrap();
            assert_eq!(resp.into_json(), json!({"ok": true}));
        }
    }

    #[tokio::test]
    async fn test_gate_resolves_json_http_error() {
        let resp = ContentTypeGate
            .on_response(Ok(response(404, Some(content::JSON), r#"{"error":"nope"}"#)))
            .await
            .unwrap();
        assert_eq!(resp.into_json(), json!({"error": "nope"}));
    }

    #[tokio::test]
    async fn test_gate_rejects_other_content_types() {
        for (status, ct) in [(200, Some("text/html")), (500, Some("text/plain")), (200, None)] {
            let err = ContentTypeGate
                .on_response(Ok(response(status, ct, "<html></html>")))
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), content::JSON_REQUIRED);
        }
    }

    #[tokio::test]
    async fn test_gate_is_exact_match() {
        let err = ContentTypeGate
            .on_response(Ok(response(200, Some("application/json;charset=UTF-8"), "{}")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::ContentType));
    }

    #[tokio::test]
    async fn test_gate_forwards_upstream_errors() {
        let err = ContentTypeGate
            .on_response(Err(ApiError::MissingField("x")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingField("x")));
    }

    #[test]
    fn test_empty_body_decodes_to_null() {
        assert_eq!(response(204, None, "").into_json(), Value::Null);
    }

    #[test]
    fn test_non_json_body_resolves_as_text() {
        let body = response(500, Some(content::JSON), "Internal Server Error").into_json();
        assert_eq!(body, json!("Internal Server Error"));
    }

    #[test]
    fn test_invalid_utf8_body_is_converted_lossily() {
        let mut resp = response(200, Some(content::JSON), "");
        resp.body = vec![b'o', b'k', 0xff];
        assert_eq!(resp.into_json(), json!("ok\u{fffd}"));
    }

    #[test]
    fn test_query_is_serialized_from_struct() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Query {
            bucket_name: &'static str,
        }

        let request = ApiRequest::new(Method::GET, "/ingestion")
            .with_query(&Query { bucket_name: "b1" })
            .unwrap();
        assert_eq!(request.query, Some(json!({"bucketName": "b1"})));
    }
}
