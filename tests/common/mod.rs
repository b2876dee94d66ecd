//! Shared helpers for HTTP-level tests

#![allow(dead_code)]

use datashare_client::ApiClient;
use datashare_client::core::client::HttpClient;
use datashare_client::core::session::{AnonymousSession, SessionProvider, StaticSession};
use datashare_client::core::settings::{InMemorySettings, Settings};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use wiremock::ResponseTemplate;

pub const PROJECT: &str = "proj-1";

/// Path under the test project
pub fn project_path(path: &str) -> String {
    format!("/projects/{}{}", PROJECT, path)
}

pub fn client_with_session(
    base_url: &str,
    session: Arc<dyn SessionProvider>,
) -> (ApiClient, Arc<InMemorySettings>) {
    let store = Arc::new(InMemorySettings::new(&Settings::new(base_url, PROJECT)));
    let http = HttpClient::new(Duration::from_secs(5), store.clone(), session)
        .expect("Should build HTTP client");
    (ApiClient::new(http, store.clone()), store)
}

pub fn logged_in_client(base_url: &str) -> ApiClient {
    let session = StaticSession::logged_in(Some("user@example.com".to_string()), "test-token");
    client_with_session(base_url, Arc::new(session)).0
}

pub fn anonymous_client(base_url: &str) -> ApiClient {
    client_with_session(base_url, Arc::new(AnonymousSession)).0
}

pub fn json_response(status: u16, body: Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

pub fn payload(value: Value) -> datashare_client::Payload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {}", other),
    }
}
