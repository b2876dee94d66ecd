//! Administrative operations

use crate::api::client::ApiClient;
use crate::core::constants::path;
use crate::core::error::ApiError;
use crate::models::SyncResourcesBody;
use reqwest::Method;
use serde_json::Value;
use tracing::info;

impl ApiClient {
    /// POST /admin:initSchema, no body
    pub async fn init_schema(&self) -> Result<Value, ApiError> {
        self.send_empty(Method::POST, path::INIT_SCHEMA.to_string()).await
    }

    /// POST /admin:syncResources with `{type}`
    pub async fn sync_resources(&self, resource_type: &str) -> Result<Value, ApiError> {
        info!("Performing sync for type: {}", resource_type);
        let body = SyncResourcesBody {
            resource_type: resource_type.to_string(),
        };
        self.send(Method::POST, path::SYNC_RESOURCES.to_string(), &body).await
    }
}
