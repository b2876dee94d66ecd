//! Ingestion operations

use crate::api::client::ApiClient;
use crate::core::constants::path;
use crate::core::error::ApiError;
use crate::models::{IngestionQuery, Payload};
use reqwest::Method;
use serde_json::Value;
use tracing::info;

impl ApiClient {
    /// GET /ingestion?bucketName=..&datasetId=..&tableId=..
    pub async fn get_ingestion(
        &self,
        bucket_name: &str,
        dataset_id: &str,
        table_id: &str,
    ) -> Result<Value, ApiError> {
        let query = IngestionQuery {
            bucket_name: bucket_name.to_string(),
            dataset_id: dataset_id.to_string(),
            table_id: table_id.to_string(),
        };
        self.get_with_query(path::INGESTION.to_string(), &query).await
    }

    /// PUT /ingestion
    pub async fn save_ingestion(&self, payload: Payload) -> Result<Value, ApiError> {
        info!("Performing ingestion update");
        self.send(Method::PUT, path::INGESTION.to_string(), &payload).await
    }
}
