//! Dataset operations

use crate::api::client::ApiClient;
use crate::core::constants::path;
use crate::core::error::ApiError;
use crate::models::{CreateDatasetBody, UpdateDatasetBody};
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    /// GET /datasets
    pub async fn get_datasets(&self) -> Result<Value, ApiError> {
        self.get(path::DATASETS.to_string()).await
    }

    /// POST /datasets
    pub async fn create_dataset(
        &self,
        dataset_id: &str,
        description: Option<&str>,
    ) -> Result<Value, ApiError> {
        let body = CreateDatasetBody {
            dataset_id: dataset_id.to_string(),
            description: description.map(str::to_string),
        };
        self.send(Method::POST, path::DATASETS.to_string(), &body).await
    }

    /// PUT /datasets/{dataset_id}
    pub async fn update_dataset(
        &self,
        dataset_id: &str,
        description: Option<&str>,
    ) -> Result<Value, ApiError> {
        let body = UpdateDatasetBody {
            description: description.map(str::to_string),
        };
        self.send(
            Method::PUT,
            format!("{}/{}", path::DATASETS, dataset_id),
            &body,
        )
        .await
    }

    /// DELETE /datasets/{dataset_id}
    pub async fn delete_dataset(&self, dataset_id: &str) -> Result<Value, ApiError> {
        self.send_empty(Method::DELETE, format!("{}/{}", path::DATASETS, dataset_id)).await
    }
}
