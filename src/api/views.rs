//! Authorized view and table operations

use crate::api::client::{ApiClient, id_field, take_id_field};
use crate::core::constants::{field, path};
use crate::core::error::ApiError;
use crate::models::{DeleteViewBody, Payload};
use reqwest::Method;
use serde_json::Value;

fn dataset_path(dataset_id: &str) -> String {
    format!("{}/{}", path::DATASETS, dataset_id)
}

impl ApiClient {
    /// GET /views, or /datasets/{datasetId}/views when the payload names a
    /// dataset
    pub async fn get_views(&self, payload: &Payload) -> Result<Value, ApiError> {
        let url = match id_field(payload, field::DATASET_ID) {
            Some(dataset_id) => format!("{}{}", dataset_path(&dataset_id), path::VIEWS),
            None => path::VIEWS.to_string(),
        };
        self.get(url).await
    }

    pub async fn get_view(&self, dataset_id: &str, view_id: &str) -> Result<Value, ApiError> {
        self.get(format!("{}{}/{}", dataset_path(dataset_id), path::VIEWS, view_id)).await
    }

    pub async fn get_tables(&self, dataset_id: &str) -> Result<Value, ApiError> {
        self.get(format!("{}/tables", dataset_path(dataset_id))).await
    }

    pub async fn get_table_columns(
        &self,
        dataset_id: &str,
        table_id: &str,
    ) -> Result<Value, ApiError> {
        self.get(format!(
            "{}/tables/{}/columns",
            dataset_path(dataset_id),
            table_id
        ))
        .await
    }

    /// POST /datasets/{view.datasetId}/views:validate
    ///
    /// The whole payload is sent; the dataset is taken from the nested
    /// `view` object.
    pub async fn validate_view(&self, payload: Payload) -> Result<Value, ApiError> {
        let dataset_id = payload
            .get(field::VIEW)
            .and_then(Value::as_object)
            .and_then(|view| id_field(view, field::DATASET_ID))
            .ok_or(ApiError::MissingField("view.datasetId"))?;

        self.send(
            Method::POST,
            format!("{}{}:validate", dataset_path(&dataset_id), path::VIEWS),
            &payload,
        )
        .await
    }

    /// Create or update an authorized view under `payload.datasetId`
    ///
    /// Without `authorizedViewId` the payload is POSTed to the dataset's
    /// views. With one, the ID is stripped and the rest is PUT to the view.
    pub async fn save_view(&self, mut payload: Payload) -> Result<Value, ApiError> {
        let dataset_id =
            id_field(&payload, field::DATASET_ID).ok_or(ApiError::MissingField("datasetId"))?;
        let views = format!("{}{}", dataset_path(&dataset_id), path::VIEWS);

        match take_id_field(&mut payload, field::AUTHORIZED_VIEW_ID) {
            None => self.send(Method::POST, views, &payload).await,
            Some(view_id) => {
                self.send(Method::PUT, format!("{}/{}", views, view_id), &payload).await
            }
        }
    }

    /// DELETE /datasets/{dataset_id}/views/{view_id} with `{rowId}` as body
    pub async fn delete_view(
        &self,
        dataset_id: &str,
        view_id: &str,
        row_id: impl Into<Value>,
    ) -> Result<Value, ApiError> {
        let body = DeleteViewBody {
            row_id: row_id.into(),
        };
        self.send(
            Method::DELETE,
            format!("{}{}/{}", dataset_path(dataset_id), path::VIEWS, view_id),
            &body,
        )
        .await
    }
}
