//! Account operations

use crate::api::client::{ApiClient, id_field, take_id_field};
use crate::core::constants::{field, path};
use crate::core::error::ApiError;
use crate::models::Payload;
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    /// GET /accounts, or /datasets/{datasetId}/accounts when the payload
    /// names a dataset
    pub async fn get_accounts(&self, payload: &Payload) -> Result<Value, ApiError> {
        let url = match id_field(payload, field::DATASET_ID) {
            Some(dataset_id) => format!("{}/{}{}", path::DATASETS, dataset_id, path::ACCOUNTS),
            None => path::ACCOUNTS.to_string(),
        };
        self.get(url).await
    }

    /// GET /accounts/{account_id}
    pub async fn get_account(&self, account_id: &str) -> Result<Value, ApiError> {
        self.get(format!("{}/{}", path::ACCOUNTS, account_id)).await
    }

    /// Create or update an account
    ///
    /// Without `accountId` the payload is POSTed to /accounts. With one, the
    /// ID is stripped from the payload and the rest is PUT to
    /// /accounts/{accountId}.
    pub async fn save_account(&self, mut payload: Payload) -> Result<Value, ApiError> {
        match take_id_field(&mut payload, field::ACCOUNT_ID) {
            None => {
                self.send(Method::POST, path::ACCOUNTS.to_string(), &payload).await
            }
            Some(account_id) => {
                self.send(
                    Method::PUT,
                    format!("{}/{}", path::ACCOUNTS, account_id),
                    &payload,
                )
                .await
            }
        }
    }

    /// DELETE /accounts/{account_id} with `payload` as the body
    pub async fn delete_account(
        &self,
        account_id: &str,
        payload: Payload,
    ) -> Result<Value, ApiError> {
        self.send(
            Method::DELETE,
            format!("{}/{}", path::ACCOUNTS, account_id),
            &payload,
        )
        .await
    }
}
