//! Policy operations

use crate::api::client::{ApiClient, take_id_field};
use crate::core::constants::{field, path};
use crate::core::error::ApiError;
use crate::models::Payload;
use reqwest::Method;
use serde_json::Value;

impl ApiClient {
    pub async fn get_policies(&self) -> Result<Value, ApiError> {
        self.get(path::POLICIES.to_string()).await
    }

    pub async fn get_policy(&self, policy_id: &str) -> Result<Value, ApiError> {
        self.get(format!("{}/{}", path::POLICIES, policy_id)).await
    }

    /// Accounts granted access through a policy
    pub async fn get_policy_accounts(&self, policy_id: &str) -> Result<Value, ApiError> {
        self.get(format!("{}/{}{}", path::POLICIES, policy_id, path::ACCOUNTS)).await
    }

    /// POST /policies, or PUT /policies/{policyId} with the ID stripped
    pub async fn save_policy(&self, mut payload: Payload) -> Result<Value, ApiError> {
        match take_id_field(&mut payload, field::POLICY_ID) {
            None => {
                self.send(Method::POST, path::POLICIES.to_string(), &payload).await
            }
            Some(policy_id) => {
                self.send(
                    Method::PUT,
                    format!("{}/{}", path::POLICIES, policy_id),
                    &payload,
                )
                .await
            }
        }
    }

    pub async fn delete_policy(
        &self,
        policy_id: &str,
        payload: Payload,
    ) -> Result<Value, ApiError> {
        self.send(
            Method::DELETE,
            format!("{}/{}", path::POLICIES, policy_id),
            &payload,
        )
        .await
    }
}
