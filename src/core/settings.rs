//! Settings access and the in-memory settings fixture
//!
//! The client never caches settings. It asks its [`SettingsProvider`] for a
//! fresh snapshot on every call, so an update is visible to the next request.

use crate::core::error::ApiError;
use crate::models::Payload;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::RwLock;
use tracing::debug;

/// Snapshot of the settings the client needs to build URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub api_base_url: String,
    pub project_id: String,
}

impl Settings {
    pub fn new(api_base_url: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            project_id: project_id.into(),
        }
    }

    /// Base URL for all project-scoped calls
    pub fn base_url(&self) -> String {
        format!("{}/projects/{}", self.api_base_url, self.project_id)
    }
}

/// Read-only access to the current settings
pub trait SettingsProvider: Send + Sync {
    fn settings(&self) -> Result<Settings, ApiError>;
}

impl SettingsProvider for Settings {
    fn settings(&self) -> Result<Settings, ApiError> {
        Ok(self.clone())
    }
}

/// Settings operations served without touching the network
#[async_trait]
pub trait SettingsFixture: Send + Sync {
    async fn get_settings(&self) -> Result<Value, ApiError>;

    async fn update_settings(&self, payload: Payload) -> Result<Value, ApiError>;

    async fn reset_settings(&self) -> Result<Value, ApiError>;
}

/// Settings document held in memory
///
/// Serves both as the settings fixture and as the settings provider, so a
/// successful `update_settings` retargets subsequent requests.
#[derive(Debug)]
pub struct InMemorySettings {
    defaults: Payload,
    current: RwLock<Payload>,
}

impl InMemorySettings {
    /// Seed the document from a settings snapshot
    pub fn new(settings: &Settings) -> Self {
        let defaults = match serde_json::to_value(settings) {
            Ok(Value::Object(map)) => map,
            _ => Payload::new(),
        };
        Self::with_defaults(defaults)
    }

    /// Seed the document from an arbitrary JSON object
    pub fn with_defaults(defaults: Payload) -> Self {
        Self {
            current: RwLock::new(defaults.clone()),
            defaults,
        }
    }

    fn snapshot(&self) -> Result<Payload, ApiError> {
        self.current
            .read()
            .map(|doc| doc.clone())
            .map_err(|_| ApiError::Settings("settings lock poisoned".to_string()))
    }
}

impl SettingsProvider for InMemorySettings {
    fn settings(&self) -> Result<Settings, ApiError> {
        let doc = self.snapshot()?;
        serde_json::from_value(Value::Object(doc))
            .map_err(|e| ApiError::Settings(format!("invalid settings document: {}", e)))
    }
}

#[async_trait]
impl SettingsFixture for InMemorySettings {
    async fn get_settings(&self) -> Result<Value, ApiError> {
        Ok(Value::Object(self.snapshot()?))
    }

    async fn update_settings(&self, payload: Payload) -> Result<Value, ApiError> {
        let mut doc = self
            .current
            .write()
            .map_err(|_| ApiError::Settings("settings lock poisoned".to_string()))?;
        debug!("Updating settings keys: {:?}", payload.keys().collect::<Vec<_>>());
        for (key, value) in payload {
            doc.insert(key, value);
        }
        Ok(Value::Object(doc.clone()))
    }

    async fn reset_settings(&self) -> Result<Value, ApiError> {
        let mut doc = self
            .current
            .write()
            .map_err(|_| ApiError::Settings("settings lock poisoned".to_string()))?;
        *doc = self.defaults.clone();
        Ok(Value::Object(doc.clone()))
    }
}
