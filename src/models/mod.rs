//! API data models
//!
//! Payloads are free-form JSON objects owned by the caller. Only calls with
//! a fixed body or query shape get a typed struct.

pub mod requests;

/// Caller-defined request payload
pub type Payload = serde_json::Map<String, serde_json::Value>;

pub use requests::{
    CreateDatasetBody, DeleteViewBody, IngestionQuery, SyncResourcesBody, UpdateDatasetBody,
};
