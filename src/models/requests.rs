//! Fixed-shape request bodies and query parameters
//!
//! Field names are camelCase on the wire. Optional fields are omitted when
//! unset rather than sent as `null`.

use serde::Serialize;
use serde_json::Value;

/// Body for `POST /datasets`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatasetBody {
    pub dataset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `PUT /datasets/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateDatasetBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for `DELETE /datasets/{id}/views/{id}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteViewBody {
    /// Row identifier; the backend accepts strings or numbers
    pub row_id: Value,
}

/// Body for `POST /admin:syncResources`
#[derive(Debug, Clone, Serialize)]
pub struct SyncResourcesBody {
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// Query for `GET /ingestion`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestionQuery {
    pub bucket_name: String,
    pub dataset_id: String,
    pub table_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_dataset_omits_missing_description() {
        let body = CreateDatasetBody {
            dataset_id: "d1".to_string(),
            description: None,
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"datasetId": "d1"}));
    }

    #[test]
    fn test_sync_resources_uses_type_key() {
        let body = SyncResourcesBody {
            resource_type: "policies".to_string(),
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"type": "policies"}));
    }

    #[test]
    fn test_delete_view_keeps_numeric_row_id() {
        let body = DeleteViewBody { row_id: json!(7) };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"rowId": 7}));
    }
}
