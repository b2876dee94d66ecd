//! Constants for headers, content types, and backend paths
//!
//! This module defines the string constants shared by the middleware and the
//! operation methods so that wire names live in exactly one place.

/// HTTP header names
pub mod header {
    /// Account identifier header attached for logged-in sessions
    pub const GCP_ACCOUNT: &str = "x-gcp-account";

    /// Response content type header
    pub const CONTENT_TYPE: &str = "content-type";
}

/// Content type constants
pub mod content {
    /// JSON media type, also sent as the default `Accept` value
    pub const JSON: &str = "application/json";

    /// JSON media type with explicit charset
    pub const JSON_UTF8: &str = "application/json; charset=utf-8";

    /// Content types a response must carry to be accepted
    pub const VALID_CONTENT_TYPES: [&str; 2] = [JSON, JSON_UTF8];

    /// Rejection message for responses outside the allow-list
    pub const JSON_REQUIRED: &str = "Content-Type: application/json is required";
}

/// Payload field names used for routing
pub mod field {
    pub const ACCOUNT_ID: &str = "accountId";
    pub const POLICY_ID: &str = "policyId";
    pub const DATASET_ID: &str = "datasetId";
    pub const AUTHORIZED_VIEW_ID: &str = "authorizedViewId";
    pub const VIEW: &str = "view";
}

/// Backend collection paths, relative to the project base URL
pub mod path {
    pub const DATASETS: &str = "/datasets";
    pub const ACCOUNTS: &str = "/accounts";
    pub const POLICIES: &str = "/policies";
    pub const VIEWS: &str = "/views";
    pub const INGESTION: &str = "/ingestion";
    pub const INIT_SCHEMA: &str = "/admin:initSchema";
    pub const SYNC_RESOURCES: &str = "/admin:syncResources";
}
