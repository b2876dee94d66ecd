//! Data-sharing backend API client
//!
//! A thin async client for the data-sharing backend: datasets, accounts,
//! policies, authorized views, ingestion and admin calls. Every request is
//! sent to `{api_base_url}/projects/{project_id}{path}` and passes through a
//! request middleware chain (auth headers) and a response middleware chain
//! (JSON content-type gate).
//!
//! Settings and session state are injected through the
//! [`SettingsProvider`](crate::core::settings::SettingsProvider) and
//! [`SessionProvider`](crate::core::session::SessionProvider) traits and read fresh
//! on every call.

pub mod api;
pub mod core;
pub mod models;

pub use api::ApiClient;
pub use crate::core::error::{ApiError, SessionError};
pub use models::Payload;
