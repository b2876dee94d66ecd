//! Backend operations
//!
//! Each resource module adds its methods to [`ApiClient`].

pub mod client;

mod accounts;
mod admin;
mod datasets;
mod ingestion;
mod policies;
mod views;

pub use client::ApiClient;
