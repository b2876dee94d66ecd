//! Core client modules
//!
//! This module contains configuration, constants, logging, errors, the
//! injected collaborators (settings and session), the middleware, and the
//! HTTP pipeline.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod session;
pub mod settings;
