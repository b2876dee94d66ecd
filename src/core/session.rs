//! Session identity consumed by the auth middleware
//!
//! The session provider is an external collaborator: it knows whether a user
//! is logged in, which account they use, and how to mint a bearer token.
//! The client only reads it, once per outgoing request.

use crate::core::error::SessionError;
use async_trait::async_trait;

/// Trait for session/auth providers
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Whether a user is currently authenticated
    fn is_logged_in(&self) -> bool;

    /// Email-like account identifier of the current user, if known
    fn current_account_email(&self) -> Option<String>;

    /// Fetch a fresh bearer token for the current user
    async fn id_token(&self) -> Result<String, SessionError>;
}

/// Session with a fixed identity and token
#[derive(Debug, Clone)]
pub struct StaticSession {
    logged_in: bool,
    account_email: Option<String>,
    id_token: Option<String>,
}

impl StaticSession {
    /// Create a logged-in session that always hands out `id_token`
    pub fn logged_in(account_email: Option<String>, id_token: impl Into<String>) -> Self {
        Self {
            logged_in: true,
            account_email,
            id_token: Some(id_token.into()),
        }
    }

    /// Create a session from raw configuration values
    pub fn new(logged_in: bool, account_email: Option<String>, id_token: Option<String>) -> Self {
        Self {
            logged_in,
            account_email,
            id_token,
        }
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn current_account_email(&self) -> Option<String> {
        self.account_email.clone()
    }

    async fn id_token(&self) -> Result<String, SessionError> {
        if !self.logged_in {
            return Err(SessionError::NotLoggedIn);
        }
        self.id_token
            .clone()
            .ok_or_else(|| SessionError::TokenUnavailable("no token configured".to_string()))
    }
}

/// Session that is never authenticated
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousSession;

#[async_trait]
impl SessionProvider for AnonymousSession {
    fn is_logged_in(&self) -> bool {
        false
    }

    fn current_account_email(&self) -> Option<String> {
        None
    }

    async fn id_token(&self) -> Result<String, SessionError> {
        Err(SessionError::NotLoggedIn)
    }
}
