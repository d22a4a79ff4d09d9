use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::token_repository::TokenRepository;
use crate::auth::application::services::token_hasher::hash_token;

// ========================= Logout Request =========================

#[derive(Debug, Clone, Deserialize)]
pub struct LogoutRequest {
    pub refresh_token: String,
}

// ========================= Logout Error =========================

/// Every variant collapses to the same generic bad-request on the wire;
/// the split only exists for logging.
#[derive(Debug, Clone)]
pub enum LogoutError {
    InvalidToken,
    RevocationFailed(String),
}

impl std::fmt::Display for LogoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoutError::InvalidToken => write!(f, "Refresh token is missing or invalid"),
            LogoutError::RevocationFailed(msg) => write!(f, "Token revocation failed: {}", msg),
        }
    }
}

impl std::error::Error for LogoutError {}

// ========================= Logout Use Case =========================

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, request: LogoutRequest) -> Result<(), LogoutError>;
}

pub struct LogoutUseCase {
    token_repository: Arc<dyn TokenRepository>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LogoutUseCase {
    pub fn new(
        token_repository: Arc<dyn TokenRepository>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            token_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, request: LogoutRequest) -> Result<(), LogoutError> {
        let token = request.refresh_token.trim();
        if token.is_empty() {
            return Err(LogoutError::InvalidToken);
        }

        // Only a structurally valid, unexpired refresh token can be revoked.
        let claims = self
            .token_provider
            .verify_token(token)
            .map_err(|_| LogoutError::InvalidToken)?;

        if claims.token_type != "refresh" {
            return Err(LogoutError::InvalidToken);
        }

        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or(LogoutError::InvalidToken)?;

        self.token_repository
            .blacklist_token(hash_token(token), claims.sub, expires_at)
            .await
            .map_err(|e| LogoutError::RevocationFailed(e.to_string()))?;

        Ok(())
    }
}
