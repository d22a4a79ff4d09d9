use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::ports::outgoing::token_repository::TokenRepository;
use crate::auth::application::services::token_hasher::hash_token;

// ========================= Refresh Request =========================

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ========================= Refresh Error =========================

#[derive(Debug, Clone)]
pub enum RefreshTokenError {
    InvalidToken,
    TokenRevoked,
    BlacklistCheckFailed(String),
    TokenGenerationFailed(String),
}

impl std::fmt::Display for RefreshTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshTokenError::InvalidToken => write!(f, "Refresh token is invalid or expired"),
            RefreshTokenError::TokenRevoked => write!(f, "Refresh token has been revoked"),
            RefreshTokenError::BlacklistCheckFailed(msg) => {
                write!(f, "Blacklist check failed: {}", msg)
            }
            RefreshTokenError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for RefreshTokenError {}

// ========================= Refresh Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct RefreshTokenResponse {
    pub access_token: String,
}

// ========================= Refresh Use Case =========================

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError>;
}

pub struct RefreshTokenUseCase {
    token_provider: Arc<dyn TokenProvider>,
    token_repository: Arc<dyn TokenRepository>,
}

impl RefreshTokenUseCase {
    pub fn new(
        token_provider: Arc<dyn TokenProvider>,
        token_repository: Arc<dyn TokenRepository>,
    ) -> Self {
        Self {
            token_provider,
            token_repository,
        }
    }
}

#[async_trait]
impl IRefreshTokenUseCase for RefreshTokenUseCase {
    async fn execute(
        &self,
        request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        let token = request.refresh_token.trim();

        // Revoked tokens must stop minting before signature checks succeed.
        let revoked = self
            .token_repository
            .is_token_blacklisted(&hash_token(token))
            .await
            .map_err(|e| RefreshTokenError::BlacklistCheckFailed(e.to_string()))?;

        if revoked {
            return Err(RefreshTokenError::TokenRevoked);
        }

        let access_token = self
            .token_provider
            .refresh_access_token(token)
            .map_err(|e| {
                use crate::auth::application::ports::outgoing::token_provider::TokenError;
                match e {
                    TokenError::EncodingError(msg) => RefreshTokenError::TokenGenerationFailed(msg),
                    _ => RefreshTokenError::InvalidToken,
                }
            })?;

        Ok(RefreshTokenResponse { access_token })
    }
}
