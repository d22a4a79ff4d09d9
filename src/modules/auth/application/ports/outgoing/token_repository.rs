use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt;
use uuid::Uuid;

#[derive(Debug)]
pub enum TokenRepositoryError {
    InvalidToken,
    DatabaseError(String),
}

impl fmt::Display for TokenRepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenRepositoryError::InvalidToken => write!(f, "Token is invalid or already expired"),
            TokenRepositoryError::DatabaseError(msg) => write!(f, "Token store error: {}", msg),
        }
    }
}
impl Error for TokenRepositoryError {}

/// Revocation store for refresh tokens.
///
/// Only token *hashes* are ever stored. An entry lives exactly as long as
/// the token it revokes would have; after that the token is rejected by
/// signature verification anyway.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError>;

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError>;
}
