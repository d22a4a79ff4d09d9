use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::cart::application::ports::outgoing::CartRepository;

#[derive(Debug)]
pub enum ClearCartError {
    RepositoryError(String),
}

impl std::fmt::Display for ClearCartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClearCartError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ClearCartError {}

#[async_trait]
pub trait IClearCartUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<(), ClearCartError>;
}

/// Empties the cart but keeps the cart row itself.
pub struct ClearCartUseCase {
    repository: Arc<dyn CartRepository>,
}

impl ClearCartUseCase {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IClearCartUseCase for ClearCartUseCase {
    async fn execute(&self, user_id: Uuid) -> Result<(), ClearCartError> {
        let cart_id = self
            .repository
            .get_or_create_cart(user_id)
            .await
            .map_err(|e| ClearCartError::RepositoryError(e.to_string()))?;

        self.repository
            .clear(cart_id)
            .await
            .map_err(|e| ClearCartError::RepositoryError(e.to_string()))
    }
}
