use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::cart::application::ports::outgoing::{CartRepository, CartRepositoryError};

#[derive(Debug)]
pub enum RemoveCartItemError {
    ItemNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for RemoveCartItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoveCartItemError::ItemNotFound => write!(f, "Cart item not found"),
            RemoveCartItemError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RemoveCartItemError {}

#[async_trait]
pub trait IRemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, item_id: Uuid) -> Result<(), RemoveCartItemError>;
}

pub struct RemoveCartItemUseCase {
    repository: Arc<dyn CartRepository>,
}

impl RemoveCartItemUseCase {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IRemoveCartItemUseCase for RemoveCartItemUseCase {
    async fn execute(&self, user_id: Uuid, item_id: Uuid) -> Result<(), RemoveCartItemError> {
        let cart_id = self
            .repository
            .get_or_create_cart(user_id)
            .await
            .map_err(|e| RemoveCartItemError::RepositoryError(e.to_string()))?;

        self.repository
            .remove_item(cart_id, item_id)
            .await
            .map_err(|e| match e {
                CartRepositoryError::ItemNotFound => RemoveCartItemError::ItemNotFound,
                other => RemoveCartItemError::RepositoryError(other.to_string()),
            })
    }
}
