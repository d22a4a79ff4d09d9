use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::cart::application::ports::outgoing::{
    CartItemRecord, CartRepository, CartRepositoryError,
};

#[derive(Debug)]
pub enum UpdateCartItemError {
    InvalidQuantity,
    ItemNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for UpdateCartItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateCartItemError::InvalidQuantity => write!(f, "Quantity must be at least 1"),
            UpdateCartItemError::ItemNotFound => write!(f, "Cart item not found"),
            UpdateCartItemError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateCartItemError {}

#[async_trait]
pub trait IUpdateCartItemUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, UpdateCartItemError>;
}

/// Quantity updates go through the requester's own cart; an item id from
/// someone else's cart reads as not-found.
pub struct UpdateCartItemUseCase {
    repository: Arc<dyn CartRepository>,
}

impl UpdateCartItemUseCase {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IUpdateCartItemUseCase for UpdateCartItemUseCase {
    async fn execute(
        &self,
        user_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, UpdateCartItemError> {
        if quantity < 1 {
            return Err(UpdateCartItemError::InvalidQuantity);
        }

        let cart_id = self
            .repository
            .get_or_create_cart(user_id)
            .await
            .map_err(|e| UpdateCartItemError::RepositoryError(e.to_string()))?;

        self.repository
            .set_quantity(cart_id, item_id, quantity)
            .await
            .map_err(|e| match e {
                CartRepositoryError::ItemNotFound => UpdateCartItemError::ItemNotFound,
                other => UpdateCartItemError::RepositoryError(other.to_string()),
            })
    }
}
