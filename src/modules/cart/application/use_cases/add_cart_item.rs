use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::cart::application::ports::outgoing::{
    CartItemRecord, CartRepository, CartRepositoryError,
};

#[derive(Debug)]
pub enum AddCartItemError {
    InvalidQuantity,
    ProductNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for AddCartItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddCartItemError::InvalidQuantity => write!(f, "Quantity must be at least 1"),
            AddCartItemError::ProductNotFound => write!(f, "Product not found"),
            AddCartItemError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for AddCartItemError {}

#[async_trait]
pub trait IAddCartItemUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, AddCartItemError>;
}

pub struct AddCartItemUseCase {
    repository: Arc<dyn CartRepository>,
}

impl AddCartItemUseCase {
    pub fn new(repository: Arc<dyn CartRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IAddCartItemUseCase for AddCartItemUseCase {
    async fn execute(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, AddCartItemError> {
        if quantity < 1 {
            return Err(AddCartItemError::InvalidQuantity);
        }

        let cart_id = self
            .repository
            .get_or_create_cart(user_id)
            .await
            .map_err(|e| AddCartItemError::RepositoryError(e.to_string()))?;

        self.repository
            .add_item(cart_id, product_id, quantity)
            .await
            .map_err(|e| match e {
                CartRepositoryError::ProductNotFound => AddCartItemError::ProductNotFound,
                other => AddCartItemError::RepositoryError(other.to_string()),
            })
    }
}
