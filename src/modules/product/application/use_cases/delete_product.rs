use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::product::application::ports::outgoing::{ProductRepository, ProductRepositoryError};

#[derive(Debug)]
pub enum DeleteProductError {
    NotOwner,
    ProductNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteProductError::NotOwner => {
                write!(f, "Products can only be deleted by their owner")
            }
            DeleteProductError::ProductNotFound => write!(f, "Product not found"),
            DeleteProductError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteProductError {}

#[async_trait]
pub trait IDeleteProductUseCase: Send + Sync {
    async fn execute(&self, requester: Uuid, product_id: Uuid) -> Result<(), DeleteProductError>;
}

pub struct DeleteProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl DeleteProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IDeleteProductUseCase for DeleteProductUseCase {
    async fn execute(&self, requester: Uuid, product_id: Uuid) -> Result<(), DeleteProductError> {
        let owner = self
            .repository
            .find_owner(product_id)
            .await
            .map_err(|e| DeleteProductError::RepositoryError(e.to_string()))?
            .ok_or(DeleteProductError::ProductNotFound)?;

        if owner != requester {
            return Err(DeleteProductError::NotOwner);
        }

        self.repository
            .delete_product(product_id)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => DeleteProductError::ProductNotFound,
                other => DeleteProductError::RepositoryError(other.to_string()),
            })
    }
}
