use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::product::application::ports::outgoing::{
    PhotoResult, ProductRepository, ProductRepositoryError,
};

#[derive(Debug)]
pub enum AddProductPhotoError {
    EmptyImagePath,
    NotOwner,
    ProductNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for AddProductPhotoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddProductPhotoError::EmptyImagePath => write!(f, "Image path cannot be empty"),
            AddProductPhotoError::NotOwner => {
                write!(f, "Photos can only be added by the product owner")
            }
            AddProductPhotoError::ProductNotFound => write!(f, "Product not found"),
            AddProductPhotoError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for AddProductPhotoError {}

#[async_trait]
pub trait IAddProductPhotoUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Uuid,
        product_id: Uuid,
        image_path: String,
    ) -> Result<PhotoResult, AddProductPhotoError>;
}

/// Photos are stored as upload-path references; the bytes live wherever
/// the upload pipeline put them.
pub struct AddProductPhotoUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl AddProductPhotoUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IAddProductPhotoUseCase for AddProductPhotoUseCase {
    async fn execute(
        &self,
        requester: Uuid,
        product_id: Uuid,
        image_path: String,
    ) -> Result<PhotoResult, AddProductPhotoError> {
        let image_path = image_path.trim().to_string();
        if image_path.is_empty() {
            return Err(AddProductPhotoError::EmptyImagePath);
        }

        let owner = self
            .repository
            .find_owner(product_id)
            .await
            .map_err(|e| AddProductPhotoError::RepositoryError(e.to_string()))?
            .ok_or(AddProductPhotoError::ProductNotFound)?;

        if owner != requester {
            return Err(AddProductPhotoError::NotOwner);
        }

        self.repository
            .add_photo(product_id, image_path)
            .await
            .map_err(|e| match e {
                ProductRepositoryError::ProductNotFound => AddProductPhotoError::ProductNotFound,
                other => AddProductPhotoError::RepositoryError(other.to_string()),
            })
    }
}
