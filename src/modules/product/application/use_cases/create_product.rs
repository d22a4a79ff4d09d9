use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::product::application::ports::outgoing::{
    CreateProductData, ProductRepository, ProductRepositoryError, ProductResult,
};

// ========================= Command =========================

#[derive(Debug, Clone)]
pub struct CreateProductCommand {
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub is_original: bool,
    pub video_path: Option<String>,
}

#[derive(Debug, Clone)]
pub enum CreateProductCommandError {
    EmptyName,
    NameTooLong,
    NegativePrice,
}

impl std::fmt::Display for CreateProductCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateProductCommandError::EmptyName => write!(f, "Product name cannot be empty"),
            CreateProductCommandError::NameTooLong => {
                write!(f, "Product name must not exceed 64 characters")
            }
            CreateProductCommandError::NegativePrice => {
                write!(f, "Price must be zero or positive")
            }
        }
    }
}

impl std::error::Error for CreateProductCommandError {}

impl CreateProductCommand {
    pub fn validate(&self) -> Result<(), CreateProductCommandError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CreateProductCommandError::EmptyName);
        }
        if name.len() > 64 {
            return Err(CreateProductCommandError::NameTooLong);
        }
        if self.price < 0 {
            return Err(CreateProductCommandError::NegativePrice);
        }
        Ok(())
    }
}

// ========================= Error =========================

#[derive(Debug)]
pub enum CreateProductError {
    Invalid(CreateProductCommandError),
    CategoryNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for CreateProductError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateProductError::Invalid(e) => write!(f, "{}", e),
            CreateProductError::CategoryNotFound => write!(f, "Category not found"),
            CreateProductError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateProductError {}

// ========================= Use Case =========================

#[async_trait]
pub trait ICreateProductUseCase: Send + Sync {
    /// `owner` is the authenticated requester; products always belong to
    /// whoever created them.
    async fn execute(
        &self,
        owner: Uuid,
        command: CreateProductCommand,
    ) -> Result<ProductResult, CreateProductError>;
}

pub struct CreateProductUseCase {
    repository: Arc<dyn ProductRepository>,
}

impl CreateProductUseCase {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ICreateProductUseCase for CreateProductUseCase {
    async fn execute(
        &self,
        owner: Uuid,
        command: CreateProductCommand,
    ) -> Result<ProductResult, CreateProductError> {
        command.validate().map_err(CreateProductError::Invalid)?;

        self.repository
            .create_product(CreateProductData {
                category_id: command.category_id,
                owner_id: owner,
                name: command.name.trim().to_string(),
                description: command.description,
                price: command.price,
                is_original: command.is_original,
                video_path: command.video_path,
            })
            .await
            .map_err(|e| match e {
                ProductRepositoryError::CategoryNotFound => CreateProductError::CategoryNotFound,
                other => CreateProductError::RepositoryError(other.to_string()),
            })
    }
}
