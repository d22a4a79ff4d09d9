use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError,
};

#[derive(Debug)]
pub enum DeleteCategoryError {
    NotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteCategoryError::NotFound => write!(f, "Category not found"),
            DeleteCategoryError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteCategoryError {}

#[async_trait]
pub trait IDeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, category_id: Uuid) -> Result<(), DeleteCategoryError>;
}

/// Deleting a category drops every product in it, along with those
/// products' photos, ratings, reviews and cart items.
pub struct DeleteCategoryUseCase {
    repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryUseCase {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IDeleteCategoryUseCase for DeleteCategoryUseCase {
    async fn execute(&self, category_id: Uuid) -> Result<(), DeleteCategoryError> {
        self.repository
            .delete_category(category_id)
            .await
            .map_err(|e| match e {
                CategoryRepositoryError::CategoryNotFound => DeleteCategoryError::NotFound,
                other => DeleteCategoryError::RepositoryError(other.to_string()),
            })
    }
}
