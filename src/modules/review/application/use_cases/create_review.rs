use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::review::application::ports::outgoing::{
    CreateReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};

#[derive(Debug)]
pub enum CreateReviewError {
    EmptyText,
    ProductNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for CreateReviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateReviewError::EmptyText => write!(f, "Review text cannot be empty"),
            CreateReviewError::ProductNotFound => write!(f, "Product not found"),
            CreateReviewError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreateReviewError {}

#[async_trait]
pub trait ICreateReviewUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        text: String,
    ) -> Result<ReviewResult, CreateReviewError>;
}

pub struct CreateReviewUseCase {
    repository: Arc<dyn ReviewRepository>,
}

impl CreateReviewUseCase {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ICreateReviewUseCase for CreateReviewUseCase {
    async fn execute(
        &self,
        user_id: Uuid,
        product_id: Uuid,
        text: String,
    ) -> Result<ReviewResult, CreateReviewError> {
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(CreateReviewError::EmptyText);
        }

        self.repository
            .create_review(CreateReviewData {
                user_id,
                product_id,
                text,
            })
            .await
            .map_err(|e| match e {
                ReviewRepositoryError::ProductNotFound => CreateReviewError::ProductNotFound,
                other => CreateReviewError::RepositoryError(other.to_string()),
            })
    }
}
