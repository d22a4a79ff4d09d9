use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug)]
pub enum ReviewRepositoryError {
    ProductNotFound,
    DatabaseError(String),
}

impl std::fmt::Display for ReviewRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewRepositoryError::ProductNotFound => write!(f, "Product not found"),
            ReviewRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ReviewRepositoryError {}

#[derive(Debug, Clone)]
pub struct CreateReviewData {
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewResult {
    pub id: Uuid,
    pub product_id: Uuid,
    pub text: String,
    pub date: DateTime<Utc>,
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create_review(
        &self,
        data: CreateReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError>;
}
