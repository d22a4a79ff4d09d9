use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::review::application::ports::outgoing::{
    ReviewItemView, ReviewQuery, ReviewQueryError,
};

#[derive(Debug)]
pub enum GetReviewsError {
    QueryFailed(String),
}

impl std::fmt::Display for GetReviewsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetReviewsError::QueryFailed(msg) => write!(f, "Failed to list reviews: {}", msg),
        }
    }
}

impl std::error::Error for GetReviewsError {}

#[async_trait]
pub trait IGetReviewsUseCase: Send + Sync {
    async fn execute(
        &self,
        product_id: Option<Uuid>,
    ) -> Result<Vec<ReviewItemView>, GetReviewsError>;
}

pub struct GetReviewsUseCase {
    query: Arc<dyn ReviewQuery>,
}

impl GetReviewsUseCase {
    pub fn new(query: Arc<dyn ReviewQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IGetReviewsUseCase for GetReviewsUseCase {
    async fn execute(
        &self,
        product_id: Option<Uuid>,
    ) -> Result<Vec<ReviewItemView>, GetReviewsError> {
        self.query
            .list(product_id)
            .await
            .map_err(|ReviewQueryError::DatabaseError(msg)| GetReviewsError::QueryFailed(msg))
    }
}
