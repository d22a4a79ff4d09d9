use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::rating::application::ports::outgoing::{
    RatingItemView, RatingQuery, RatingQueryError,
};

#[derive(Debug)]
pub enum GetRatingsError {
    QueryFailed(String),
}

impl std::fmt::Display for GetRatingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetRatingsError::QueryFailed(msg) => write!(f, "Failed to list ratings: {}", msg),
        }
    }
}

impl std::error::Error for GetRatingsError {}

#[async_trait]
pub trait IGetRatingsUseCase: Send + Sync {
    async fn execute(
        &self,
        product_id: Option<Uuid>,
    ) -> Result<Vec<RatingItemView>, GetRatingsError>;
}

pub struct GetRatingsUseCase {
    query: Arc<dyn RatingQuery>,
}

impl GetRatingsUseCase {
    pub fn new(query: Arc<dyn RatingQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IGetRatingsUseCase for GetRatingsUseCase {
    async fn execute(
        &self,
        product_id: Option<Uuid>,
    ) -> Result<Vec<RatingItemView>, GetRatingsError> {
        self.query
            .list(product_id)
            .await
            .map_err(|RatingQueryError::DatabaseError(msg)| GetRatingsError::QueryFailed(msg))
    }
}
