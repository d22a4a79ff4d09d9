use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::product::application::ports::outgoing::UserRefView;

#[derive(Debug, Clone, Serialize)]
pub struct RatingItemView {
    pub id: Uuid,
    pub user: UserRefView,
    pub product_id: Uuid,
    pub stars: i16,
}

#[derive(Debug)]
pub enum RatingQueryError {
    DatabaseError(String),
}

impl std::fmt::Display for RatingQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for RatingQueryError {}

#[async_trait]
pub trait RatingQuery: Send + Sync {
    /// All ratings, optionally narrowed to one product.
    async fn list(
        &self,
        product_id: Option<Uuid>,
    ) -> Result<Vec<RatingItemView>, RatingQueryError>;
}
