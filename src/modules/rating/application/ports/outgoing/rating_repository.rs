use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug)]
pub enum RatingRepositoryError {
    ProductNotFound,
    DatabaseError(String),
}

impl std::fmt::Display for RatingRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingRepositoryError::ProductNotFound => write!(f, "Product not found"),
            RatingRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for RatingRepositoryError {}

#[derive(Debug, Clone)]
pub struct CreateRatingData {
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub stars: i16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingResult {
    pub id: Uuid,
    pub product_id: Uuid,
    pub stars: i16,
}

/// No (user, product) uniqueness: every submitted rating is a new row,
/// and repeat ratings all count toward the average.
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn create_rating(
        &self,
        data: CreateRatingData,
    ) -> Result<RatingResult, RatingRepositoryError>;
}
