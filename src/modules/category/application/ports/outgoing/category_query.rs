use async_trait::async_trait;
use uuid::Uuid;

use super::category_repository::CategoryResult;

#[derive(Debug)]
pub enum CategoryQueryError {
    DatabaseError(String),
}

impl std::fmt::Display for CategoryQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for CategoryQueryError {}

#[async_trait]
pub trait CategoryQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<CategoryResult>, CategoryQueryError>;
    async fn find_by_id(
        &self,
        category_id: Uuid,
    ) -> Result<Option<CategoryResult>, CategoryQueryError>;
}
