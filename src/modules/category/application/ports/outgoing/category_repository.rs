use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug)]
pub enum CategoryRepositoryError {
    NameTaken,
    CategoryNotFound,
    DatabaseError(String),
}

impl std::fmt::Display for CategoryRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryRepositoryError::NameTaken => write!(f, "Category name already exists"),
            CategoryRepositoryError::CategoryNotFound => write!(f, "Category not found"),
            CategoryRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for CategoryRepositoryError {}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CategoryResult {
    pub id: Uuid,
    pub name: String,
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Names are unique; a duplicate insert maps to `NameTaken`.
    async fn create_category(&self, name: String)
        -> Result<CategoryResult, CategoryRepositoryError>;

    /// Deletes the category. Cascades through its products to their
    /// photos, ratings, reviews and cart items.
    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError>;
}
