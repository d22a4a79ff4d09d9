use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug)]
pub enum ProductRepositoryError {
    ProductNotFound,
    CategoryNotFound,
    DatabaseError(String),
}

impl std::fmt::Display for ProductRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductRepositoryError::ProductNotFound => write!(f, "Product not found"),
            ProductRepositoryError::CategoryNotFound => write!(f, "Category not found"),
            ProductRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ProductRepositoryError {}

#[derive(Debug, Clone)]
pub struct CreateProductData {
    pub category_id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub is_original: bool,
    pub video_path: Option<String>,
}

/// Full replacement payload for PUT semantics.
#[derive(Debug, Clone)]
pub struct UpdateProductData {
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub is_original: bool,
    pub video_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductResult {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub owner_id: Uuid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoResult {
    pub id: Uuid,
    pub image_path: String,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<ProductResult, ProductRepositoryError>;

    async fn update_product(
        &self,
        product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<ProductResult, ProductRepositoryError>;

    /// Deletes the product. Cascades to its photos, ratings, reviews and
    /// any cart items referencing it.
    async fn delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError>;

    async fn add_photo(
        &self,
        product_id: Uuid,
        image_path: String,
    ) -> Result<PhotoResult, ProductRepositoryError>;

    /// Owner lookup for the per-object write permission check.
    async fn find_owner(&self, product_id: Uuid) -> Result<Option<Uuid>, ProductRepositoryError>;
}
