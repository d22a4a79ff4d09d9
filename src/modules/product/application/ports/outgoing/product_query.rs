use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Views
// ============================================================================

/// Name-only slice of a user, embedded wherever a product view needs its
/// owner or a rating/review needs its author.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserRefView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

/// Compact product card for list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCardView {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub photos: Vec<String>,
    pub owner: UserRefView,
    pub average_rating: f64,
    pub rating_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatingView {
    pub user: UserRefView,
    pub stars: i16,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewView {
    pub user: UserRefView,
    pub date: DateTime<Utc>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRefView {
    pub id: Uuid,
    pub name: String,
}

/// Everything the detail endpoint shows, nested sub-resources included.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailView {
    pub id: Uuid,
    pub category: CategoryRefView,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub is_original: bool,
    pub video_path: Option<String>,
    pub photos: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub owner: UserRefView,
    pub ratings: Vec<RatingView>,
    pub reviews: Vec<ReviewView>,
    pub average_rating: f64,
    pub rating_count: u64,
}

// ============================================================================
// Filters & sorting
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ProductListFilter {
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    pub category_id: Option<Uuid>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub is_original: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

// ============================================================================
// Port
// ============================================================================

#[derive(Debug)]
pub enum ProductQueryError {
    NotFound,
    DatabaseError(String),
}

impl std::fmt::Display for ProductQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductQueryError::NotFound => write!(f, "Product not found"),
            ProductQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ProductQueryError {}

#[async_trait]
pub trait ProductQuery: Send + Sync {
    async fn list(
        &self,
        filter: ProductListFilter,
        sort: ProductSort,
    ) -> Result<Vec<ProductCardView>, ProductQueryError>;

    async fn get_by_id(&self, product_id: Uuid) -> Result<ProductDetailView, ProductQueryError>;
}
