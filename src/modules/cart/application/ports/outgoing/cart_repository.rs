use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CartRepositoryError {
    #[error("Product not found")]
    ProductNotFound,
    #[error("Cart item not found")]
    ItemNotFound,
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// A cart line joined with the product fields pricing needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_name: String,
    pub price: i64,
    pub quantity: i32,
}

/// One cart per user, created lazily. Item operations are always scoped
/// to a cart id, so one user can never touch another user's lines.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn get_or_create_cart(&self, user_id: Uuid) -> Result<Uuid, CartRepositoryError>;

    async fn list_items(&self, cart_id: Uuid) -> Result<Vec<CartItemRecord>, CartRepositoryError>;

    /// Adding a product already in the cart bumps its quantity instead of
    /// inserting a second line.
    async fn add_item(
        &self,
        cart_id: Uuid,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, CartRepositoryError>;

    async fn set_quantity(
        &self,
        cart_id: Uuid,
        item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItemRecord, CartRepositoryError>;

    async fn remove_item(&self, cart_id: Uuid, item_id: Uuid)
        -> Result<(), CartRepositoryError>;

    async fn clear(&self, cart_id: Uuid) -> Result<(), CartRepositoryError>;
}
