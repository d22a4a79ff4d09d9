use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::LoyaltyStatus;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::cart::application::domain::pricing::{line_total, total_price};
use crate::cart::application::ports::outgoing::{CartItemRecord, CartRepository};

// ========================= View =========================

#[derive(Debug, Clone, Serialize)]
pub struct CartProductView {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: Uuid,
    pub product: CartProductView,
    pub quantity: i32,
    pub line_total: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub status: LoyaltyStatus,
    pub discount_rate: f64,
    pub total_price: f64,
}

pub fn build_cart_view(records: Vec<CartItemRecord>, status: LoyaltyStatus) -> CartView {
    let lines: Vec<(i64, i32)> = records.iter().map(|r| (r.price, r.quantity)).collect();

    CartView {
        items: records
            .into_iter()
            .map(|r| CartItemView {
                id: r.id,
                product: CartProductView {
                    id: r.product_id,
                    name: r.product_name,
                    price: r.price,
                },
                quantity: r.quantity,
                line_total: line_total(r.price, r.quantity),
            })
            .collect(),
        status,
        discount_rate: status.discount_rate(),
        total_price: total_price(&lines, status),
    }
}

// ========================= Error =========================

#[derive(Debug)]
pub enum GetCartError {
    UserNotFound,
    QueryFailed(String),
}

impl std::fmt::Display for GetCartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetCartError::UserNotFound => write!(f, "User not found"),
            GetCartError::QueryFailed(msg) => write!(f, "Failed to fetch cart: {}", msg),
        }
    }
}

impl std::error::Error for GetCartError {}

// ========================= Use Case =========================

#[async_trait]
pub trait IGetCartUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<CartView, GetCartError>;
}

/// Totals are recomputed from the rows on every call; nothing is cached.
pub struct GetCartUseCase {
    cart_repository: Arc<dyn CartRepository>,
    user_query: Arc<dyn UserQuery>,
}

impl GetCartUseCase {
    pub fn new(cart_repository: Arc<dyn CartRepository>, user_query: Arc<dyn UserQuery>) -> Self {
        Self {
            cart_repository,
            user_query,
        }
    }
}

#[async_trait]
impl IGetCartUseCase for GetCartUseCase {
    async fn execute(&self, user_id: Uuid) -> Result<CartView, GetCartError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(GetCartError::QueryFailed)?
            .ok_or(GetCartError::UserNotFound)?;

        let cart_id = self
            .cart_repository
            .get_or_create_cart(user_id)
            .await
            .map_err(|e| GetCartError::QueryFailed(e.to_string()))?;

        let records = self
            .cart_repository
            .list_items(cart_id)
            .await
            .map_err(|e| GetCartError::QueryFailed(e.to_string()))?;

        Ok(build_cart_view(records, user.status))
    }
}
