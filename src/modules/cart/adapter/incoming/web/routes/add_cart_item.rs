use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::cart::application::use_cases::add_cart_item::AddCartItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct AddCartItemRequestDto {
    pub product_id: Uuid,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

#[derive(Serialize)]
struct CartItemDto {
    id: String,
    product_id: String,
    product_name: String,
    price: i64,
    quantity: i32,
}

#[post("/api/cart/items")]
pub async fn add_cart_item_handler(
    user: AuthenticatedUser,
    payload: web::Json<AddCartItemRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    match data
        .cart
        .add_item
        .execute(user.user_id, dto.product_id, dto.quantity)
        .await
    {
        Ok(item) => {
            info!(
                user_id = %user.user_id,
                product_id = %item.product_id,
                quantity = item.quantity,
                "Cart item added"
            );
            ApiResponse::created(CartItemDto {
                id: item.id.to_string(),
                product_id: item.product_id.to_string(),
                product_name: item.product_name,
                price: item.price,
                quantity: item.quantity,
            })
        }

        Err(AddCartItemError::InvalidQuantity) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Quantity must be at least 1")
        }

        Err(AddCartItemError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }

        Err(AddCartItemError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to add cart item");
            ApiResponse::internal_error()
        }
    }
}
