use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::cart::application::use_cases::update_cart_item::UpdateCartItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateCartItemRequestDto {
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

#[put("/api/cart/items/{id}")]
pub async fn update_cart_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateCartItemRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let item_id = path.into_inner();

    match data
        .cart
        .update_item
        .execute(user.user_id, item_id, payload.quantity)
        .await
    {
        Ok(item) => ApiResponse::success(CartItemDto {
            id: item.id.to_string(),
            product_id: item.product_id.to_string(),
            product_name: item.product_name,
            price: item.price,
            quantity: item.quantity,
        }),

        Err(UpdateCartItemError::InvalidQuantity) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Quantity must be at least 1")
        }

        Err(UpdateCartItemError::ItemNotFound) => {
            ApiResponse::not_found("CART_ITEM_NOT_FOUND", "Cart item not found")
        }

        Err(UpdateCartItemError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to update cart item");
            ApiResponse::internal_error()
        }
    }
}
