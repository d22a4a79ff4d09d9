use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::cart::application::use_cases::remove_cart_item::RemoveCartItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/cart/items/{id}")]
pub async fn remove_cart_item_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let item_id = path.into_inner();

    match data
        .cart
        .remove_item
        .execute(user.user_id, item_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(RemoveCartItemError::ItemNotFound) => {
            ApiResponse::not_found("CART_ITEM_NOT_FOUND", "Cart item not found")
        }

        Err(RemoveCartItemError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to remove cart item");
            ApiResponse::internal_error()
        }
    }
}
