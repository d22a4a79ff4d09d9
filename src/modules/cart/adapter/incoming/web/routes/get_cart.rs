use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::cart::application::use_cases::get_cart::GetCartError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The requester's own cart, with line totals and the discounted total.
#[get("/api/cart")]
pub async fn get_cart_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cart.get.execute(user.user_id).await {
        Ok(view) => ApiResponse::success(view),

        Err(GetCartError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(GetCartError::QueryFailed(ref msg)) => {
            error!("Failed to fetch cart: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
