use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::product::application::use_cases::delete_product::DeleteProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Owner-only. Photos, ratings, reviews and cart items referencing the
/// product disappear with it.
#[delete("/api/products/{id}")]
pub async fn delete_product_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data
        .product
        .delete
        .execute(user.user_id, product_id)
        .await
    {
        Ok(()) => {
            info!(product_id = %product_id, "Product deleted");
            ApiResponse::no_content()
        }

        Err(DeleteProductError::NotOwner) => {
            warn!(
                requester = %user.user_id,
                product_id = %product_id,
                "Product deletion rejected: not the owner"
            );
            ApiResponse::forbidden("NOT_OWNER", "You can only delete your own products")
        }

        Err(DeleteProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }

        Err(DeleteProductError::RepositoryError(ref e)) => {
            error!(error = %e, "Product deletion failed");
            ApiResponse::internal_error()
        }
    }
}
