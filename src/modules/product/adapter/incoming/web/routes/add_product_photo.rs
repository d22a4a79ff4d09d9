use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::product::application::use_cases::add_product_photo::AddProductPhotoError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddPhotoRequestDto {
    /// Upload path reference, e.g. "product_images/front.jpg".
    pub image_path: String,
}

#[derive(Serialize)]
struct PhotoDto {
    id: String,
    image_path: String,
}

#[post("/api/products/{id}/photos")]
pub async fn add_product_photo_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<AddPhotoRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data
        .product
        .add_photo
        .execute(user.user_id, product_id, payload.into_inner().image_path)
        .await
    {
        Ok(photo) => ApiResponse::created(PhotoDto {
            id: photo.id.to_string(),
            image_path: photo.image_path,
        }),

        Err(AddProductPhotoError::EmptyImagePath) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Image path cannot be empty")
        }

        Err(AddProductPhotoError::NotOwner) => {
            warn!(
                requester = %user.user_id,
                product_id = %product_id,
                "Photo upload rejected: not the owner"
            );
            ApiResponse::forbidden("NOT_OWNER", "You can only add photos to your own products")
        }

        Err(AddProductPhotoError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }

        Err(AddProductPhotoError::RepositoryError(ref e)) => {
            error!(error = %e, "Photo insert failed");
            ApiResponse::internal_error()
        }
    }
}
