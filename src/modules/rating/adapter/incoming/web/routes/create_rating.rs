use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::rating::application::use_cases::create_rating::CreateRatingError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateRatingRequestDto {
    pub product_id: Uuid,
    pub stars: i16,
}

#[derive(Serialize)]
struct CreatedRatingDto {
    id: String,
    product_id: String,
    stars: i16,
}

/// The author is always the token holder.
#[post("/api/ratings")]
pub async fn create_rating_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateRatingRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    match data
        .rating
        .create
        .execute(user.user_id, dto.product_id, dto.stars)
        .await
    {
        Ok(rating) => {
            info!(
                rating_id = %rating.id,
                product_id = %rating.product_id,
                stars = rating.stars,
                "Rating created"
            );
            ApiResponse::created(CreatedRatingDto {
                id: rating.id.to_string(),
                product_id: rating.product_id.to_string(),
                stars: rating.stars,
            })
        }

        Err(CreateRatingError::StarsOutOfRange) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Stars must be between 1 and 5")
        }

        Err(CreateRatingError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }

        Err(CreateRatingError::RepositoryError(ref e)) => {
            error!(error = %e, "Rating creation failed");
            ApiResponse::internal_error()
        }
    }
}
