use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::review::application::use_cases::create_review::CreateReviewError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequestDto {
    pub product_id: Uuid,
    pub text: String,
}

#[derive(Serialize)]
struct CreatedReviewDto {
    id: String,
    product_id: String,
    text: String,
}

#[post("/api/reviews")]
pub async fn create_review_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateReviewRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    match data
        .review
        .create
        .execute(user.user_id, dto.product_id, dto.text)
        .await
    {
        Ok(review) => {
            info!(review_id = %review.id, product_id = %review.product_id, "Review created");
            ApiResponse::created(CreatedReviewDto {
                id: review.id.to_string(),
                product_id: review.product_id.to_string(),
                text: review.text,
            })
        }

        Err(CreateReviewError::EmptyText) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Review text cannot be empty")
        }

        Err(CreateReviewError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }

        Err(CreateReviewError::RepositoryError(ref e)) => {
            error!(error = %e, "Review creation failed");
            ApiResponse::internal_error()
        }
    }
}
