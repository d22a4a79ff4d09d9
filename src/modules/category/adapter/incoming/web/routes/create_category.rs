use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::category::application::use_cases::create_category::CreateCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequestDto {
    pub name: String,
}

#[post("/api/categories")]
pub async fn create_category_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateCategoryRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .category
        .create
        .execute(payload.into_inner().name)
        .await
    {
        Ok(category) => {
            info!(category_id = %category.id, created_by = %user.user_id, "Category created");
            ApiResponse::created(category)
        }

        Err(CreateCategoryError::EmptyName) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Category name cannot be empty")
        }

        Err(CreateCategoryError::NameTooLong) => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            "Category name must not exceed 32 characters",
        ),

        Err(CreateCategoryError::NameTaken) => {
            ApiResponse::conflict("CATEGORY_EXISTS", "Category name already exists")
        }

        Err(CreateCategoryError::RepositoryError(ref e)) => {
            error!(error = %e, "Category creation failed");
            ApiResponse::internal_error()
        }
    }
}
