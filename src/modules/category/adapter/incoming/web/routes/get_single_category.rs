use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::category::application::use_cases::get_single_category::GetSingleCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/categories/{id}")]
pub async fn get_single_category_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data.category.get_single.execute(category_id).await {
        Ok(category) => ApiResponse::success(category),

        Err(GetSingleCategoryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }

        Err(GetSingleCategoryError::QueryFailed(ref msg)) => {
            error!("Failed to fetch category {}: {}", category_id, msg);
            ApiResponse::internal_error()
        }
    }
}
