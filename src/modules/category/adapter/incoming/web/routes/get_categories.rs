use actix_web::{get, web, Responder};
use tracing::error;

use crate::category::application::use_cases::get_categories::GetCategoriesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public browse view: every category with its product cards nested in.
#[get("/api/categories")]
pub async fn get_categories_handler(data: web::Data<AppState>) -> impl Responder {
    match data.category.get_list.execute().await {
        Ok(categories) => ApiResponse::success(categories),

        Err(GetCategoriesError::QueryFailed(ref msg)) => {
            error!("Failed to list categories: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
