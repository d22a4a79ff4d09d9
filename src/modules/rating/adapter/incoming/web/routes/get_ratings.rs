use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::rating::application::use_cases::get_ratings::GetRatingsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GetRatingsQuery {
    pub product_id: Option<Uuid>,
}

#[get("/api/ratings")]
pub async fn get_ratings_handler(
    query: web::Query<GetRatingsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.rating.get_list.execute(query.product_id).await {
        Ok(ratings) => ApiResponse::success(ratings),

        Err(GetRatingsError::QueryFailed(ref msg)) => {
            error!("Failed to list ratings: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
