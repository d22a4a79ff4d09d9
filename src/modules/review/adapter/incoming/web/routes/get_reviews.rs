use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::product::application::ports::outgoing::UserRefView;
use crate::review::application::ports::outgoing::ReviewItemView;
use crate::review::application::use_cases::get_reviews::GetReviewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct GetReviewsQuery {
    pub product_id: Option<Uuid>,
}

#[derive(Serialize)]
struct ReviewDto {
    id: String,
    user: UserRefView,
    product_id: String,
    date: String,
    text: String,
}

impl From<ReviewItemView> for ReviewDto {
    fn from(view: ReviewItemView) -> Self {
        ReviewDto {
            id: view.id.to_string(),
            user: view.user,
            product_id: view.product_id.to_string(),
            date: view.date.format("%d-%m-%Y").to_string(),
            text: view.text,
        }
    }
}

#[get("/api/reviews")]
pub async fn get_reviews_handler(
    query: web::Query<GetReviewsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.review.get_list.execute(query.product_id).await {
        Ok(reviews) => {
            ApiResponse::success(reviews.into_iter().map(ReviewDto::from).collect::<Vec<_>>())
        }

        Err(GetReviewsError::QueryFailed(ref msg)) => {
            error!("Failed to list reviews: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
