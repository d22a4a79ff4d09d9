use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::product::application::ports::outgoing::{
    CategoryRefView, ProductDetailView, RatingView, UserRefView,
};
use crate::product::application::use_cases::get_single_product::GetSingleProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct ReviewDto {
    user: UserRefView,
    date: String,
    text: String,
}

#[derive(Serialize)]
struct ProductDetailDto {
    id: String,
    category: CategoryRefView,
    name: String,
    description: String,
    price: i64,
    is_original: bool,
    video_path: Option<String>,
    photos: Vec<String>,
    created_at: String,
    owner: UserRefView,
    ratings: Vec<RatingView>,
    reviews: Vec<ReviewDto>,
    average_rating: f64,
    rating_count: u64,
}

impl From<ProductDetailView> for ProductDetailDto {
    fn from(view: ProductDetailView) -> Self {
        ProductDetailDto {
            id: view.id.to_string(),
            category: view.category,
            name: view.name,
            description: view.description,
            price: view.price,
            is_original: view.is_original,
            video_path: view.video_path,
            photos: view.photos,
            created_at: view.created_at.format("%d-%m-%Y %H:%M").to_string(),
            owner: view.owner,
            ratings: view.ratings,
            reviews: view
                .reviews
                .into_iter()
                .map(|r| ReviewDto {
                    user: r.user,
                    date: r.date.format("%d-%m-%Y").to_string(),
                    text: r.text,
                })
                .collect(),
            average_rating: view.average_rating,
            rating_count: view.rating_count,
        }
    }
}

/// The detail view is for logged-in shoppers only; the open list endpoint
/// already carries the browsing surface.
#[get("/api/products/{id}")]
pub async fn get_single_product_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();

    match data.product.get_single.execute(product_id).await {
        Ok(detail) => ApiResponse::success(ProductDetailDto::from(detail)),

        Err(GetSingleProductError::NotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }

        Err(GetSingleProductError::QueryFailed(ref msg)) => {
            error!("Failed to fetch product {}: {}", product_id, msg);
            ApiResponse::internal_error()
        }
    }
}
