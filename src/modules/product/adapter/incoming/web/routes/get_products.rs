use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::product::application::ports::outgoing::{ProductListFilter, ProductSort};
use crate::product::application::use_cases::get_products::GetProductsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GetProductsQuery {
    /// Substring match on the product name.
    pub search: Option<String>,

    pub category_id: Option<Uuid>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub is_original: Option<bool>,

    #[serde(default)]
    pub sort: ProductSort,
}

impl From<GetProductsQuery> for (ProductListFilter, ProductSort) {
    fn from(q: GetProductsQuery) -> Self {
        (
            ProductListFilter {
                search: q.search,
                category_id: q.category_id,
                price_min: q.price_min,
                price_max: q.price_max,
                is_original: q.is_original,
            },
            q.sort,
        )
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Open listing; no token required. Anonymous shoppers browse here.
#[get("/api/products")]
pub async fn get_products_handler(
    query: web::Query<GetProductsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, sort) = query.into_inner().into();

    match data.product.get_list.execute(filter, sort).await {
        Ok(cards) => ApiResponse::success(cards),

        Err(GetProductsError::QueryFailed(ref msg)) => {
            error!("Failed to list products: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
