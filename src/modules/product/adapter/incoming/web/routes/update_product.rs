use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::product::application::use_cases::create_product::CreateProductCommand;
use crate::product::application::use_cases::update_product::UpdateProductError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequestDto {
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    #[serde(default = "default_is_original")]
    pub is_original: bool,
    pub video_path: Option<String>,
}

fn default_is_original() -> bool {
    true
}

#[derive(Serialize)]
struct UpdatedProductDto {
    id: String,
    name: String,
    price: i64,
}

#[put("/api/products/{id}")]
pub async fn update_product_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateProductRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let product_id = path.into_inner();
    let dto = payload.into_inner();

    let command = CreateProductCommand {
        category_id: dto.category_id,
        name: dto.name,
        description: dto.description,
        price: dto.price,
        is_original: dto.is_original,
        video_path: dto.video_path,
    };

    match data
        .product
        .update
        .execute(user.user_id, product_id, command)
        .await
    {
        Ok(product) => {
            info!(product_id = %product.id, "Product updated");
            ApiResponse::success(UpdatedProductDto {
                id: product.id.to_string(),
                name: product.name,
                price: product.price,
            })
        }

        Err(UpdateProductError::NotOwner) => {
            warn!(
                requester = %user.user_id,
                product_id = %product_id,
                "Product update rejected: not the owner"
            );
            ApiResponse::forbidden("NOT_OWNER", "You can only edit your own products")
        }

        Err(UpdateProductError::ProductNotFound) => {
            ApiResponse::not_found("PRODUCT_NOT_FOUND", "Product not found")
        }

        Err(UpdateProductError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }

        Err(UpdateProductError::Invalid(ref e)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(UpdateProductError::RepositoryError(ref e)) => {
            error!(error = %e, "Product update failed");
            ApiResponse::internal_error()
        }
    }
}
