use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::product::application::use_cases::create_product::{
    CreateProductCommand, CreateProductError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequestDto {
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
struct CreatedProductDto {
    id: String,
    name: String,
    price: i64,
}

#[post("/api/products")]
pub async fn create_product_handler(
    user: AuthenticatedUser,
    payload: web::Json<CreateProductRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = payload.into_inner();

    let command = CreateProductCommand {
        category_id: dto.category_id,
        name: dto.name,
        description: dto.description,
        price: dto.price,
        is_original: dto.is_original,
        video_path: dto.video_path,
    };

    match data.product.create.execute(user.user_id, command).await {
        Ok(product) => {
            info!(product_id = %product.id, owner = %user.user_id, "Product created");
            ApiResponse::created(CreatedProductDto {
                id: product.id.to_string(),
                name: product.name,
                price: product.price,
            })
        }

        Err(CreateProductError::Invalid(ref e)) => {
            warn!(error = %e, "Invalid product payload");
            ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string())
        }

        Err(CreateProductError::CategoryNotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }

        Err(CreateProductError::RepositoryError(ref e)) => {
            error!(error = %e, "Product creation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::application::ports::outgoing::ProductResult;
    use crate::product::application::use_cases::create_product::ICreateProductUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockCreateProduct;

    #[async_trait]
    impl ICreateProductUseCase for MockCreateProduct {
        async fn execute(
            &self,
            owner: Uuid,
            command: CreateProductCommand,
        ) -> Result<ProductResult, CreateProductError> {
            command.validate().map_err(CreateProductError::Invalid)?;
            Ok(ProductResult {
                id: Uuid::new_v4(),
                name: command.name,
                price: command.price,
                owner_id: owner,
            })
        }
    }

    fn body() -> serde_json::Value {
        serde_json::json!({
            "category_id": Uuid::new_v4(),
            "name": "Guitar",
            "description": "Six strings",
            "price": 500
        })
    }

    #[actix_web::test]
    async fn authenticated_user_creates_product() {
        let (jwt, provider_data) = test_token_provider();

        let app_state = TestAppStateBuilder::default()
            .with_create_product(MockCreateProduct)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider_data)
                .service(create_product_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/products")
            .insert_header(bearer_header(&jwt, Uuid::new_v4()))
            .set_json(body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let resp_body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(resp_body["data"]["name"], "Guitar");
        assert_eq!(resp_body["data"]["price"], 500);
    }

    #[actix_web::test]
    async fn anonymous_create_is_unauthorized() {
        let (_, provider_data) = test_token_provider();

        let app_state = TestAppStateBuilder::default()
            .with_create_product(MockCreateProduct)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider_data)
                .service(create_product_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/products")
            .set_json(body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn negative_price_is_validation_error() {
        let (jwt, provider_data) = test_token_provider();

        let app_state = TestAppStateBuilder::default()
            .with_create_product(MockCreateProduct)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider_data)
                .service(create_product_handler),
        )
        .await;

        let mut payload = body();
        payload["price"] = serde_json::json!(-10);

        let req = test::TestRequest::post()
            .uri("/api/products")
            .insert_header(bearer_header(&jwt, Uuid::new_v4()))
            .set_json(payload)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let resp_body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(resp_body["error"]["code"], "VALIDATION_ERROR");
    }
}
