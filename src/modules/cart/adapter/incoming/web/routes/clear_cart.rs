use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::cart::application::use_cases::clear_cart::ClearCartError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/cart")]
pub async fn clear_cart_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cart.clear.execute(user.user_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Cart cleared");
            ApiResponse::no_content()
        }

        Err(ClearCartError::RepositoryError(ref e)) => {
            error!(error = %e, "Failed to clear cart");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::application::use_cases::clear_cart::IClearCartUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockClearCart;

    #[async_trait]
    impl IClearCartUseCase for MockClearCart {
        async fn execute(&self, _user_id: Uuid) -> Result<(), ClearCartError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn clears_cart_for_token_holder() {
        let (jwt, provider_data) = test_token_provider();

        let app_state = TestAppStateBuilder::default()
            .with_clear_cart(MockClearCart)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider_data)
                .service(clear_cart_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/cart")
            .insert_header(bearer_header(&jwt, Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
    }
}
