use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::category::application::use_cases::delete_category::DeleteCategoryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Deleting a category wipes its product subtree.
#[delete("/api/categories/{id}")]
pub async fn delete_category_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let category_id = path.into_inner();

    match data.category.delete.execute(category_id).await {
        Ok(()) => {
            info!(category_id = %category_id, deleted_by = %user.user_id, "Category deleted");
            ApiResponse::no_content()
        }

        Err(DeleteCategoryError::NotFound) => {
            ApiResponse::not_found("CATEGORY_NOT_FOUND", "Category not found")
        }

        Err(DeleteCategoryError::RepositoryError(ref e)) => {
            error!(error = %e, "Category deletion failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::application::use_cases::delete_category::IDeleteCategoryUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockDeleteCategory {
        found: bool,
    }

    #[async_trait]
    impl IDeleteCategoryUseCase for MockDeleteCategory {
        async fn execute(&self, _category_id: Uuid) -> Result<(), DeleteCategoryError> {
            if !self.found {
                return Err(DeleteCategoryError::NotFound);
            }
            Ok(())
        }
    }

    #[actix_web::test]
    async fn deletes_category_with_auth() {
        let (jwt, provider_data) = test_token_provider();

        let app_state = TestAppStateBuilder::default()
            .with_delete_category(MockDeleteCategory { found: true })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider_data)
                .service(delete_category_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/categories/{}", Uuid::new_v4()))
            .insert_header(bearer_header(&jwt, Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
    }

    #[actix_web::test]
    async fn anonymous_delete_is_unauthorized() {
        let (_, provider_data) = test_token_provider();

        let app_state = TestAppStateBuilder::default()
            .with_delete_category(MockDeleteCategory { found: true })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider_data)
                .service(delete_category_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/categories/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
