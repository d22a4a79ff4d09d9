use crate::auth::application::use_cases::list_users::ListUsersError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Public listing; only names are exposed.
#[get("/api/users")]
pub async fn list_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_users_use_case.execute().await {
        Ok(users) => ApiResponse::success(users),

        Err(ListUsersError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
