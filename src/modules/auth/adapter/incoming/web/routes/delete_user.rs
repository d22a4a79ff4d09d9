use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

/// Hard-deletes the account. Everything the user owns (products with
/// their photos/ratings/reviews, own ratings and reviews, the cart)
/// goes with it via storage cascades.
#[delete("/api/users/{id}")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = path.into_inner();

    match data
        .delete_user_use_case
        .execute(user.user_id, target)
        .await
    {
        Ok(()) => {
            info!(user_id = %target, "User account deleted");
            ApiResponse::no_content()
        }

        Err(DeleteUserError::NotOwner) => {
            warn!(
                requester = %user.user_id,
                target = %target,
                "Account deletion rejected: not the owner"
            );
            ApiResponse::forbidden("NOT_OWNER", "You can only delete your own account")
        }

        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteUserError::RepositoryError(ref e)) => {
            error!(error = %e, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
