use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::LoyaltyStatus;
use crate::auth::application::use_cases::update_profile::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequestDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i16>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
    pub status: Option<LoyaltyStatus>,
}

#[derive(Serialize)]
struct UpdateProfileResponseBody {
    message: String,
}

/// Profile updates only touch profile fields; credentials have their own
/// flows. A user can only edit their own record.
#[put("/api/users/{id}")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateProfileRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = path.into_inner();
    let dto = payload.into_inner();

    let command = UpdateProfileCommand {
        first_name: dto.first_name,
        last_name: dto.last_name,
        age: dto.age,
        phone: dto.phone,
        image_path: dto.image_path,
        status: dto.status,
    };

    match data
        .update_profile_use_case
        .execute(user.user_id, target, command)
        .await
    {
        Ok(()) => {
            info!(user_id = %target, "Profile updated");
            ApiResponse::success(UpdateProfileResponseBody {
                message: "Profile updated".to_string(),
            })
        }

        Err(UpdateProfileError::NotOwner) => {
            warn!(
                requester = %user.user_id,
                target = %target,
                "Profile update rejected: not the owner"
            );
            ApiResponse::forbidden("NOT_OWNER", "You can only edit your own profile")
        }

        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::InvalidField(ref msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", msg)
        }

        Err(UpdateProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
