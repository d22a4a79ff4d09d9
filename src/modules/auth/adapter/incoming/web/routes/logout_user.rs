use crate::auth::application::use_cases::logout_user::{LogoutError, LogoutRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct LogoutResponseBody {
    message: String,
}

/// Revokes the submitted refresh token. Whatever goes wrong, the caller
/// only ever sees one generic bad-request shape.
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    req: web::Json<LogoutRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.logout_user_use_case;
    let request = req.into_inner();

    info!("User logout attempt");

    match use_case.execute(request).await {
        Ok(()) => {
            info!("User logged out successfully");
            ApiResponse::success(LogoutResponseBody {
                message: "Logged out successfully".to_string(),
            })
        }

        Err(LogoutError::InvalidToken) => {
            warn!("Logout failed: invalid refresh token");
            ApiResponse::bad_request("BAD_REQUEST", "Could not log out")
        }

        Err(LogoutError::RevocationFailed(ref e)) => {
            warn!(error = %e, "Logout failed: token revocation error");
            ApiResponse::bad_request("BAD_REQUEST", "Could not log out")
        }
    }
}
