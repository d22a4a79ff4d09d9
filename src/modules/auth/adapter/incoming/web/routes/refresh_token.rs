use crate::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, warn};

#[derive(Serialize)]
struct RefreshTokenResponseBody {
    access_token: String,
}

#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.refresh_token_use_case;

    match use_case.execute(req.into_inner()).await {
        Ok(response) => ApiResponse::success(RefreshTokenResponseBody {
            access_token: response.access_token,
        }),

        Err(RefreshTokenError::TokenRevoked) => {
            warn!("Refresh rejected: token has been revoked");
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }

        Err(RefreshTokenError::InvalidToken) => {
            warn!("Refresh rejected: invalid refresh token");
            ApiResponse::unauthorized("INVALID_TOKEN", "Refresh token is invalid or expired")
        }

        Err(RefreshTokenError::BlacklistCheckFailed(ref e)) => {
            error!(error = %e, "Blacklist lookup failed during refresh");
            ApiResponse::internal_error()
        }

        Err(RefreshTokenError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }
    }
}
