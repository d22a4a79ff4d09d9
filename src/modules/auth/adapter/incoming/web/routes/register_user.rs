use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::LoyaltyStatus;
use crate::auth::application::use_cases::register_user::{RegisterError, RegisterRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequestDto {
    /// Username (unique identifier)
    #[schema(example = "johndoe")]
    pub username: String,

    /// Email address
    #[schema(example = "john@example.com")]
    pub email: String,

    /// Password (minimum 8 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// First name
    #[schema(example = "John")]
    pub first_name: String,

    /// Last name
    #[schema(example = "Doe")]
    pub last_name: String,

    /// Age in years
    #[schema(example = 30)]
    pub age: i16,

    /// Phone number
    #[schema(example = "+15551234567")]
    pub phone: String,

    /// Loyalty status; defaults to "simple"
    #[schema(example = "simple")]
    pub status: Option<LoyaltyStatus>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponseDto {
    /// JWT access token (short-lived)
    access_token: String,

    /// JWT refresh token (long-lived)
    refresh_token: String,

    /// Created user identity
    user: RegisteredUserDto,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUserDto {
    /// User ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    /// Username
    #[schema(example = "johndoe")]
    username: String,

    /// Email address
    #[schema(example = "john@example.com")]
    email: String,
}

/// Register a new user
///
/// Creates an account with a hashed password and returns a fresh
/// access/refresh token pair, so registration doubles as a login.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequestDto,
    responses(
        (
            status = 201,
            description = "User created successfully",
            body = inline(SuccessResponse<RegisterUserResponseDto>),
        ),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Username must be between 3 and 30 characters"
                }
            })
        ),
        (
            status = 409,
            description = "Username or email already taken",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "USER_ALREADY_EXISTS",
                    "message": "User already exists"
                }
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse,
        ),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let use_case = &data.register_user_use_case;
    let dto = req.into_inner();

    info!(username = %dto.username, "Registration attempt");

    let request = match RegisterRequest::new(
        dto.username,
        dto.email,
        dto.password,
        dto.first_name,
        dto.last_name,
        dto.age,
        dto.phone,
        dto.status,
    ) {
        Ok(req) => req,
        Err(e) => {
            warn!(error = %e, "Invalid registration input");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match use_case.execute(request).await {
        Ok(response) => {
            info!(
                user_id = %response.user.id,
                username = %response.user.username,
                "User registered successfully"
            );

            ApiResponse::created(RegisterUserResponseDto {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
                user: RegisteredUserDto {
                    id: response.user.id.to_string(),
                    username: response.user.username,
                    email: response.user.email,
                },
            })
        }

        Err(RegisterError::UserAlreadyExists) => {
            warn!("Registration failed: user already exists");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }

        Err(RegisterError::HashingFailed(ref e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }

        Err(RegisterError::TokenGenerationFailed(ref e)) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }

        Err(RegisterError::RepositoryError(ref e)) => {
            error!(error = %e, "User creation failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::register_user::{
        IRegisterUserUseCase, RegisterUserResponse, RegisteredIdentity,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct MockRegisterSuccess;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterSuccess {
        async fn execute(
            &self,
            request: RegisterRequest,
        ) -> Result<RegisterUserResponse, RegisterError> {
            Ok(RegisterUserResponse {
                access_token: "header.access.sig".to_string(),
                refresh_token: "header.refresh.sig".to_string(),
                user: RegisteredIdentity {
                    id: Uuid::new_v4(),
                    username: request.username().to_string(),
                    email: request.email().to_string(),
                },
            })
        }
    }

    struct MockRegisterDuplicate;

    #[async_trait]
    impl IRegisterUserUseCase for MockRegisterDuplicate {
        async fn execute(
            &self,
            _request: RegisterRequest,
        ) -> Result<RegisterUserResponse, RegisterError> {
            Err(RegisterError::UserAlreadyExists)
        }
    }

    fn request_body() -> serde_json::Value {
        serde_json::json!({
            "username": "johndoe",
            "email": "john@example.com",
            "password": "SecurePass123!",
            "first_name": "John",
            "last_name": "Doe",
            "age": 30,
            "phone": "+15551234567"
        })
    }

    #[actix_web::test]
    async fn register_success_returns_tokens() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_user_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert!(body["data"]["access_token"].is_string());
        assert!(body["data"]["refresh_token"].is_string());
        assert_eq!(body["data"]["user"]["username"], "johndoe");
        assert_eq!(body["data"]["user"]["email"], "john@example.com");
    }

    #[actix_web::test]
    async fn register_duplicate_returns_conflict() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterDuplicate)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_user_handler))
                .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(request_body())
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "USER_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn register_invalid_payload_is_rejected() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_user_handler))
                .await;

        let mut body = request_body();
        body["password"] = serde_json::json!("short");

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn register_accepts_explicit_status() {
        let app_state = TestAppStateBuilder::default()
            .with_register_user(MockRegisterSuccess)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(register_user_handler))
                .await;

        let mut body = request_body();
        body["status"] = serde_json::json!("gold");

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(body)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }
}
