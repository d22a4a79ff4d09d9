use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::LoyaltyStatus;
use crate::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

#[derive(Serialize)]
struct UserProfileDto {
    id: String,
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    age: i16,
    phone: String,
    image_path: Option<String>,
    status: LoyaltyStatus,
    registered_at: String,
}

/// Full profile view; requires a valid access token.
#[get("/api/users/{id}")]
pub async fn fetch_user_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let target = path.into_inner();

    match data.fetch_profile_use_case.execute(target).await {
        Ok(profile) => ApiResponse::success(UserProfileDto {
            id: profile.id.to_string(),
            username: profile.username,
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            age: profile.age,
            phone: profile.phone,
            image_path: profile.image_path,
            status: profile.status,
            registered_at: profile.registered_at.format("%d-%m-%Y %H:%M").to_string(),
        }),

        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchProfileError::QueryFailed(ref e)) => {
            error!(error = %e, "Failed to fetch user profile");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::fetch_profile::{IFetchProfileUseCase, UserProfile};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockFetchProfile;

    #[async_trait]
    impl IFetchProfileUseCase for MockFetchProfile {
        async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
            Ok(UserProfile {
                id: user_id,
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                age: 36,
                phone: "+15550101".to_string(),
                image_path: None,
                status: LoyaltyStatus::Gold,
                registered_at: chrono::Utc::now(),
            })
        }
    }

    struct MockFetchProfileNotFound;

    #[async_trait]
    impl IFetchProfileUseCase for MockFetchProfileNotFound {
        async fn execute(&self, _user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
            Err(FetchProfileError::UserNotFound)
        }
    }

    #[actix_web::test]
    async fn fetch_profile_with_token_succeeds() {
        let (jwt, provider_data) = test_token_provider();
        let viewer = Uuid::new_v4();

        let app_state = TestAppStateBuilder::default()
            .with_fetch_profile(MockFetchProfile)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider_data)
                .service(fetch_user_handler),
        )
        .await;

        let target = Uuid::new_v4();
        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{target}"))
            .insert_header(bearer_header(&jwt, viewer))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["username"], "ada");
        assert_eq!(body["data"]["status"], "gold");
        // Registration timestamp is formatted, not raw RFC 3339.
        let registered = body["data"]["registered_at"].as_str().unwrap();
        assert_eq!(registered.len(), 16);
        assert_eq!(&registered[2..3], "-");
    }

    #[actix_web::test]
    async fn fetch_profile_without_token_is_unauthorized() {
        let (_, provider_data) = test_token_provider();

        let app_state = TestAppStateBuilder::default()
            .with_fetch_profile(MockFetchProfile)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider_data)
                .service(fetch_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn unknown_user_is_not_found() {
        let (jwt, provider_data) = test_token_provider();

        let app_state = TestAppStateBuilder::default()
            .with_fetch_profile(MockFetchProfileNotFound)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(provider_data)
                .service(fetch_user_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/users/{}", Uuid::new_v4()))
            .insert_header(bearer_header(&jwt, Uuid::new_v4()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }
}
