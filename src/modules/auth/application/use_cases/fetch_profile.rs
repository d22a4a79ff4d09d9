use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::LoyaltyStatus;
use crate::auth::application::ports::outgoing::UserQuery;

#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: i16,
    pub phone: String,
    pub image_path: Option<String>,
    pub status: LoyaltyStatus,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    UserNotFound,
    QueryFailed(String),
}

impl std::fmt::Display for FetchProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchProfileError::UserNotFound => write!(f, "User not found"),
            FetchProfileError::QueryFailed(msg) => write!(f, "Failed to fetch profile: {}", msg),
        }
    }
}

impl std::error::Error for FetchProfileError {}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError>;
}

pub struct FetchProfileUseCase {
    query: Arc<dyn UserQuery>,
}

impl FetchProfileUseCase {
    pub fn new(query: Arc<dyn UserQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IFetchProfileUseCase for FetchProfileUseCase {
    async fn execute(&self, user_id: Uuid) -> Result<UserProfile, FetchProfileError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(FetchProfileError::QueryFailed)?
            .ok_or(FetchProfileError::UserNotFound)?;

        Ok(UserProfile {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            age: user.age,
            phone: user.phone,
            image_path: user.image_path,
            status: user.status,
            registered_at: user.registered_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::User;

    struct MockUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, String> {
            Ok(self.user.as_ref().filter(|u| u.id == user_id).cloned())
        }

        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, String> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<User>, String> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn fetches_full_profile() {
        let user_id = Uuid::new_v4();
        let use_case = FetchProfileUseCase::new(Arc::new(MockUserQuery {
            user: Some(User {
                id: user_id,
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                password_hash: "hash".to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                age: 36,
                phone: "+15550101".to_string(),
                image_path: Some("user_images/ada.png".to_string()),
                status: LoyaltyStatus::Gold,
                registered_at: chrono::Utc::now(),
            }),
        }));

        let profile = use_case.execute(user_id).await.unwrap();
        assert_eq!(profile.username, "ada");
        assert_eq!(profile.status, LoyaltyStatus::Gold);
        assert_eq!(profile.image_path.as_deref(), Some("user_images/ada.png"));
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let use_case = FetchProfileUseCase::new(Arc::new(MockUserQuery { user: None }));

        let result = use_case.execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(FetchProfileError::UserNotFound)));
    }
}
