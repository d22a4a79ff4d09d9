use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::LoyaltyStatus;
use crate::auth::application::ports::outgoing::user_repository::{
    UpdateProfileData, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i16>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
    pub status: Option<LoyaltyStatus>,
}

impl UpdateProfileCommand {
    pub fn validate(&self) -> Result<(), UpdateProfileError> {
        if let Some(first_name) = &self.first_name {
            if first_name.trim().is_empty() {
                return Err(UpdateProfileError::InvalidField(
                    "First name cannot be empty".to_string(),
                ));
            }
        }
        if let Some(last_name) = &self.last_name {
            if last_name.trim().is_empty() {
                return Err(UpdateProfileError::InvalidField(
                    "Last name cannot be empty".to_string(),
                ));
            }
        }
        if let Some(age) = self.age {
            if !(0..=150).contains(&age) {
                return Err(UpdateProfileError::InvalidField(
                    "Age must be between 0 and 150".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    NotOwner,
    UserNotFound,
    InvalidField(String),
    RepositoryError(String),
}

impl std::fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateProfileError::NotOwner => write!(f, "Profiles can only be edited by their owner"),
            UpdateProfileError::UserNotFound => write!(f, "User not found"),
            UpdateProfileError::InvalidField(msg) => write!(f, "{}", msg),
            UpdateProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateProfileError {}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    /// `requester` comes from the access token, `target` from the URL.
    async fn execute(
        &self,
        requester: Uuid,
        target: Uuid,
        command: UpdateProfileCommand,
    ) -> Result<(), UpdateProfileError>;
}

pub struct UpdateProfileUseCase {
    repository: Arc<dyn UserRepository>,
}

impl UpdateProfileUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IUpdateProfileUseCase for UpdateProfileUseCase {
    async fn execute(
        &self,
        requester: Uuid,
        target: Uuid,
        command: UpdateProfileCommand,
    ) -> Result<(), UpdateProfileError> {
        if requester != target {
            return Err(UpdateProfileError::NotOwner);
        }

        command.validate()?;

        self.repository
            .update_profile(
                target,
                UpdateProfileData {
                    first_name: command.first_name,
                    last_name: command.last_name,
                    age: command.age,
                    phone: command.phone,
                    image_path: command.image_path,
                    status: command.status,
                },
            )
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::user_repository::{CreateUserData, UserResult};

    struct MockRepository {
        missing: bool,
    }

    #[async_trait]
    impl UserRepository for MockRepository {
        async fn create_user(
            &self,
            _user: CreateUserData,
        ) -> Result<UserResult, UserRepositoryError> {
            unimplemented!("not used here")
        }

        async fn update_profile(
            &self,
            user_id: Uuid,
            _changes: UpdateProfileData,
        ) -> Result<UserResult, UserRepositoryError> {
            if self.missing {
                return Err(UserRepositoryError::UserNotFound);
            }
            Ok(UserResult {
                id: user_id,
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
            })
        }

        async fn delete_user(&self, _user_id: Uuid) -> Result<(), UserRepositoryError> {
            unimplemented!("not used here")
        }
    }

    #[tokio::test]
    async fn owner_can_update_their_profile() {
        let user_id = Uuid::new_v4();
        let use_case = UpdateProfileUseCase::new(Arc::new(MockRepository { missing: false }));

        let result = use_case
            .execute(
                user_id,
                user_id,
                UpdateProfileCommand {
                    phone: Some("+15550999".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn non_owner_is_rejected() {
        let use_case = UpdateProfileUseCase::new(Arc::new(MockRepository { missing: false }));

        let result = use_case
            .execute(
                Uuid::new_v4(),
                Uuid::new_v4(),
                UpdateProfileCommand::default(),
            )
            .await;
        assert!(matches!(result, Err(UpdateProfileError::NotOwner)));
    }

    #[tokio::test]
    async fn invalid_age_is_rejected() {
        let user_id = Uuid::new_v4();
        let use_case = UpdateProfileUseCase::new(Arc::new(MockRepository { missing: false }));

        let result = use_case
            .execute(
                user_id,
                user_id,
                UpdateProfileCommand {
                    age: Some(-3),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(UpdateProfileError::InvalidField(_))));
    }

    #[tokio::test]
    async fn vanished_user_is_not_found() {
        let user_id = Uuid::new_v4();
        let use_case = UpdateProfileUseCase::new(Arc::new(MockRepository { missing: true }));

        let result = use_case
            .execute(user_id, user_id, UpdateProfileCommand::default())
            .await;
        assert!(matches!(result, Err(UpdateProfileError::UserNotFound)));
    }
}
