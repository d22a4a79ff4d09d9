use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteUserError {
    NotOwner,
    UserNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for DeleteUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteUserError::NotOwner => write!(f, "Accounts can only be deleted by their owner"),
            DeleteUserError::UserNotFound => write!(f, "User not found"),
            DeleteUserError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeleteUserError {}

#[async_trait]
pub trait IDeleteUserUseCase: Send + Sync {
    async fn execute(&self, requester: Uuid, target: Uuid) -> Result<(), DeleteUserError>;
}

/// Hard account deletion; storage cascades take everything the user owns.
pub struct DeleteUserUseCase {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl IDeleteUserUseCase for DeleteUserUseCase {
    async fn execute(&self, requester: Uuid, target: Uuid) -> Result<(), DeleteUserError> {
        if requester != target {
            return Err(DeleteUserError::NotOwner);
        }

        self.repository.delete_user(target).await.map_err(|e| match e {
            UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
            other => DeleteUserError::RepositoryError(other.to_string()),
        })
    }
}
