use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::UserQuery;

/// Minimal list view: names only, like the public profile listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub enum ListUsersError {
    QueryFailed(String),
}

impl std::fmt::Display for ListUsersError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListUsersError::QueryFailed(msg) => write!(f, "Failed to list users: {}", msg),
        }
    }
}

impl std::error::Error for ListUsersError {}

#[async_trait]
pub trait IListUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserSummary>, ListUsersError>;
}

pub struct ListUsersUseCase {
    query: Arc<dyn UserQuery>,
}

impl ListUsersUseCase {
    pub fn new(query: Arc<dyn UserQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl IListUsersUseCase for ListUsersUseCase {
    async fn execute(&self) -> Result<Vec<UserSummary>, ListUsersError> {
        let users = self
            .query
            .list_all()
            .await
            .map_err(ListUsersError::QueryFailed)?;

        Ok(users
            .into_iter()
            .map(|u| UserSummary {
                id: u.id,
                first_name: u.first_name,
                last_name: u.last_name,
            })
            .collect())
    }
}
