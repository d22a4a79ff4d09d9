use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::product::application::ports::outgoing::UserRefView;

#[derive(Debug, Clone, Serialize)]
pub struct ReviewItemView {
    pub id: Uuid,
    pub user: UserRefView,
    pub product_id: Uuid,
    pub text: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug)]
pub enum ReviewQueryError {
    DatabaseError(String),
}

impl std::fmt::Display for ReviewQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewQueryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ReviewQueryError {}

#[async_trait]
pub trait ReviewQuery: Send + Sync {
    async fn list(
        &self,
        product_id: Option<Uuid>,
    ) -> Result<Vec<ReviewItemView>, ReviewQueryError>;
}
