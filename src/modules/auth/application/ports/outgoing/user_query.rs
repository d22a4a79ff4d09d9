use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use uuid::Uuid;

/// Read-side lookups against the user store. Errors are opaque strings;
/// callers only distinguish "not found" (Ok(None)) from "query failed".
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, String>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, String>;
    async fn list_all(&self) -> Result<Vec<User>, String>;
}
