use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::UserQuery;

use super::sea_orm_entity::users::{Column, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, String> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(user.map(|m| m.to_domain()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, String> {
        let user = UserEntity::find()
            .filter(Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(user.map(|m| m.to_domain()))
    }

    async fn list_all(&self) -> Result<Vec<User>, String> {
        let users = UserEntity::find()
            .order_by_desc(Column::RegisteredAt)
            .all(&*self.db)
            .await
            .map_err(|e| e.to_string())?;

        Ok(users.into_iter().map(|m| m.to_domain()).collect())
    }
}
