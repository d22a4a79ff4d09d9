use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateProfileData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_user_result(model: UserModel) -> UserResult {
        UserResult {
            id: model.id,
            username: model.username,
            email: model.email,
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            age: Set(user.age),
            phone: Set(user.phone),
            image_path: Set(None),
            status: Set(user.status.as_str().to_string()),
            registered_at: NotSet,
        };

        let inserted = active_user.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return UserRepositoryError::UserAlreadyExists;
            }
            UserRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(Self::map_to_user_result(inserted))
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        changes: UpdateProfileData,
    ) -> Result<UserResult, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();

        if let Some(first_name) = changes.first_name {
            active_user.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active_user.last_name = Set(last_name);
        }
        if let Some(age) = changes.age {
            active_user.age = Set(age);
        }
        if let Some(phone) = changes.phone {
            active_user.phone = Set(phone);
        }
        if let Some(image_path) = changes.image_path {
            active_user.image_path = Set(Some(image_path));
        }
        if let Some(status) = changes.status {
            active_user.status = Set(status.as_str().to_string());
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(Self::map_to_user_result(updated))
    }

    /// Hard delete. Postgres cascades take the user's products (with their
    /// photos, ratings, reviews, cart items), the user's ratings and
    /// reviews, and the user's cart with its items.
    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let active_user: UserActiveModel = user.into();
        active_user
            .delete(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
