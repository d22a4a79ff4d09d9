use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{
    CategoryRepository, CategoryRepositoryError, CategoryResult,
};

use super::sea_orm_entity::{ActiveModel as CategoryActiveModel, Entity as CategoryEntity};

#[derive(Debug, Clone)]
pub struct CategoryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryPostgres {
    async fn create_category(
        &self,
        name: String,
    ) -> Result<CategoryResult, CategoryRepositoryError> {
        let active = CategoryActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23505")
                || err_str.contains("duplicate key")
                || err_str.contains("unique constraint")
            {
                return CategoryRepositoryError::NameTaken;
            }
            CategoryRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(CategoryResult {
            id: inserted.id,
            name: inserted.name,
        })
    }

    /// Removing a category takes its whole product subtree with it.
    async fn delete_category(&self, category_id: Uuid) -> Result<(), CategoryRepositoryError> {
        let category = CategoryEntity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(CategoryRepositoryError::CategoryNotFound)?;

        category
            .delete(&*self.db)
            .await
            .map_err(|e| CategoryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
