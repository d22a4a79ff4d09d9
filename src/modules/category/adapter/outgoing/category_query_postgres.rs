use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::category::application::ports::outgoing::{
    CategoryQuery, CategoryQueryError, CategoryResult,
};

use super::sea_orm_entity::{Column, Entity as CategoryEntity};

#[derive(Debug, Clone)]
pub struct CategoryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CategoryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQuery for CategoryQueryPostgres {
    async fn list_all(&self) -> Result<Vec<CategoryResult>, CategoryQueryError> {
        let categories = CategoryEntity::find()
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(categories
            .into_iter()
            .map(|c| CategoryResult {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    async fn find_by_id(
        &self,
        category_id: Uuid,
    ) -> Result<Option<CategoryResult>, CategoryQueryError> {
        let category = CategoryEntity::find_by_id(category_id)
            .one(&*self.db)
            .await
            .map_err(|e| CategoryQueryError::DatabaseError(e.to_string()))?;

        Ok(category.map(|c| CategoryResult {
            id: c.id,
            name: c.name,
        }))
    }
}
