use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::rating::application::ports::outgoing::{
    CreateRatingData, RatingRepository, RatingRepositoryError, RatingResult,
};

use super::sea_orm_entity::ActiveModel as RatingActiveModel;

#[derive(Debug, Clone)]
pub struct RatingRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RatingRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingRepository for RatingRepositoryPostgres {
    async fn create_rating(
        &self,
        data: CreateRatingData,
    ) -> Result<RatingResult, RatingRepositoryError> {
        let active = RatingActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            product_id: Set(data.product_id),
            stars: Set(data.stars),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23503") || err_str.contains("foreign key") {
                return RatingRepositoryError::ProductNotFound;
            }
            RatingRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(RatingResult {
            id: inserted.id,
            product_id: inserted.product_id,
            stars: inserted.stars,
        })
    }
}
