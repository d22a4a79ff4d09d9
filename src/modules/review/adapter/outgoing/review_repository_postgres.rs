use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::review::application::ports::outgoing::{
    CreateReviewData, ReviewRepository, ReviewRepositoryError, ReviewResult,
};

use super::sea_orm_entity::ActiveModel as ReviewActiveModel;

#[derive(Debug, Clone)]
pub struct ReviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn create_review(
        &self,
        data: CreateReviewData,
    ) -> Result<ReviewResult, ReviewRepositoryError> {
        let active = ReviewActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            product_id: Set(data.product_id),
            text: Set(data.text),
            created_at: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23503") || err_str.contains("foreign key") {
                return ReviewRepositoryError::ProductNotFound;
            }
            ReviewRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(ReviewResult {
            id: inserted.id,
            product_id: inserted.product_id,
            text: inserted.text,
            date: inserted.created_at.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::adapter::outgoing::sea_orm_entity::Model as ReviewModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, RuntimeErr};

    #[tokio::test]
    async fn create_review_returns_result() {
        let review_id = Uuid::new_v4();
        let product_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![ReviewModel {
                id: review_id,
                user_id: Uuid::new_v4(),
                product_id,
                text: "Great tone".to_string(),
                created_at: Utc::now().fixed_offset(),
            }]])
            .into_connection();

        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_review(CreateReviewData {
                user_id: Uuid::new_v4(),
                product_id,
                text: "Great tone".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.id, review_id);
        assert_eq!(result.text, "Great tone");
    }

    #[tokio::test]
    async fn missing_product_maps_to_product_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![sea_orm::DbErr::Query(RuntimeErr::Internal(
                "violates foreign key constraint \"fk_reviews_product_id\"".into(),
            ))])
            .into_connection();

        let repo = ReviewRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .create_review(CreateReviewData {
                user_id: Uuid::new_v4(),
                product_id: Uuid::new_v4(),
                text: "text".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(ReviewRepositoryError::ProductNotFound)
        ));
    }
}
