use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::product::application::ports::outgoing::UserRefView;
use crate::review::application::ports::outgoing::{
    ReviewItemView, ReviewQuery, ReviewQueryError,
};

use super::sea_orm_entity::{Column, Entity as ReviewEntity};

#[derive(Debug, Clone)]
pub struct ReviewQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReviewQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewQuery for ReviewQueryPostgres {
    async fn list(
        &self,
        product_id: Option<Uuid>,
    ) -> Result<Vec<ReviewItemView>, ReviewQueryError> {
        let mut query = ReviewEntity::find().order_by_desc(Column::CreatedAt);
        if let Some(product_id) = product_id {
            query = query.filter(Column::ProductId.eq(product_id));
        }

        let review_models = query
            .all(&*self.db)
            .await
            .map_err(|e| ReviewQueryError::DatabaseError(e.to_string()))?;

        if review_models.is_empty() {
            return Ok(vec![]);
        }

        let mut user_ids: Vec<Uuid> = review_models.iter().map(|r| r.user_id).collect();
        user_ids.sort();
        user_ids.dedup();

        let user_models = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(|e| ReviewQueryError::DatabaseError(e.to_string()))?;

        let users_by_id: HashMap<Uuid, UserRefView> = user_models
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    UserRefView {
                        id: u.id,
                        first_name: u.first_name,
                        last_name: u.last_name,
                    },
                )
            })
            .collect();

        Ok(review_models
            .into_iter()
            .filter_map(|r| {
                users_by_id.get(&r.user_id).cloned().map(|user| ReviewItemView {
                    id: r.id,
                    user,
                    product_id: r.product_id,
                    text: r.text,
                    date: r.created_at.into(),
                })
            })
            .collect())
    }
}
