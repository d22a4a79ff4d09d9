use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::product::application::ports::outgoing::UserRefView;
use crate::rating::application::ports::outgoing::{
    RatingItemView, RatingQuery, RatingQueryError,
};

use super::sea_orm_entity::{Column, Entity as RatingEntity};

#[derive(Debug, Clone)]
pub struct RatingQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl RatingQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RatingQuery for RatingQueryPostgres {
    async fn list(
        &self,
        product_id: Option<Uuid>,
    ) -> Result<Vec<RatingItemView>, RatingQueryError> {
        let mut query = RatingEntity::find();
        if let Some(product_id) = product_id {
            query = query.filter(Column::ProductId.eq(product_id));
        }

        let rating_models = query
            .all(&*self.db)
            .await
            .map_err(|e| RatingQueryError::DatabaseError(e.to_string()))?;

        if rating_models.is_empty() {
            return Ok(vec![]);
        }

        let mut user_ids: Vec<Uuid> = rating_models.iter().map(|r| r.user_id).collect();
        user_ids.sort();
        user_ids.dedup();

        let user_models = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(|e| RatingQueryError::DatabaseError(e.to_string()))?;

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

        Ok(rating_models
            .into_iter()
            .filter_map(|r| {
                users_by_id.get(&r.user_id).cloned().map(|user| RatingItemView {
                    id: r.id,
                    user,
                    product_id: r.product_id,
                    stars: r.stars,
                })
            })
            .collect())
    }
}
