use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::category::adapter::outgoing::sea_orm_entity as categories;
use crate::product::adapter::outgoing::sea_orm_entity::{product_photos, products};
use crate::product::application::domain::stats::average_stars;
use crate::product::application::ports::outgoing::{
    CategoryRefView, ProductCardView, ProductDetailView, ProductListFilter, ProductQuery,
    ProductQueryError, ProductSort, RatingView, ReviewView, UserRefView,
};
use crate::rating::adapter::outgoing::sea_orm_entity as ratings;
use crate::review::adapter::outgoing::sea_orm_entity as reviews;

#[derive(Clone)]
pub struct ProductQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load_user_refs(
        &self,
        user_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, UserRefView>, ProductQueryError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models
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
            .collect())
    }
}

#[async_trait]
impl ProductQuery for ProductQueryPostgres {
    async fn list(
        &self,
        filter: ProductListFilter,
        sort: ProductSort,
    ) -> Result<Vec<ProductCardView>, ProductQueryError> {
        let mut query = products::Entity::find();

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(Expr::col(products::Column::Name).ilike(&pattern));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(products::Column::CategoryId.eq(category_id));
        }
        if let Some(price_min) = filter.price_min {
            query = query.filter(products::Column::Price.gte(price_min));
        }
        if let Some(price_max) = filter.price_max {
            query = query.filter(products::Column::Price.lte(price_max));
        }
        if let Some(is_original) = filter.is_original {
            query = query.filter(products::Column::IsOriginal.eq(is_original));
        }

        query = match sort {
            ProductSort::Newest => query.order_by_desc(products::Column::CreatedAt),
            ProductSort::Oldest => query.order_by_asc(products::Column::CreatedAt),
            ProductSort::PriceAsc => query.order_by_asc(products::Column::Price),
            ProductSort::PriceDesc => query.order_by_desc(products::Column::Price),
            ProductSort::NameAsc => query.order_by_asc(products::Column::Name),
            ProductSort::NameDesc => query.order_by_desc(products::Column::Name),
        };

        let product_models = query.all(&*self.db).await.map_err(map_db_err)?;
        if product_models.is_empty() {
            return Ok(vec![]);
        }

        let product_ids: Vec<Uuid> = product_models.iter().map(|p| p.id).collect();

        let photo_models = product_photos::Entity::find()
            .filter(product_photos::Column::ProductId.is_in(product_ids.clone()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let rating_models = ratings::Entity::find()
            .filter(ratings::Column::ProductId.is_in(product_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let owner_ids: Vec<Uuid> = product_models.iter().map(|p| p.owner_id).collect();
        let owners = self.load_user_refs(owner_ids).await?;

        let mut photos_by_product: HashMap<Uuid, Vec<String>> = HashMap::new();
        for photo in photo_models {
            photos_by_product
                .entry(photo.product_id)
                .or_default()
                .push(photo.image_path);
        }

        let mut stars_by_product: HashMap<Uuid, Vec<i16>> = HashMap::new();
        for rating in rating_models {
            stars_by_product
                .entry(rating.product_id)
                .or_default()
                .push(rating.stars);
        }

        let mut cards = Vec::with_capacity(product_models.len());
        for product in product_models {
            let owner = owners
                .get(&product.owner_id)
                .cloned()
                .ok_or_else(|| map_missing_row("product owner"))?;

            let stars = stars_by_product.remove(&product.id).unwrap_or_default();

            cards.push(ProductCardView {
                id: product.id,
                name: product.name,
                price: product.price,
                photos: photos_by_product.remove(&product.id).unwrap_or_default(),
                owner,
                average_rating: average_stars(&stars),
                rating_count: stars.len() as u64,
            });
        }

        Ok(cards)
    }

    async fn get_by_id(&self, product_id: Uuid) -> Result<ProductDetailView, ProductQueryError> {
        let product = products::Entity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProductQueryError::NotFound)?;

        let category = categories::Entity::find_by_id(product.category_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or_else(|| map_missing_row("product category"))?;

        let photo_models = product_photos::Entity::find()
            .filter(product_photos::Column::ProductId.eq(product_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let rating_models = ratings::Entity::find()
            .filter(ratings::Column::ProductId.eq(product_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let review_models = reviews::Entity::find()
            .filter(reviews::Column::ProductId.eq(product_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        // One user lookup covers the owner and every rating/review author.
        let mut user_ids: Vec<Uuid> = vec![product.owner_id];
        user_ids.extend(rating_models.iter().map(|r| r.user_id));
        user_ids.extend(review_models.iter().map(|r| r.user_id));
        user_ids.sort();
        user_ids.dedup();

        let user_refs = self.load_user_refs(user_ids).await?;

        let owner = user_refs
            .get(&product.owner_id)
            .cloned()
            .ok_or_else(|| map_missing_row("product owner"))?;

        let stars: Vec<i16> = rating_models.iter().map(|r| r.stars).collect();

        let rating_views = rating_models
            .into_iter()
            .filter_map(|r| {
                user_refs.get(&r.user_id).cloned().map(|user| RatingView {
                    user,
                    stars: r.stars,
                })
            })
            .collect();

        let review_views = review_models
            .into_iter()
            .filter_map(|r| {
                user_refs.get(&r.user_id).cloned().map(|user| ReviewView {
                    user,
                    date: r.created_at.into(),
                    text: r.text,
                })
            })
            .collect();

        Ok(ProductDetailView {
            id: product.id,
            category: CategoryRefView {
                id: category.id,
                name: category.name,
            },
            name: product.name,
            description: product.description,
            price: product.price,
            is_original: product.is_original,
            video_path: product.video_path,
            photos: photo_models.into_iter().map(|p| p.image_path).collect(),
            created_at: product.created_at.into(),
            owner,
            ratings: rating_views,
            reviews: review_views,
            average_rating: average_stars(&stars),
            rating_count: stars.len() as u64,
        })
    }
}

fn map_db_err(e: sea_orm::DbErr) -> ProductQueryError {
    ProductQueryError::DatabaseError(e.to_string())
}

fn map_missing_row(what: &str) -> ProductQueryError {
    ProductQueryError::DatabaseError(format!("dangling reference: {what} row is missing"))
}
