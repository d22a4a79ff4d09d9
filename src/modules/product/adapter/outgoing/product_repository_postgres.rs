use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::product::application::ports::outgoing::{
    CreateProductData, PhotoResult, ProductRepository, ProductRepositoryError, ProductResult,
    UpdateProductData,
};

use super::sea_orm_entity::product_photos::ActiveModel as PhotoActiveModel;
use super::sea_orm_entity::products::{
    ActiveModel as ProductActiveModel, Entity as ProductEntity, Model as ProductModel,
};

#[derive(Clone)]
pub struct ProductRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_to_result(model: ProductModel) -> ProductResult {
        ProductResult {
            id: model.id,
            name: model.name,
            price: model.price,
            owner_id: model.owner_id,
        }
    }

    fn map_write_err(e: sea_orm::DbErr) -> ProductRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23503") || err_str.contains("foreign key") {
            // The only FK a write can break from the API surface is the
            // category; owners come from verified tokens.
            return ProductRepositoryError::CategoryNotFound;
        }
        ProductRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn create_product(
        &self,
        data: CreateProductData,
    ) -> Result<ProductResult, ProductRepositoryError> {
        let active = ProductActiveModel {
            id: Set(Uuid::new_v4()),
            category_id: Set(data.category_id),
            owner_id: Set(data.owner_id),
            name: Set(data.name),
            description: Set(data.description),
            price: Set(data.price),
            is_original: Set(data.is_original),
            video_path: Set(data.video_path),
            created_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(Self::map_to_result(inserted))
    }

    async fn update_product(
        &self,
        product_id: Uuid,
        data: UpdateProductData,
    ) -> Result<ProductResult, ProductRepositoryError> {
        let product = ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProductRepositoryError::ProductNotFound)?;

        let mut active: ProductActiveModel = product.into();
        active.category_id = Set(data.category_id);
        active.name = Set(data.name);
        active.description = Set(data.description);
        active.price = Set(data.price);
        active.is_original = Set(data.is_original);
        active.video_path = Set(data.video_path);

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(Self::map_to_result(updated))
    }

    /// Cascades to photos, ratings, reviews and cart items via the FK
    /// contract in the schema.
    async fn delete_product(&self, product_id: Uuid) -> Result<(), ProductRepositoryError> {
        let product = ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(ProductRepositoryError::ProductNotFound)?;

        product
            .delete(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn add_photo(
        &self,
        product_id: Uuid,
        image_path: String,
    ) -> Result<PhotoResult, ProductRepositoryError> {
        let active = PhotoActiveModel {
            id: Set(Uuid::new_v4()),
            product_id: Set(product_id),
            image_path: Set(image_path),
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("23503") || err_str.contains("foreign key") {
                return ProductRepositoryError::ProductNotFound;
            }
            ProductRepositoryError::DatabaseError(e.to_string())
        })?;

        Ok(PhotoResult {
            id: inserted.id,
            image_path: inserted.image_path,
        })
    }

    async fn find_owner(&self, product_id: Uuid) -> Result<Option<Uuid>, ProductRepositoryError> {
        let product = ProductEntity::find_by_id(product_id)
            .one(&*self.db)
            .await
            .map_err(|e| ProductRepositoryError::DatabaseError(e.to_string()))?;

        Ok(product.map(|p| p.owner_id))
    }
}
